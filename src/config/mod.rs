use crate::errors::{AppError, AppResult};
use crate::schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub schedule: String,
    pub city: String,
    pub epoch_start: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: Self::schedule_file().to_string_lossy().to_string(),
            city: "ঢাকা, বাংলাদেশ".to_string(),
            epoch_start: "2025-03-01".to_string(),
            api_key_env: default_api_key_env(),
            model: default_model(),
            temperature: default_temperature(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("siyam")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".siyam")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("siyam.conf")
    }

    /// Return the full path of the schedule data file
    pub fn schedule_file() -> PathBuf {
        Self::config_dir().join("schedule.yaml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Epoch anchor: the calendar date of schedule row 0.
    pub fn epoch(&self) -> AppResult<NaiveDate> {
        crate::utils::date::parse_date(&self.epoch_start)
            .ok_or_else(|| AppError::InvalidDate(self.epoch_start.clone()))
    }

    /// Basic shape check used by `config --check`.
    pub fn check(&self) -> AppResult<()> {
        self.epoch()?;
        if self.city.trim().is_empty() {
            return Err(AppError::Config("city must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::Config(format!(
                "temperature {} out of range [0.0, 2.0]",
                self.temperature
            )));
        }
        Ok(())
    }

    /// Initialize configuration and schedule files
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file:   {:?}", Self::config_file());
        }

        // Write builtin schedule if no schedule file exists yet
        let schedule_path = Self::schedule_file();
        if !is_test && !schedule_path.exists() {
            let yaml = serde_yaml::to_string(&schedule::builtin::rows()).unwrap();
            let mut file = fs::File::create(&schedule_path)?;
            file.write_all(yaml.as_bytes())?;
        }

        println!("✅ Schedule file: {:?}", schedule_path);

        Ok(())
    }
}
