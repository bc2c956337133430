//! Gemini REST API implementation of the assistant capability.

use super::{Assistant, FALLBACK_EMPTY, FALLBACK_ERROR, SYSTEM_INSTRUCTION};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiAssistant {
    client: Client,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiAssistant {
    /// Build the client from config. The API key is read from the
    /// environment (variable name is configurable); a missing key is not an
    /// error here, `complete` short-circuits to the fallback instead, so
    /// the countdown surfaces keep working offline.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Assistant(e.to_string()))?;

        let api_key = env::var(&cfg.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(Self {
            client,
            api_key,
            model: cfg.model.clone(),
            temperature: cfg.temperature,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    fn request_text(&self, key: &str, prompt: &str) -> Option<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .ok()?
            .error_for_status()
            .ok()?;

        let raw = response.text().ok()?;
        let parsed: GenerateResponse = serde_json::from_str(&raw).ok()?;
        Some(extract_text(parsed))
    }
}

impl Assistant for GeminiAssistant {
    fn complete(&self, prompt: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return FALLBACK_ERROR.to_string();
        };

        match self.request_text(key, prompt) {
            Some(text) => text,
            None => FALLBACK_ERROR.to_string(),
        }
    }
}

fn extract_text(resp: GenerateResponse) -> String {
    let text = resp
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    let text = text.trim().to_string();
    if text.is_empty() {
        FALLBACK_EMPTY.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(parts: Vec<&str>) -> GenerateResponse {
        GenerateResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: parts
                        .into_iter()
                        .map(|t| Part {
                            text: t.to_string(),
                        })
                        .collect(),
                }),
            }],
        }
    }

    #[test]
    fn joins_candidate_parts() {
        assert_eq!(extract_text(resp(vec!["রমজান ", "মোবারক"])), "রমজান মোবারক");
    }

    #[test]
    fn deserializes_wire_response() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"রমজান মোবারক"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(parsed), "রমজান মোবারক");

        // unknown shape still decodes to the empty default
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(parsed), FALLBACK_EMPTY);
    }

    #[test]
    fn empty_response_maps_to_fallback() {
        assert_eq!(
            extract_text(GenerateResponse { candidates: vec![] }),
            FALLBACK_EMPTY
        );
        assert_eq!(extract_text(resp(vec!["  "])), FALLBACK_EMPTY);
    }
}
