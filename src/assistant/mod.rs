//! Assistant boundary.
//!
//! The rest of the application talks to a single capability: send a prompt,
//! get text back. Implementations absorb every failure (missing key,
//! network, timeout, empty response) and substitute a user-presentable
//! fallback string, so no provider error type ever crosses this module.

pub mod gemini;

pub use gemini::GeminiAssistant;

/// One-method capability: total, never returns an error to the caller.
pub trait Assistant {
    fn complete(&self, prompt: &str) -> String;
}

/// Persona sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional, empathetic, and culturally aware Ramadan Assistant for Bengali-speaking users. Provide accurate Islamic information based on general consensus, healthy eating tips for fasting, and motivational content. Always respond in clear and polite Bengali (Bangla). If the user asks for quotes, keep them brief. If they ask about health, recommend consulting a doctor for medical issues.";

/// Fixed prompt used by the `quote` command and the watch-mode banner.
pub const QUOTE_PROMPT: &str =
    "একটি ছোট ইসলামিক রমজান মোবারক স্ট্যাটাস বা উক্তি দিন। শুধুমাত্র একটি বাক্য দিবেন।";

/// Shown when the provider answers but with no usable text.
pub const FALLBACK_EMPTY: &str =
    "আমি কোনো সঠিক উত্তর খুঁজে পাইনি। অনুগ্রহ করে অন্যভাবে প্রশ্ন করুন।";

/// Shown on any transport-level failure (no key, network, timeout).
pub const FALLBACK_ERROR: &str =
    "দুঃখিত, এআই সংযোগে সমস্যা হয়েছে। দয়া করে ইন্টারনেট কানেকশন চেক করে আবার চেষ্টা করুন।";

/// Default inspirational line when the quote fetch fails.
pub const FALLBACK_QUOTE: &str = "রমজান মোবারক! আপনার ইবাদত কবুল হোক।";
