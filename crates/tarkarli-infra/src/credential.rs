//! Upstream API credential checks.
//!
//! A key that is missing, blank, or still set to a template placeholder is
//! treated as absent so the relay can answer with its "not configured"
//! message instead of sending a doomed request.

use secrecy::SecretString;

/// Values shipped in example `.env` files and docs.
const PLACEHOLDER_KEYS: &[&str] = &[
    "your_gemini_api_key",
    "your-gemini-api-key",
    "your_api_key_here",
    "your-api-key-here",
    "changeme",
    "placeholder",
    "xxx",
];

/// Returns true when `key` looks like a template value rather than a real key.
pub fn is_placeholder_key(key: &str) -> bool {
    let key = key.trim().to_lowercase();
    key.is_empty()
        || PLACEHOLDER_KEYS.contains(&key.as_str())
        || key.starts_with("your_")
        || key.starts_with("your-")
        || (key.starts_with('<') && key.ends_with('>'))
}

/// Wrap a configured key in a [`SecretString`] if it is usable.
pub fn usable_api_key(raw: Option<&str>) -> Option<SecretString> {
    match raw {
        Some(key) if !is_placeholder_key(key) => Some(SecretString::from(key.trim().to_string())),
        Some(_) => {
            tracing::warn!("Gemini API key is a placeholder value, treating as not configured");
            None
        }
        None => None,
    }
}
