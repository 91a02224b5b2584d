//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

/// Number of characters (Unicode scalar values), not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates minimum string length in characters
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Validates that a string is not empty
pub fn validate_required(s: &str) -> Result<(), String> {
    if s.is_empty() {
        Err("This field is required".to_string())
    } else {
        Ok(())
    }
}

/// Regex pattern matching with a process-wide compile cache.
///
/// Returns the compile error for a bad pattern instead of treating it as a
/// non-match, so callers can tell a broken rule from a failing value.
pub fn matches_regex(value: &str, pattern: &str) -> Result<bool, regex::Error> {
    static REGEX_CACHE: Lazy<Mutex<HashMap<String, Regex>>> =
        Lazy::new(|| Mutex::new(HashMap::new()));

    let mut cache = REGEX_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.is_match(value));
    }

    let regex = Regex::new(pattern)?;
    let matched = regex.is_match(value);
    cache.insert(pattern.to_string(), regex);
    Ok(matched)
}
