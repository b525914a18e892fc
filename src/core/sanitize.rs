// src/core/sanitize.rs

/// Drop every `"` and trim what's left.
pub fn strip_quotes(s: &str) -> String {
    s.chars().filter(|&c| c != '"').collect::<String>().trim().to_string()
}
