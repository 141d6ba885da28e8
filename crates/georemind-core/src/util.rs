//! Text helpers for form fields and config values

/// `true` for `None` and `""`; whitespace counts as content
pub fn is_null_or_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Trim a configured path or label, dropping it when nothing is left
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}
