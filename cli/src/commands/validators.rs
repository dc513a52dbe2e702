use crate::core::paths::is_stdin;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_+#.-]*$").unwrap();
}

pub fn validate_source(source: &str) -> Result<String, String> {
    if is_stdin(source) || Path::new(source).is_file() {
        Ok(source.to_string())
    } else if Path::new(source).is_dir() {
        Err(format!("Source is a directory: {source}"))
    } else {
        Err(format!("Path does not exist: {source}"))
    }
}

/// Tags are free-form so unknown ones can fall back to the script lexer,
/// but they end up in CSS class names and must stay word-like.
pub fn validate_language_tag(tag: &str) -> Result<String, String> {
    if tag.len() > 32 {
        return Err("Language tag must be 32 characters or less".to_string());
    }
    if !TAG_REGEX.is_match(tag) {
        return Err("Language tag must match pattern: ^[A-Za-z][A-Za-z0-9_+#.-]*$".to_string());
    }
    Ok(tag.to_string())
}
