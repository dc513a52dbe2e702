use serde::Serialize;

pub const TAG_HTML: &str = "html";
pub const TAG_HTM: &str = "htm";
pub const TAG_JSON: &str = "json";
pub const TAG_JAVASCRIPT: &str = "javascript";
pub const TAG_TYPESCRIPT: &str = "typescript";
pub const TAG_JS: &str = "js";
pub const TAG_TS: &str = "ts";

/// Tags the documentation pages declare for their snippets.
pub const KNOWN_TAGS: &[&str] = &[
    TAG_HTML,
    TAG_HTM,
    TAG_JSON,
    TAG_JAVASCRIPT,
    TAG_TYPESCRIPT,
    TAG_JS,
    TAG_TS,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript/TypeScript-like source and any other script block.
    Script,
    Json,
    Html,
}

impl Language {
    /// Resolves a declared tag. Unrecognized tags fall back to `Script`
    /// instead of failing; snippets are always highlighted somehow.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case(TAG_HTML) || tag.eq_ignore_ascii_case(TAG_HTM) {
            Language::Html
        } else if tag.eq_ignore_ascii_case(TAG_JSON) {
            Language::Json
        } else {
            Language::Script
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Script => "script",
            Language::Json => "json",
            Language::Html => "html",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
