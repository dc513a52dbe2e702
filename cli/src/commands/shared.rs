use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use crate::core::paths::{extension, is_stdin};
use clap::Args;
use hl_lib::language::{TAG_HTML, TAG_JAVASCRIPT, TAG_JSON, TAG_TYPESCRIPT};
use std::path::Path;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        help = "Path to the snippet file, or - for stdin",
        value_parser = validators::validate_source
    )]
    pub source: String,
}

#[derive(Debug, Args)]
pub struct LanguageArgs {
    #[arg(
        short = 'l',
        long = "language",
        alias = "lang",
        help = "Language tag (html, json, javascript, typescript, ...). Defaults to the file extension",
        value_parser = validators::validate_language_tag
    )]
    pub language: Option<String>,
}

/// Picks the declared tag for a snippet: the explicit `--language`, else
/// one derived from the file name. Never looks at the content.
pub fn resolve_tag(language: Option<&str>, source: &str) -> String {
    if let Some(tag) = language {
        return tag.to_string();
    }
    if is_stdin(source) {
        return TAG_JAVASCRIPT.to_string();
    }
    match extension(Path::new(source)).as_deref() {
        Some("html") | Some("htm") => TAG_HTML.to_string(),
        Some("json") => TAG_JSON.to_string(),
        Some("ts") | Some("tsx") | Some("mts") | Some("cts") => TAG_TYPESCRIPT.to_string(),
        Some(ext) if validators::validate_language_tag(ext).is_ok() && ext != "js" => {
            ext.to_string()
        }
        _ => TAG_JAVASCRIPT.to_string(),
    }
}
