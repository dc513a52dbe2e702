use crate::commands::shared::OutputArgs;
use crate::core::formatter::get_formatter;
use clap::Args;
use hl_lib::{Language, KNOWN_TAGS};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct LanguageView {
    pub tag: String,
    pub lexer: Language,
}

#[derive(Debug, Args)]
#[command(about = "List known language tags and the lexer each one uses")]
pub struct LanguagesArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn language_views() -> Vec<LanguageView> {
    KNOWN_TAGS
        .iter()
        .map(|tag| LanguageView {
            tag: tag.to_string(),
            lexer: Language::from_tag(tag),
        })
        .collect()
}

pub fn execute(args: &LanguagesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(
            &language_views(),
            "Known language tags (any other tag uses the script lexer):",
            "No language tags known"
        )
    );
    Ok(())
}
