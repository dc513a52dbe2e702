use crate::commands::shared::{resolve_tag, LanguageArgs, OutputArgs, SourceArgs};
use crate::core::formatter::get_formatter;
use crate::core::source::read_source;
use crate::debug_log;
use clap::Args;
use hl_lib::{split_lines, tokenize_line, Language, Token, KNOWN_TAGS};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct LineView {
    pub line: usize,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Args)]
#[command(about = "Tokenize a snippet and print the tokens of every line")]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Resolves the tag to a lexer, logging when an unknown tag falls back.
pub fn resolve_language(tag: &str) -> Language {
    let language = Language::from_tag(tag);
    if KNOWN_TAGS.iter().any(|known| known.eq_ignore_ascii_case(tag)) {
        debug_log!("Language tag '{tag}' uses the {language} lexer");
    } else {
        debug_log!("Unknown language tag '{tag}', falling back to the {language} lexer");
    }
    language
}

pub fn tokenize_lines(code: &str, language: Language) -> Vec<LineView> {
    split_lines(code)
        .enumerate()
        .map(|(i, line)| LineView {
            line: i + 1,
            tokens: tokenize_line(line, language),
        })
        .collect()
}

fn render_text(lines: &[LineView]) -> String {
    let mut out = String::new();
    for view in lines {
        out.push_str(&format!("line {}:\n", view.line));
        for token in &view.tokens {
            out.push_str(&format!("  {:<12} {:?}\n", token.kind.as_str(), token.text));
        }
    }
    out
}

pub fn execute(args: &TokenizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let code = read_source(&args.source.source)?;
    let tag = resolve_tag(args.language.language.as_deref(), &args.source.source);
    let language = resolve_language(&tag);

    let lines = tokenize_lines(&code, language);
    debug_log!(
        "Tokenized {} lines into {} tokens",
        lines.len(),
        lines.iter().map(|l| l.tokens.len()).sum::<usize>()
    );

    let formatter = get_formatter(&args.output.output);
    if formatter.is_json() {
        print!("{}", formatter.format(&lines));
    } else {
        print!("{}", render_text(&lines));
    }

    Ok(())
}
