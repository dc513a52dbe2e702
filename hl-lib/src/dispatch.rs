use super::{
    html::tokenize_html_line, json::tokenize_json_line, language::Language,
    script::tokenize_script_line, token::Token,
};

/// Tokenizes one line with the lexer for `language`.
///
/// Total over every input: the empty line gives an empty vector and the
/// token texts always concatenate back to `line`.
pub fn tokenize_line(line: &str, language: Language) -> Vec<Token> {
    match language {
        Language::Html => tokenize_html_line(line),
        Language::Json => tokenize_json_line(line),
        Language::Script => tokenize_script_line(line),
    }
}

/// Same as [`tokenize_line`] for a free-form tag; unknown tags use the
/// script lexer.
pub fn tokenize_line_tagged(line: &str, tag: &str) -> Vec<Token> {
    tokenize_line(line, Language::from_tag(tag))
}
