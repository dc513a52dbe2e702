use super::{dispatch::tokenize_line, language::Language, token::Token};

/// Splits a whole snippet into lines and tokenizes each one on its own.
///
/// The snippet is trimmed once as a whole, so indentation of the first line
/// is dropped but inner lines keep theirs. A trailing `\r` from CRLF input
/// stays part of its line.
pub fn split_lines(code: &str) -> impl Iterator<Item = &str> {
    code.trim().split('\n')
}

pub fn tokenize_block(code: &str, language: Language) -> Vec<Vec<Token>> {
    split_lines(code)
        .map(|line| tokenize_line(line, language))
        .collect()
}
