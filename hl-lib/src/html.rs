use super::{
    lexer::{scan, Action, Rules},
    token::{Token, TokenKind},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HTML_RULES: Rules = vec![
        (
            Regex::new(r"(?s)^<!--.*?-->").unwrap(),
            Action::Emit(TokenKind::Comment)
        ),
        (
            Regex::new(r"^</?[A-Za-z][A-Za-z0-9_-]*").unwrap(),
            Action::Emit(TokenKind::Tag)
        ),
        (Regex::new(r"^/?>").unwrap(), Action::Emit(TokenKind::Punctuation)),
        (
            Regex::new(r"^(\s+)([A-Za-z_:][A-Za-z0-9_:.-]*)").unwrap(),
            Action::SplitLeading(TokenKind::AttrName)
        ),
        (Regex::new(r"^=").unwrap(), Action::Emit(TokenKind::Operator)),
        (
            Regex::new(r#"(?s)^"(?:\\.|[^"\\])*"|^'(?:\\.|[^'\\])*'"#).unwrap(),
            Action::Emit(TokenKind::AttrValue)
        ),
    ];
}

pub fn tokenize_html_line(line: &str) -> Vec<Token> {
    scan(line, &HTML_RULES)
}
