use super::{
    keywords::{is_json_keyword, JSON_KEYWORDS},
    lexer::{scan, Action, Rules},
    token::{Token, TokenKind},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LITERAL_REGEX: Regex = {
        let pattern = format!("^({})\\b", JSON_KEYWORDS.join("|"));
        Regex::new(&pattern).unwrap()
    };
    static ref JSON_RULES: Rules = vec![
        (
            Regex::new(r#"(?s)^("(?:\\.|[^"\\])*")\s*:"#).unwrap(),
            Action::Emit(TokenKind::Property)
        ),
        (
            Regex::new(r#"(?s)^"(?:\\.|[^"\\])*""#).unwrap(),
            Action::Emit(TokenKind::String)
        ),
        (
            LITERAL_REGEX.clone(),
            Action::Word {
                is_keyword: is_json_keyword,
                otherwise: TokenKind::Plain,
            }
        ),
        (
            Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?(?:[eE][+\-]?[0-9]+)?").unwrap(),
            Action::Emit(TokenKind::Number)
        ),
        (
            Regex::new(r"^[()\[\]{}.,:]").unwrap(),
            Action::Emit(TokenKind::Punctuation)
        ),
        (Regex::new(r"^\s+").unwrap(), Action::Emit(TokenKind::Plain)),
    ];
}

pub fn tokenize_json_line(line: &str) -> Vec<Token> {
    scan(line, &JSON_RULES)
}
