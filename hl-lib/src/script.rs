use super::{
    keywords::is_script_keyword,
    lexer::{scan, Action, Rules},
    token::{Token, TokenKind},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Order is significant: lookahead rules must run before the bare
    // identifier, and multi-character operators before their prefixes.
    static ref SCRIPT_RULES: Rules = vec![
        (
            Regex::new(r"(?s)^//.*").unwrap(),
            Action::RestOfLine(TokenKind::Comment)
        ),
        (
            Regex::new(r#"(?s)^"(?:\\.|[^"\\])*"|^'(?:\\.|[^'\\])*'|^`(?:\\.|[^`\\])*`"#).unwrap(),
            Action::Emit(TokenKind::String)
        ),
        (
            Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*:").unwrap(),
            Action::Emit(TokenKind::Property)
        ),
        (
            Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*\(").unwrap(),
            Action::Word {
                is_keyword: is_script_keyword,
                otherwise: TokenKind::Function,
            }
        ),
        (
            Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*").unwrap(),
            Action::Word {
                is_keyword: is_script_keyword,
                otherwise: TokenKind::Plain,
            }
        ),
        (
            Regex::new(r"^[0-9]+(?:\.[0-9]+)?").unwrap(),
            Action::Emit(TokenKind::Number)
        ),
        (
            Regex::new(r"^(?:===|!==|==|!=|<=|>=|=>|[=+\-*/%<>!&|?:])").unwrap(),
            Action::Emit(TokenKind::Operator)
        ),
        (
            Regex::new(r"^[()\[\]{}.,;]").unwrap(),
            Action::Emit(TokenKind::Punctuation)
        ),
        (Regex::new(r"^\s+").unwrap(), Action::Emit(TokenKind::Plain)),
    ];
}

pub fn tokenize_script_line(line: &str) -> Vec<Token> {
    scan(line, &SCRIPT_RULES)
}
