use super::token::{Token, TokenKind};
use regex::Regex;

/// What a rule does with its match.
///
/// Patterns are anchored with `^`. When a pattern has a first capture group,
/// only that group is consumed; whatever the pattern matches after it acts as
/// lookahead context.
pub enum Action {
    Emit(TokenKind),
    /// A word that becomes `Keyword` when `is_keyword` accepts it.
    Word {
        is_keyword: fn(&str) -> bool,
        otherwise: TokenKind,
    },
    /// Consumes the rest of the line and ends the scan.
    RestOfLine(TokenKind),
    /// Group 1 is emitted as `Plain`, group 2 with the given kind.
    SplitLeading(TokenKind),
}

pub type Rules = Vec<(Regex, Action)>;

/// Runs an ordered rule table over one line.
///
/// The first rule that matches at the cursor wins. When none does, a single
/// character is emitted as `Plain`, so the cursor always moves forward and
/// the token texts always concatenate back to `line`.
pub fn scan(line: &str, rules: &[(Regex, Action)]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut remaining = line;

    'cursor: while !remaining.is_empty() {
        for (pattern, action) in rules {
            match apply(pattern, action, remaining, &mut tokens) {
                None => continue,
                Some(Step::Advance(len)) => {
                    remaining = &remaining[len..];
                    continue 'cursor;
                }
                Some(Step::Done) => break 'cursor,
            }
        }

        let Some(ch) = remaining.chars().next() else {
            break;
        };
        let len = ch.len_utf8();
        tokens.push(Token::plain(&remaining[..len]));
        remaining = &remaining[len..];
    }

    tokens
}

enum Step {
    Advance(usize),
    Done,
}

/// `None` when the rule does not apply at the cursor.
fn apply(
    pattern: &Regex,
    action: &Action,
    remaining: &str,
    tokens: &mut Vec<Token>,
) -> Option<Step> {
    let caps = pattern.captures(remaining)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 || whole.is_empty() {
        return None;
    }

    match action {
        Action::Emit(kind) => {
            let text = caps.get(1).unwrap_or(whole).as_str();
            if text.is_empty() {
                return None;
            }
            tokens.push(Token::new(*kind, text));
            Some(Step::Advance(text.len()))
        }
        Action::Word {
            is_keyword,
            otherwise,
        } => {
            let text = caps.get(1).unwrap_or(whole).as_str();
            if text.is_empty() {
                return None;
            }
            let kind = if is_keyword(text) {
                TokenKind::Keyword
            } else {
                *otherwise
            };
            tokens.push(Token::new(kind, text));
            Some(Step::Advance(text.len()))
        }
        Action::RestOfLine(kind) => {
            tokens.push(Token::new(*kind, remaining));
            Some(Step::Done)
        }
        Action::SplitLeading(kind) => {
            let leading = caps.get(1)?.as_str();
            let body = caps.get(2)?.as_str();
            if body.is_empty() {
                return None;
            }
            if !leading.is_empty() {
                tokens.push(Token::plain(leading));
            }
            tokens.push(Token::new(*kind, body));
            Some(Step::Advance(leading.len() + body.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::concat;

    fn digits_and_words() -> Rules {
        vec![
            (Regex::new(r"^[0-9]+").unwrap(), Action::Emit(TokenKind::Number)),
            (
                Regex::new(r"^([a-z]+)\(").unwrap(),
                Action::Emit(TokenKind::Function),
            ),
            (
                Regex::new(r"^[a-z]+").unwrap(),
                Action::Word {
                    is_keyword: |w| w == "if",
                    otherwise: TokenKind::Plain,
                },
            ),
            (
                Regex::new(r"^#.*").unwrap(),
                Action::RestOfLine(TokenKind::Comment),
            ),
            (
                Regex::new(r"^(\s+)([a-z]+)").unwrap(),
                Action::SplitLeading(TokenKind::AttrName),
            ),
        ]
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let tokens = scan("42abc", &digits_and_words());
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number, "42"),
                Token::new(TokenKind::Plain, "abc"),
            ]
        );
    }

    #[test]
    fn test_lookahead_group_is_not_consumed() {
        let tokens = scan("go()", &digits_and_words());
        assert_eq!(tokens[0], Token::new(TokenKind::Function, "go"));
        assert_eq!(tokens[1], Token::plain("("));
        assert_eq!(tokens[2], Token::plain(")"));
    }

    #[test]
    fn test_word_action_checks_keywords() {
        let tokens = scan("if", &digits_and_words());
        assert_eq!(tokens, vec![Token::new(TokenKind::Keyword, "if")]);
    }

    #[test]
    fn test_rest_of_line_stops_scan() {
        let tokens = scan("1 # 2 3", &digits_and_words());
        assert_eq!(tokens.last(), Some(&Token::new(TokenKind::Comment, "# 2 3")));
        assert_eq!(concat(&tokens), "1 # 2 3");
    }

    #[test]
    fn test_split_leading_emits_plain_first() {
        let tokens = scan("1  ab", &digits_and_words());
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number, "1"),
                Token::plain("  "),
                Token::new(TokenKind::AttrName, "ab"),
            ]
        );
    }

    #[test]
    fn test_fallback_handles_multibyte_characters() {
        let tokens = scan("é→", &digits_and_words());
        assert_eq!(tokens, vec![Token::plain("é"), Token::plain("→")]);
    }

    #[test]
    fn test_empty_line() {
        assert!(scan("", &digits_and_words()).is_empty());
    }
}
