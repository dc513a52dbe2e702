pub mod block;
pub mod dispatch;
pub mod html;
pub mod json;
pub mod keywords;
pub mod language;
pub mod lexer;
pub mod render;
pub mod script;
pub mod token;

pub use block::{split_lines, tokenize_block};
pub use dispatch::{tokenize_line, tokenize_line_tagged};
pub use language::{Language, KNOWN_TAGS};
pub use render::render_code_block;
pub use token::{Token, TokenKind};
