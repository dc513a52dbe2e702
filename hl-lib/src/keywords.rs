pub const KW_ASYNC: &str = "async";
pub const KW_AWAIT: &str = "await";
pub const KW_CONST: &str = "const";
pub const KW_ELSE: &str = "else";
pub const KW_FALSE: &str = "false";
pub const KW_FETCH: &str = "fetch";
pub const KW_FUNCTION: &str = "function";
pub const KW_IF: &str = "if";
pub const KW_IMPORT: &str = "import";
pub const KW_FROM: &str = "from";
pub const KW_LET: &str = "let";
pub const KW_NEW: &str = "new";
pub const KW_NULL: &str = "null";
pub const KW_RETURN: &str = "return";
pub const KW_TRUE: &str = "true";
pub const KW_VAR: &str = "var";

pub const SCRIPT_KEYWORDS: &[&str] = &[
    KW_ASYNC,
    KW_AWAIT,
    KW_CONST,
    KW_ELSE,
    KW_FALSE,
    KW_FETCH,
    KW_FUNCTION,
    KW_IF,
    KW_IMPORT,
    KW_FROM,
    KW_LET,
    KW_NEW,
    KW_NULL,
    KW_RETURN,
    KW_TRUE,
    KW_VAR,
];

pub const JSON_KEYWORDS: &[&str] = &[KW_TRUE, KW_FALSE, KW_NULL];

pub fn is_script_keyword(word: &str) -> bool {
    SCRIPT_KEYWORDS.contains(&word)
}

pub fn is_json_keyword(word: &str) -> bool {
    JSON_KEYWORDS.contains(&word)
}
