use hl_lib::Language;
use lazy_static::lazy_static;

lazy_static! {
    static ref LONG_VERSION: String = {
        let lexers: Vec<&str> = [Language::Script, Language::Json, Language::Html]
            .iter()
            .map(|language| language.as_str())
            .collect();
        format!("{} (lexers: {})", app_version(), lexers.join(", "))
    };
}

pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line plus the lexers this build ships with.
pub fn long_version() -> &'static str {
    LONG_VERSION.as_str()
}
