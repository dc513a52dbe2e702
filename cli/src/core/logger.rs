use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Debug output on stderr, switched on by the global `--debug` flag.
/// Stdout stays reserved for command output.
pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    /// Logging before `init` is silently dropped.
    fn enabled() -> bool {
        LOGGER.get().map(|logger| logger.debug).unwrap_or(false)
    }

    pub fn debug(message: &str) {
        if Self::enabled() {
            eprintln!("[debug] {message}");
        }
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if Self::enabled() {
            eprintln!("[debug] {args}");
        }
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::core::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}
