//! Small crate-wide helpers.

/// Console logging that compiles away in release builds. Keeps call-sites
/// free of `web_sys::console::log_1(&format!(..).into())` boilerplate.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}
