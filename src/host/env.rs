//! A port that abstracts the **browser singletons** the session depends on:
//! the URL fragment, blocking prompt dialogs, localStorage and navigation.
//!
//! # Purpose
//! Keeping these behind a trait means:
//!
//! - Session logic does **not** reach for `web_sys::window()` directly
//! - Implementations can be swapped (real browser, scripted fake)
//! - The project-prompt/reload flow is testable without simulating a page
//!
//! # Typical implementations
//! - [`crate::host::BrowserEnv`]: backed by `window`, `location`,
//!   `localStorage`
//! - Scripted fakes in unit tests that record prompts and navigations
pub trait HostEnv {
    /// The portion of the page URL after `#`, without the `#` itself.
    /// Empty string when no fragment is present.
    fn fragment(&self) -> String;

    /// Replace the fragment with `fragment` and reload the page. The current
    /// session tears down after this call; callers must not rely on any
    /// state surviving it.
    fn navigate_to_fragment(&self, fragment: &str);

    /// Blocking prompt dialog. `None` when the user cancels.
    fn prompt(&self, message: &str) -> Option<String>;

    /// Blocking prompt dialog with a pre-filled value. `None` on cancel.
    fn prompt_with_default(&self, message: &str, default: &str) -> Option<String>;

    /// Read a persisted value. Absence and storage failure both map to
    /// `None`; the session treats either as "no value".
    fn storage_get(&self, key: &str) -> Option<String>;

    /// Persist a value. Failures are swallowed after logging - persistence
    /// is best-effort in-browser.
    fn storage_set(&self, key: &str, value: &str);
}
