//! [`HostEnv`] adapter backed by the real browser globals.

use web_sys::{Storage, Window};

use crate::host::env::HostEnv;

pub struct BrowserEnv;

impl BrowserEnv {
    pub fn new() -> Self {
        Self
    }

    fn window(&self) -> Option<Window> {
        web_sys::window()
    }

    fn local_storage(&self) -> Option<Storage> {
        self.window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl Default for BrowserEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEnv for BrowserEnv {
    fn fragment(&self) -> String {
        self.window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| h.trim_start_matches('#').to_string())
            .unwrap_or_default()
    }

    fn navigate_to_fragment(&self, fragment: &str) {
        let Some(window) = self.window() else { return };
        let location = window.location();
        if let Err(e) = location.set_hash(fragment) {
            web_sys::console::error_1(&format!("Failed to set fragment: {:?}", e).into());
            return;
        }
        if let Err(e) = location.reload() {
            web_sys::console::error_1(&format!("Failed to reload page: {:?}", e).into());
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.window()
            .and_then(|w| w.prompt_with_message(message).ok())
            .flatten()
    }

    fn prompt_with_default(&self, message: &str, default: &str) -> Option<String> {
        self.window()
            .and_then(|w| w.prompt_with_message_and_default(message, default).ok())
            .flatten()
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn storage_set(&self, key: &str, value: &str) {
        let Some(storage) = self.local_storage() else {
            web_sys::console::warn_1(&"localStorage unavailable, value not persisted".into());
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            web_sys::console::error_1(&format!("Failed to persist {}: {:?}", key, e).into());
        }
    }
}
