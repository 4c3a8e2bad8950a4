use std::cell::RefCell;

use crate::host::env::HostEnv;
use crate::messages::{Command, Message};
use crate::session::SessionPhase;
use crate::update::update;

/// Global session state. The project identifier and endpoint are set once at
/// startup; the API key is the only field that changes afterwards, always via
/// a dispatched [`Message`].
pub struct AppState {
    pub phase: SessionPhase,
    pub project_name: String,
    pub endpoint: String,
    pub api_key: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Unconfigured,
            project_name: String::new(),
            endpoint: String::new(),
            api_key: String::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Snapshot of the API key for call-time reads by the fetcher.
pub fn current_api_key() -> String {
    APP_STATE.with(|state| state.borrow().api_key.clone())
}

/// Dispatch a message and run the resulting commands against `env`. The
/// state borrow is released before any command executes so command handlers
/// are free to dispatch again.
pub fn dispatch_with_env(env: &dyn HostEnv, msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        update(&mut state, msg)
    });

    for command in commands {
        match command {
            Command::PersistApiKey(key) => {
                env.storage_set(crate::constants::API_KEY_STORAGE_KEY, &key);
            }
        }
    }
}

/// Dispatch against the real browser environment.
pub fn dispatch_global_message(msg: Message) {
    dispatch_with_env(&crate::host::BrowserEnv::new(), msg);
}
