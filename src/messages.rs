// src/messages.rs
//
// The events that can mutate session state. Expand as needed.
//
use crate::session::SessionPhase;

#[derive(Debug, Clone)]
pub enum Message {
    /// Result of endpoint resolution at startup.
    SessionConfigured {
        phase: SessionPhase,
        project_name: String,
        endpoint: String,
        api_key: String,
    },

    /// The user confirmed a new API key (empty string included).
    ApiKeyChanged(String),
}

/// Side effects requested by the reducer, executed by the dispatcher
/// *after* the state borrow is released.
#[derive(Debug, Clone)]
pub enum Command {
    PersistApiKey(String),
}
