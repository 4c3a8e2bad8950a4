// src/update.rs
//
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Apply a message to the state and collect the side effects it requires.
/// Pure with respect to the browser: no DOM, no storage, no network.
pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::SessionConfigured {
            phase,
            project_name,
            endpoint,
            api_key,
        } => {
            state.phase = phase;
            state.project_name = project_name;
            state.endpoint = endpoint;
            state.api_key = api_key;
        }

        Message::ApiKeyChanged(api_key) => {
            state.api_key = api_key.clone();
            commands.push(Command::PersistApiKey(api_key));
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionPhase;

    #[test]
    fn api_key_change_updates_state_and_requests_persistence() {
        let mut state = AppState::new();
        state.api_key = "old".into();

        let commands = update(&mut state, Message::ApiKeyChanged("tok123".into()));

        assert_eq!(state.api_key, "tok123");
        assert!(matches!(&commands[..], [Command::PersistApiKey(k)] if k == "tok123"));
    }

    #[test]
    fn empty_api_key_is_accepted_verbatim() {
        let mut state = AppState::new();
        state.api_key = "old".into();

        let commands = update(&mut state, Message::ApiKeyChanged(String::new()));

        assert_eq!(state.api_key, "");
        assert!(matches!(&commands[..], [Command::PersistApiKey(k)] if k.is_empty()));
    }

    #[test]
    fn session_configured_replaces_all_fields_without_side_effects() {
        let mut state = AppState::new();

        let commands = update(
            &mut state,
            Message::SessionConfigured {
                phase: SessionPhase::Configured,
                project_name: "acme".into(),
                endpoint: "https://api.portals.noloco.io/data/acme".into(),
                api_key: "tok123".into(),
            },
        );

        assert!(commands.is_empty());
        assert_eq!(state.phase, SessionPhase::Configured);
        assert_eq!(state.project_name, "acme");
        assert_eq!(state.endpoint, "https://api.portals.noloco.io/data/acme");
        assert_eq!(state.api_key, "tok123");
    }
}
