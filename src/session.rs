//! Session configurator: decides which endpoint this page talks to and
//! which API key it sends, all through the [`HostEnv`] port.

use crate::constants::{settings_url, API_KEY_STORAGE_KEY};
use crate::host::env::HostEnv;
use crate::network::config::EndpointConfig;

/// Whether the page address carries a project identifier. `Unconfigured`
/// pages prompt for one and reload; resolution restarts with a non-empty
/// fragment on the next load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unconfigured,
    Configured,
}

/// Everything resolved at page start.
#[derive(Debug, Clone)]
pub struct SessionBoot {
    pub phase: SessionPhase,
    pub project_name: String,
    pub endpoint: String,
    pub api_key: String,
}

/// Resolve the session from the page address and persisted storage.
///
/// When the fragment is empty this prompts for a project name and navigates,
/// but still returns the default-endpoint session synchronously - the reload
/// tears the page down right after, so nothing may block on it. A cancelled
/// prompt leaves an empty placeholder fragment behind; the malformed
/// endpoint that produces on the next load is a known rough edge and is not
/// corrected here.
pub fn resolve_session(env: &dyn HostEnv) -> SessionBoot {
    let project_name = env.fragment();
    let api_key = env.storage_get(API_KEY_STORAGE_KEY).unwrap_or_default();

    let phase = if project_name.is_empty() {
        ask_for_project_name(env);
        SessionPhase::Unconfigured
    } else {
        SessionPhase::Configured
    };

    let endpoint = EndpointConfig::for_project(&project_name)
        .graphql_url()
        .to_string();

    SessionBoot {
        phase,
        project_name,
        endpoint,
        api_key,
    }
}

fn ask_for_project_name(env: &dyn HostEnv) {
    let project_name = env.prompt("Please enter your project name").unwrap_or_default();
    env.navigate_to_fragment(&project_name);
}

/// Prompt the user for a new API key, pre-filled with the current one and
/// labeled with where to find it. A confirmed value (empty string included)
/// is returned for dispatch; cancel returns `None` and changes nothing.
/// Persistence happens in the reducer so state and storage move together.
pub fn choose_api_key(
    env: &dyn HostEnv,
    current_key: &str,
    project_name: &str,
) -> Option<String> {
    let message = format!("Enter your Portal API Key from {}", settings_url(project_name));
    env.prompt_with_default(&message, current_key)
}
