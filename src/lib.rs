use wasm_bindgen::prelude::*;

pub mod clipboard;
pub mod constants;
pub mod copy_request;
pub mod host;
pub mod messages;
pub mod network;
pub mod session;
pub mod state;
pub mod toast;
pub mod ui;
pub mod update;
pub mod utils;
pub mod widget;

pub use clipboard::{copy_to_clipboard, CopyOutcome};
pub use copy_request::build_copy_snapshot;
pub use network::config::EndpointConfig;
pub use network::fetcher::{GraphQlRequest, RequestParts};
pub use session::{choose_api_key, resolve_session, SessionPhase};

use host::BrowserEnv;
use messages::Message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Resolve project/endpoint/key. On an empty fragment this also prompts
    // for a project name and kicks off a reload; the default endpoint still
    // comes back synchronously so the mount below never blocks on it.
    let env = BrowserEnv::new();
    let boot = session::resolve_session(&env);

    network::init_endpoint_config(EndpointConfig::from_url(&boot.endpoint));
    state::dispatch_global_message(Message::SessionConfigured {
        phase: boot.phase,
        project_name: boot.project_name,
        endpoint: boot.endpoint,
        api_key: boot.api_key,
    });

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    ui::setup::build_toolbar(&document)?;

    // Hand the widget its fetcher and the initial query. The fetcher reads
    // the key per call, so it never needs to be swapped.
    widget::mount(&network::fetcher::widget_fetcher(), constants::DEFAULT_QUERY)?;

    Ok(())
}
