pub mod config;
pub mod fetcher;

use config::EndpointConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    static ref ENDPOINT_CONFIG: RwLock<Option<EndpointConfig>> = RwLock::new(None);
}

/// Store the resolved endpoint. Must run before the widget issues queries.
pub fn init_endpoint_config(config: EndpointConfig) {
    *ENDPOINT_CONFIG.write().unwrap() = Some(config);
}

/// The URL queries are POSTed to. Falls back to the public default when the
/// config was never initialized (early startup, unit tests).
pub fn graphql_url() -> String {
    let guard = ENDPOINT_CONFIG.read().unwrap();
    guard
        .as_ref()
        .map(|cfg| cfg.graphql_url().to_string())
        .unwrap_or_else(|| crate::constants::DEFAULT_ENDPOINT.to_string())
}
