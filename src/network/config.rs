use crate::constants::{DATA_API_BASE, DEFAULT_ENDPOINT};

/// GraphQL endpoint configuration.
pub struct EndpointConfig {
    graphql_url: String,
}

impl Default for EndpointConfig {
    /// Points at the public default endpoint. Only meant for unit tests and
    /// the short window before `init_endpoint_config()` runs at startup.
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl EndpointConfig {
    /// Derive the endpoint for a project identifier. An empty identifier
    /// falls back to the public default endpoint; resolution itself never
    /// prompts or navigates (the session layer owns those side effects).
    pub fn for_project(project_name: &str) -> Self {
        if project_name.is_empty() {
            return Self::default();
        }
        Self {
            graphql_url: format!("{}/{}", DATA_API_BASE, project_name),
        }
    }

    /// Wrap an already-resolved URL.
    pub fn from_url(url: &str) -> Self {
        Self {
            graphql_url: url.to_string(),
        }
    }

    /// The absolute URL queries are POSTed to.
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }
}
