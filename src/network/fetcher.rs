//! Builds the fetcher the IDE widget calls once per submitted query.
//!
//! Request shaping is kept in [`RequestParts`] (pure, natively testable);
//! the browser half wires those parts into a `fetch` call. The API key is
//! read from the global state **at call time**, so a key change is honored
//! by the very next query without rebuilding the fetcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use crate::debug_log;

/// The payload the widget hands to the fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default = "empty_object")]
    pub variables: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Everything that goes on the wire, minus the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    pub url: String,
    pub content_type: &'static str,
    pub authorization: String,
    pub body: String,
}

impl RequestParts {
    pub fn build(
        endpoint: &str,
        api_key: &str,
        payload: &GraphQlRequest,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            url: endpoint.to_string(),
            content_type: "application/json",
            authorization: format!("Bearer {}", api_key),
            body: serde_json::to_string(payload)?,
        })
    }
}

/// POST a query to the configured endpoint and resolve with the parsed JSON
/// response. Transport failures and non-JSON bodies reject unchanged - no
/// retries, no status-code interpretation; the widget displays raw errors.
pub async fn execute_graphql(payload: GraphQlRequest) -> Result<JsValue, JsValue> {
    use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

    let endpoint = crate::network::graphql_url();
    let api_key = crate::state::current_api_key();
    let parts = RequestParts::build(&endpoint, &api_key, &payload)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize request: {}", e)))?;

    debug_log!("POST {} ({} byte body)", parts.url, parts.body.len());

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new()?;
    headers.append("Content-Type", parts.content_type)?;
    headers.append("Authorization", &parts.authorization)?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&parts.body));

    let request = Request::new_with_str_and_init(&parts.url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    // The widget owns error presentation, so the body is parsed regardless
    // of HTTP status and any rejection bubbles up as-is.
    JsFuture::from(resp.json()?).await
}

/// The JS closure handed to the widget as its `fetcher` prop. Lives for the
/// page lifetime; the widget never needs a replacement because the key is
/// re-read per call.
pub fn widget_fetcher() -> JsValue {
    let fetcher = Closure::wrap(Box::new(move |params: JsValue| -> js_sys::Promise {
        future_to_promise(async move {
            let payload: GraphQlRequest = serde_wasm_bindgen::from_value(params)
                .map_err(|e| JsValue::from_str(&format!("Invalid request payload: {}", e)))?;
            execute_graphql(payload).await
        })
    }) as Box<dyn FnMut(JsValue) -> js_sys::Promise>);

    let js_value = fetcher.as_ref().clone();
    fetcher.forget();
    js_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ping() -> GraphQlRequest {
        GraphQlRequest {
            query: "{ping}".into(),
            variables: json!({}),
        }
    }

    #[test]
    fn shapes_post_to_project_endpoint_with_bearer_header() {
        let endpoint = crate::network::config::EndpointConfig::for_project("acme");
        let parts = RequestParts::build(endpoint.graphql_url(), "tok123", &ping()).unwrap();

        assert_eq!(parts.url, "https://api.portals.noloco.io/data/acme");
        assert_eq!(parts.content_type, "application/json");
        assert_eq!(parts.authorization, "Bearer tok123");
        assert_eq!(parts.body, r#"{"query":"{ping}","variables":{}}"#);
    }

    #[test]
    fn building_twice_yields_identical_parts() {
        let endpoint = "https://api.portals.noloco.io/data/acme";
        let first = RequestParts::build(endpoint, "tok123", &ping()).unwrap();
        let second = RequestParts::build(endpoint, "tok123", &ping()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_key_still_sends_bearer_prefix() {
        // Unauthenticated sessions send "Bearer " with an empty token, the
        // endpoint decides what that means.
        let parts = RequestParts::build("https://example.test/", "", &ping()).unwrap();
        assert_eq!(parts.authorization, "Bearer ");
    }

    #[test]
    fn missing_variables_deserialize_to_empty_object() {
        let payload: GraphQlRequest = serde_json::from_str(r#"{"query":"{ping}"}"#).unwrap();
        assert_eq!(payload.variables, json!({}));
    }

    #[test]
    fn key_change_is_observed_by_the_next_request() {
        use crate::host::env::HostEnv;
        use crate::messages::Message;
        use crate::state;

        struct NullEnv;
        impl HostEnv for NullEnv {
            fn fragment(&self) -> String {
                String::new()
            }
            fn navigate_to_fragment(&self, _fragment: &str) {}
            fn prompt(&self, _message: &str) -> Option<String> {
                None
            }
            fn prompt_with_default(&self, _message: &str, _default: &str) -> Option<String> {
                None
            }
            fn storage_get(&self, _key: &str) -> Option<String> {
                None
            }
            fn storage_set(&self, _key: &str, _value: &str) {}
        }

        state::dispatch_with_env(&NullEnv, Message::ApiKeyChanged("k1".into()));
        let before =
            RequestParts::build("https://example.test/", &state::current_api_key(), &ping())
                .unwrap();
        assert_eq!(before.authorization, "Bearer k1");

        state::dispatch_with_env(&NullEnv, Message::ApiKeyChanged("k2".into()));
        let after =
            RequestParts::build("https://example.test/", &state::current_api_key(), &ping())
                .unwrap();
        assert_eq!(after.authorization, "Bearer k2");
    }
}
