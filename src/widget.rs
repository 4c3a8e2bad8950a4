//! Bridge to the embedded GraphQL IDE widget.
//!
//! The widget is pre-built JavaScript loaded by the host page, which exposes
//! a tiny `window.graphiqlBridge` surface: mount the editor with a fetcher
//! and an initial query, and read back the current editor texts. Everything
//! is `catch` so a missing bridge surfaces as a `Result` instead of an
//! unwind through the wasm boundary.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Render the IDE with `fetcher` as its network callback and
    /// `default_query` as the initial editor content.
    #[wasm_bindgen(catch, js_namespace = ["window", "graphiqlBridge"], js_name = mount)]
    pub fn mount(fetcher: &JsValue, default_query: &str) -> Result<(), JsValue>;

    /// The query text currently in the editor.
    #[wasm_bindgen(catch, js_namespace = ["window", "graphiqlBridge"], js_name = currentQuery)]
    pub fn current_query() -> Result<String, JsValue>;

    /// The variables text currently in the editor.
    #[wasm_bindgen(catch, js_namespace = ["window", "graphiqlBridge"], js_name = currentVariables)]
    pub fn current_variables() -> Result<String, JsValue>;
}
