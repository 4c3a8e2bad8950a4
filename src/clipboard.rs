//! Best-effort clipboard writing.
//!
//! Tries the legacy direct clipboard object first (old Internet Explorer,
//! avoids flashing a textarea while a dialog is open), then falls back to a
//! temporary off-screen textarea plus `document.execCommand("copy")`. When
//! the copy command throws (platform policy), the text is surfaced in a
//! blocking prompt so the user can copy it manually.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Normalized result of a copy attempt. The original mixed booleans with an
/// arbitrary prompt return value; callers here always get one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text is on the clipboard.
    Copied,
    /// The copy command ran but reported failure.
    CommandRejected,
    /// The copy command threw; the text was shown in a prompt instead.
    ManualFallbackShown,
    /// No copy mechanism exists on this platform.
    Unsupported,
}

pub fn copy_to_clipboard(text: &str) -> CopyOutcome {
    let Some(window) = web_sys::window() else {
        return CopyOutcome::Unsupported;
    };

    if let Some(outcome) = try_legacy_clipboard(&window, text) {
        return outcome;
    }

    let Some(document) = window.document() else {
        return CopyOutcome::Unsupported;
    };
    let document: &HtmlDocument = document.unchecked_ref();
    if !document.query_command_supported("copy") {
        return CopyOutcome::Unsupported;
    }

    let textarea = match document
        .create_element("textarea")
        .map(|el| el.dyn_into::<HtmlTextAreaElement>())
    {
        Ok(Ok(textarea)) => textarea,
        _ => return CopyOutcome::Unsupported,
    };
    textarea.set_value(text);
    // Fixed position keeps Edge from scrolling to the bottom of the page
    // while the element exists.
    let _ = textarea.set_attribute("style", "position:fixed;top:0;left:0;opacity:0;");

    let Some(body) = document.body() else {
        return CopyOutcome::Unsupported;
    };
    if body.append_child(&textarea).is_err() {
        return CopyOutcome::Unsupported;
    }
    textarea.select();

    let exec_result = document.exec_command("copy");

    // The textarea comes out before anything else happens - the blocking
    // prompt below must not run with it still in the document.
    let _ = body.remove_child(&textarea);

    match exec_result {
        Ok(true) => CopyOutcome::Copied,
        Ok(false) => CopyOutcome::CommandRejected,
        Err(e) => {
            web_sys::console::warn_1(&format!("Copy to clipboard failed: {:?}", e).into());
            let _ = window.prompt_with_message_and_default("Copy to clipboard: Ctrl+C, Enter", text);
            CopyOutcome::ManualFallbackShown
        }
    }
}

/// `window.clipboardData.setData("Text", ...)` where it exists. Returns
/// `None` when the legacy object is absent so the caller can fall through.
fn try_legacy_clipboard(window: &web_sys::Window, text: &str) -> Option<CopyOutcome> {
    let window_js: &JsValue = window.as_ref();
    let clipboard_data = js_sys::Reflect::get(window_js, &JsValue::from_str("clipboardData")).ok()?;
    if clipboard_data.is_undefined() || clipboard_data.is_null() {
        return None;
    }

    let set_data = js_sys::Reflect::get(&clipboard_data, &JsValue::from_str("setData"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;

    match set_data.call2(
        &clipboard_data,
        &JsValue::from_str("Text"),
        &JsValue::from_str(text),
    ) {
        Ok(result) if result.is_falsy() => Some(CopyOutcome::CommandRejected),
        Ok(_) => Some(CopyOutcome::Copied),
        Err(_) => Some(CopyOutcome::CommandRejected),
    }
}
