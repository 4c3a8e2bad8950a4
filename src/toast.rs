//! Tiny toast helper. Creates a `#portal-toast-root` container once per page
//! and appends toast divs that remove themselves after a few seconds.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlElement};

#[derive(Debug, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
}

pub fn success(msg: &str) {
    show(msg, ToastKind::Success);
}

pub fn error(msg: &str) {
    show(msg, ToastKind::Error);
}

pub fn show(message: &str, kind: ToastKind) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    ensure_styles(&document);
    let root = ensure_root(&document);

    let Ok(toast) = document.create_element("div") else { return };
    toast.set_class_name(match kind {
        ToastKind::Success => "portal-toast portal-toast-success",
        ToastKind::Error => "portal-toast portal-toast-error",
    });
    toast.set_text_content(Some(message));
    let _ = root.append_child(&toast);

    // Self-removal after 3s.
    let toast_el: HtmlElement = toast.unchecked_into();
    let cb = Closure::once_into_js(move || {
        if let Some(parent) = toast_el.parent_node() {
            let _ = parent.remove_child(&toast_el);
        }
    });
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 3000);
}

fn ensure_root(document: &Document) -> Element {
    if let Some(el) = document.get_element_by_id("portal-toast-root") {
        return el;
    }
    let root = document.create_element("div").unwrap();
    root.set_id("portal-toast-root");
    if let Some(body) = document.body() {
        let _ = body.append_child(&root);
    }
    root
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("portal-toast-styles").is_some() {
        return;
    }

    let css = "
#portal-toast-root{position:fixed;bottom:16px;left:50%;transform:translateX(-50%);display:flex;flex-direction:column;gap:6px;z-index:9999;font:13px/1.4 sans-serif}
.portal-toast{padding:8px 14px;border-radius:3px;color:#fff;box-shadow:0 1px 3px rgba(0,0,0,.2)}
.portal-toast-success{background:#15803d}
.portal-toast-error{background:#b91c1c}
";

    let style = document.create_element("style").unwrap();
    style.set_id("portal-toast-styles");
    style.set_text_content(Some(css));
    if let Ok(Some(head)) = document.query_selector("head") {
        let _ = head.append_child(&style);
    } else if let Some(body) = document.body() {
        let _ = body.append_child(&style);
    }
}
