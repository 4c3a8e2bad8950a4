//! Toolbar DOM: logo, the two custom actions and the endpoint label.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::host::BrowserEnv;
use crate::messages::Message;
use crate::state::{dispatch_global_message, APP_STATE};
use crate::{copy_request, session, toast};

/// Build the toolbar above the widget container. Click handlers dispatch
/// through the global message path so all state changes stay funneled.
pub fn build_toolbar(document: &Document) -> Result<(), JsValue> {
    let toolbar = document.create_element("div")?;
    toolbar.set_id("portal-toolbar");
    toolbar.set_class_name("portal-toolbar");

    // Logo link
    let logo_link = document.create_element("a")?;
    logo_link.set_attribute("href", "https://noloco.io")?;
    logo_link.set_attribute("title", "See noloco")?;
    logo_link.set_inner_html(
        "<img src=\"https://uploads-ssl.webflow.com/6145a64d8a08a13f1a8040f7/614819338a8b0442c6ab2572_infinity%20black%402x.png\" height=\"32\" alt=\"Noloco Logo\"/>",
    );
    toolbar.append_child(&logo_link)?;

    // Change API token
    let key_button = document.create_element("button")?;
    key_button.set_id("change-api-token-btn");
    key_button.set_class_name("toolbar-button");
    key_button.set_inner_html("Change API token");
    key_button.set_attribute("title", "Change API token")?;
    toolbar.append_child(&key_button)?;
    {
        let key_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            // Snapshot then drop the borrow - the prompt blocks and the
            // dispatch below re-borrows.
            let (current_key, project_name) = APP_STATE.with(|state| {
                let state = state.borrow();
                (state.api_key.clone(), state.project_name.clone())
            });

            let env = BrowserEnv::new();
            if let Some(api_key) = session::choose_api_key(&env, &current_key, &project_name) {
                dispatch_global_message(Message::ApiKeyChanged(api_key));
                toast::success("API key updated");
            }
        }) as Box<dyn FnMut(_)>);

        key_button
            .add_event_listener_with_callback("click", key_click.as_ref().unchecked_ref())?;
        key_click.forget();
    }

    // Copy to clipboard
    let copy_button = document.create_element("button")?;
    copy_button.set_id("copy-request-btn");
    copy_button.set_class_name("toolbar-button");
    copy_button.set_inner_html("Copy to clipboard");
    copy_button.set_attribute("title", "Copy to clipboard")?;
    toolbar.append_child(&copy_button)?;
    {
        let copy_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            copy_request::copy_current_request();
        }) as Box<dyn FnMut(_)>);

        copy_button
            .add_event_listener_with_callback("click", copy_click.as_ref().unchecked_ref())?;
        copy_click.forget();
    }

    // Endpoint label
    let endpoint = APP_STATE.with(|state| state.borrow().endpoint.clone());
    let endpoint_label = document.create_element("span")?;
    endpoint_label.set_class_name("endpoint");
    endpoint_label.set_inner_html(&format!("URL: <strong>{}</strong>", endpoint));
    toolbar.append_child(&endpoint_label)?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&toolbar)?;

    Ok(())
}
