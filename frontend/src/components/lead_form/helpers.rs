//! Utility functions for the lead form component.
//!
//! - **User Feedback**: transient "toast" notifications for the submission
//!   lifecycle (pending, success, error).
//! - **Event Decoding**: small adapters turning DOM events into `FormEvent`s
//!   bound to the form instance that rendered the input.

use lead_common::form::{FormEvent, InstanceId};
use lead_common::model::{Field, FieldValue};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LeadFormComponent;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 3000;

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates a styled `div`, appends it to `<body>` and removes it again after
/// a few seconds. Used for the submission notices only; field errors are
/// rendered inline next to their inputs.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_class_name("lead-toast");
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// `oninput` handler of a text input.
pub fn on_text_input(
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
    field: Field,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Form(FormEvent::Changed {
            instance,
            field,
            value: FieldValue::Text(input.value()),
        })
    })
}

/// Native `onchange` handler of a `<select>`.
pub fn on_select_change(
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
    field: Field,
) -> Callback<Event> {
    link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::Form(FormEvent::Changed {
            instance,
            field,
            value: FieldValue::Text(select.value()),
        })
    })
}

/// `onchange` handler of the consent checkbox.
pub fn on_checkbox_change(
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
    field: Field,
) -> Callback<Event> {
    link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Form(FormEvent::Changed {
            instance,
            field,
            value: FieldValue::Checked(input.checked()),
        })
    })
}

pub fn on_blur(
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
    field: Field,
) -> Callback<FocusEvent> {
    link.callback(move |_| Msg::Form(FormEvent::Blurred { instance, field }))
}
