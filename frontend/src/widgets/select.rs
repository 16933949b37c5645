//! Adapter around the jQuery select2 plugin loaded by the host page.
//!
//! select2 reports selections through jQuery `change` events, which never
//! reach the native listeners Yew installs, so each enhanced select gets its
//! own namespaced jQuery handler relaying the value as a `FormEvent`.

use js_sys::Reflect;
use lead_common::form::{FormEvent, InstanceId};
use lead_common::model::{Field, FieldValue};
use log::{debug, error};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::Callback;

#[wasm_bindgen]
extern "C" {
    type JQuery;

    #[wasm_bindgen(js_name = jQuery)]
    fn jquery(selector: &str) -> JQuery;

    #[wasm_bindgen(method, catch)]
    fn select2(this: &JQuery, options: &JsValue) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method, catch, js_name = select2)]
    fn select2_command(this: &JQuery, command: &str) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &JQuery, events: &str, handler: &js_sys::Function) -> JQuery;

    #[wasm_bindgen(method)]
    fn off(this: &JQuery, events: &str) -> JQuery;
}

const CHANGE_EVENT: &str = "change.leadform";
const FORM_SELECTOR: &str = "#regForm";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectOptions {
    width: &'static str,
    allow_clear: bool,
    placeholder: &'static str,
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::PropertyLocation => "Select Property Location",
        _ => "What is Your Profession?",
    }
}

/// Whether jQuery and select2 are present on the page.
pub fn select2_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("jQuery"))
        .and_then(|jq| Reflect::get(&jq, &JsValue::from_str("fn")))
        .and_then(|proto| Reflect::get(&proto, &JsValue::from_str("select2")))
        .map(|plugin| plugin.is_function())
        .unwrap_or(false)
}

fn build_options(field: Field) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(&SelectOptions {
        width: "100%",
        allow_clear: true,
        placeholder: placeholder(field),
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = js_sys::JSON::parse(&json)?;
    Reflect::set(&options, &JsValue::from_str("dropdownParent"), &jquery(FORM_SELECTOR))?;
    Ok(options)
}

struct SelectBinding {
    field: Field,
    element: JQuery,
    _on_change: Closure<dyn FnMut(JsValue)>,
}

impl SelectBinding {
    fn attach(
        field: Field,
        instance: InstanceId,
        on_event: Callback<FormEvent>,
    ) -> Result<Self, JsValue> {
        let element = jquery(&format!("#{}", field.name()));
        element.select2(&build_options(field)?)?;

        let on_change = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let value = Reflect::get(&event, &JsValue::from_str("target"))
                .ok()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value())
                .unwrap_or_default();
            on_event.emit(FormEvent::Changed {
                instance,
                field,
                value: FieldValue::Text(value),
            });
        });
        element.on(CHANGE_EVENT, on_change.as_ref().unchecked_ref());

        Ok(Self {
            field,
            element,
            _on_change: on_change,
        })
    }
}

impl Drop for SelectBinding {
    fn drop(&mut self) {
        self.element.off(CHANGE_EVENT);
        if let Err(err) = self.element.select2_command("destroy") {
            error!("Error destroying select2 on {}: {:?}", self.field, err);
        }
    }
}

/// The enhanced selects of one form instance. Dropping it detaches the
/// handlers and destroys every select2 instance.
pub struct SelectWidgets {
    bindings: Vec<SelectBinding>,
    instance: InstanceId,
}

impl SelectWidgets {
    /// Enhances the location and profession selects.
    ///
    /// Returns `Ok(None)` when select2 is not on the page; the plain selects
    /// keep working through their native change events.
    pub fn attach(
        instance: InstanceId,
        on_event: Callback<FormEvent>,
    ) -> Result<Option<Self>, JsValue> {
        if !select2_available() {
            debug!("select2 not present, keeping native selects");
            return Ok(None);
        }

        let mut bindings = Vec::new();
        for field in [Field::PropertyLocation, Field::Profession] {
            // bindings attached so far are dropped (and torn down) on error
            bindings.push(SelectBinding::attach(field, instance, on_event.clone())?);
        }
        debug!("select widgets attached for form instance {instance}");
        Ok(Some(Self { bindings, instance }))
    }
}

impl Drop for SelectWidgets {
    fn drop(&mut self) {
        self.bindings.clear();
        debug!("select widgets released for form instance {}", self.instance);
    }
}
