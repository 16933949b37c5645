//! Adapter around the intl-tel-input plugin loaded by the host page.
//!
//! A `PhoneWidget` owns one plugin instance for the lifetime of one form
//! instance. Dropping it removes the `countrychange` listener and destroys the
//! plugin, so re-attaching after a reset never leaves a second binding behind.

use lead_common::form::{FormEvent, InstanceId};
use lead_common::model::{Field, FieldValue};
use lead_common::validation::PhoneValidity;
use log::{debug, error};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::Callback;

#[wasm_bindgen]
extern "C" {
    /// Plugin instance returned by `intlTelInput(input, options)`.
    #[derive(Clone)]
    type Iti;

    #[wasm_bindgen(js_name = intlTelInput, catch)]
    fn intl_tel_input(input: &HtmlInputElement, options: &JsValue) -> Result<Iti, JsValue>;

    #[wasm_bindgen(method, js_name = getNumber)]
    fn get_number(this: &Iti) -> JsValue;

    #[wasm_bindgen(method, js_name = isValidNumber)]
    fn is_valid_number(this: &Iti) -> JsValue;

    #[wasm_bindgen(method)]
    fn destroy(this: &Iti);
}

const UTILS_SCRIPT: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/intl-tel-input/17.0.19/js/utils.js";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhoneWidgetOptions {
    initial_country: &'static str,
    preferred_countries: [&'static str; 4],
    separate_dial_code: bool,
    utils_script: &'static str,
}

impl Default for PhoneWidgetOptions {
    fn default() -> Self {
        Self {
            initial_country: "in",
            preferred_countries: ["in", "us", "gb", "ae"],
            separate_dial_code: true,
            utils_script: UTILS_SCRIPT,
        }
    }
}

/// E.164 number from the plugin, or an empty string while it cannot tell.
fn read_number(iti: &Iti) -> String {
    iti.get_number().as_string().unwrap_or_default()
}

pub struct PhoneWidget {
    input: HtmlInputElement,
    iti: Iti,
    on_country_change: Closure<dyn FnMut()>,
    instance: InstanceId,
}

impl PhoneWidget {
    /// Attaches the plugin to `input`. Country changes are reported through
    /// `on_event` as a new phone value for `instance`.
    pub fn attach(
        input: HtmlInputElement,
        instance: InstanceId,
        on_event: Callback<FormEvent>,
    ) -> Result<Self, JsValue> {
        let options = serde_json::to_string(&PhoneWidgetOptions::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let iti = intl_tel_input(&input, &js_sys::JSON::parse(&options)?)?;

        let handle = iti.clone();
        let on_country_change = Closure::<dyn FnMut()>::new(move || {
            on_event.emit(FormEvent::Changed {
                instance,
                field: Field::Phone,
                value: FieldValue::Text(read_number(&handle)),
            });
        });
        input.add_event_listener_with_callback(
            "countrychange",
            on_country_change.as_ref().unchecked_ref(),
        )?;

        debug!("phone widget attached for form instance {instance}");
        Ok(Self {
            input,
            iti,
            on_country_change,
            instance,
        })
    }

    pub fn get_number(&self) -> String {
        read_number(&self.iti)
    }
}

impl PhoneValidity for PhoneWidget {
    fn is_valid_number(&self) -> bool {
        // `null` until the utils script has loaded
        self.iti.is_valid_number().as_bool().unwrap_or(false)
    }
}

impl Drop for PhoneWidget {
    fn drop(&mut self) {
        if let Err(err) = self.input.remove_event_listener_with_callback(
            "countrychange",
            self.on_country_change.as_ref().unchecked_ref(),
        ) {
            error!("Error removing countrychange listener: {:?}", err);
        }
        self.iti.destroy();
        debug!("phone widget released for form instance {}", self.instance);
    }
}
