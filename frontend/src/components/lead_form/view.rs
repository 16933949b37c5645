//! View rendering for the lead form.
//!
//! The `<form>` is keyed by the form instance id, so a reset replaces every
//! input node (including the one the phone plugin decorated) instead of
//! patching the old ones.
//!
//! Notes
//! - Errors render only for touched fields; `FormState::field_status` decides
//!   between no class, `is-valid` and `is-invalid`.
//! - The consent checkbox is only ever marked invalid, never valid.

use lead_common::form::{FieldStatus, InstanceId};
use lead_common::model::{Field, PROFESSIONS};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{on_blur, on_checkbox_change, on_select_change, on_text_input};
use super::messages::Msg;
use super::state::LeadFormComponent;

const TERMS_TEXT: &str = "• I confirm that the information provided by me here is accurate. \
I authorized LICHFL or its Authorized representatives to contact me for any queries and or \
my documents collection for loan application. This wild override registry on DND/NONC";

/// Main view function for the lead form component.
pub fn view(component: &LeadFormComponent, ctx: &Context<LeadFormComponent>) -> Html {
    let link = ctx.link();
    let instance = component.form.instance_id();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="card">
            <header>
                <h3>{"Registration & Login"}</h3>
            </header>
            <form id="regForm" key={instance.to_string()} {onsubmit} novalidate=true>
                { text_field(component, link, instance, Field::FirstName, "text", "Full Name") }
                { phone_field(component, link, instance) }
                { text_field(component, link, instance, Field::Email, "email", "Email") }
                { location_field(component, link, instance) }
                { profession_field(component, link, instance) }
                { terms_field(component, link, instance) }
                <button type="submit" disabled={component.orchestrator.is_submitting()}>
                    {"Submit"}
                </button>
                <small class="muted">
                    {"This site is protected by reCAPTCHA and the Google's Privacy Policy and Terms of Service apply."}
                </small>
            </form>
        </div>
    }
}

fn status_class(component: &LeadFormComponent, field: Field) -> &'static str {
    component.form.field_status(field).css_class()
}

/// Inline error under a field, shown once the field is touched.
fn feedback(component: &LeadFormComponent, field: Field) -> Html {
    match component.form.visible_error(field) {
        Some(error) => html! { <div class="invalid-feedback">{ error.to_string() }</div> },
        None => html! {},
    }
}

fn text_field(
    component: &LeadFormComponent,
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    html! {
        <div class="field">
            <input
                id={field.name()}
                name={field.name()}
                type={input_type}
                placeholder={placeholder}
                value={component.form.values().text(field).to_string()}
                oninput={on_text_input(link, instance, field)}
                onblur={on_blur(link, instance, field)}
                class={status_class(component, field)}
            />
            { feedback(component, field) }
        </div>
    }
}

/// The phone input has no bound `value`: intl-tel-input owns its text and the
/// form state only keeps the normalized number read back from the widget.
fn phone_field(
    component: &LeadFormComponent,
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
) -> Html {
    html! {
        <div class="field">
            <input
                ref={component.phone_ref.clone()}
                id={Field::Phone.name()}
                name={Field::Phone.name()}
                type="tel"
                placeholder="Phone Number"
                oninput={link.callback(move |_: InputEvent| Msg::PhoneInput(instance))}
                onblur={on_blur(link, instance, Field::Phone)}
                class={status_class(component, Field::Phone)}
            />
            { feedback(component, Field::Phone) }
        </div>
    }
}

fn select_field(
    component: &LeadFormComponent,
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
    field: Field,
    placeholder: &'static str,
    options: &[&str],
) -> Html {
    let current = component.form.values().text(field);
    html! {
        <div class="field">
            <select
                id={field.name()}
                name={field.name()}
                onchange={on_select_change(link, instance, field)}
                onblur={on_blur(link, instance, field)}
                class={status_class(component, field)}
            >
                <option value="" disabled=true selected={current.is_empty()}>{ placeholder }</option>
                { for options.iter().map(|option| html! {
                    <option
                        key={option.to_string()}
                        value={option.to_string()}
                        selected={*option == current}
                    >
                        { option.to_string() }
                    </option>
                }) }
            </select>
            { feedback(component, field) }
        </div>
    }
}

fn location_field(
    component: &LeadFormComponent,
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
) -> Html {
    let cities: Vec<&str> = component
        .locations
        .locations()
        .iter()
        .map(String::as_str)
        .collect();
    select_field(
        component,
        link,
        instance,
        Field::PropertyLocation,
        component.locations.placeholder(),
        &cities,
    )
}

fn profession_field(
    component: &LeadFormComponent,
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
) -> Html {
    select_field(
        component,
        link,
        instance,
        Field::Profession,
        "What is Your Profession?",
        &PROFESSIONS,
    )
}

fn terms_field(
    component: &LeadFormComponent,
    link: &Scope<LeadFormComponent>,
    instance: InstanceId,
) -> Html {
    let class = match component.form.field_status(Field::Terms) {
        FieldStatus::Invalid => "is-invalid",
        FieldStatus::Untouched | FieldStatus::Valid => "",
    };
    html! {
        <>
            <label class="terms">
                <input
                    type="checkbox"
                    name={Field::Terms.name()}
                    checked={component.form.values().terms}
                    onchange={on_checkbox_change(link, instance, Field::Terms)}
                    onblur={on_blur(link, instance, Field::Terms)}
                    class={class}
                />
                <span>{ TERMS_TEXT }</span>
            </label>
            { feedback(component, Field::Terms) }
        </>
    }
}
