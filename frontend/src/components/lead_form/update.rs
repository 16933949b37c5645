//! Update function for the lead form component.
//!
//! Elm-style: every DOM handler, widget callback and finished network task
//! arrives here as a `Msg`. Yew delivers messages one at a time, so a change
//! and the blur that follows it on the same field are applied in order, and
//! the whole-form validation on submit never interleaves with an edit.

use lead_common::form::{FormEvent, InstanceId};
use lead_common::model::{Field, FieldValue};
use lead_common::submission::{notify_best_effort, SubmitNotice, SubmitOutcome, SubmitStart};
use lead_common::transport::IntakeTransport;
use lead_common::validation::PhoneValidity;
use log::info;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::LeadFormComponent;
use crate::transport::{FormIntake, NotifyRelay};

/// Central update function for the component.
///
/// Returns `true` when the view must re-render.
pub fn update(component: &mut LeadFormComponent, ctx: &Context<LeadFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Form(event) => {
            let phone = component.widgets.phone.get().map(|w| w as &dyn PhoneValidity);
            component.form.apply(event, phone)
        }
        Msg::PhoneInput(instance) => {
            let number = component
                .widgets
                .phone
                .get()
                .map(|widget| widget.get_number())
                .unwrap_or_default();
            component.form.apply(phone_changed(instance, number), None)
        }
        Msg::Submit => {
            let phone = component.widgets.phone.get().map(|w| w as &dyn PhoneValidity);
            match component.orchestrator.begin(&mut component.form, phone) {
                SubmitStart::Submit(payload) => {
                    show_toast(SubmitNotice::Pending.message());
                    let intake = FormIntake {
                        url: ctx.props().intake_url.to_string(),
                    };
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = intake.submit(&payload).await;
                        link.send_message(Msg::IntakeResolved(result));
                    });
                }
                SubmitStart::Invalid | SubmitStart::Busy => {}
            }
            true
        }
        Msg::IntakeResolved(result) => {
            match component.orchestrator.intake_resolved(&mut component.form, result) {
                Some(SubmitOutcome::Succeeded { notify }) => {
                    show_toast(SubmitNotice::Success.message());
                    let relay = NotifyRelay {
                        url: ctx.props().notify_url.to_string(),
                    };
                    spawn_local(async move {
                        notify_best_effort(&relay, &notify).await;
                    });
                    // the reset rotated the instance id
                    component.widgets.instance_changed();
                    true
                }
                Some(SubmitOutcome::Failed(_)) => {
                    show_toast(SubmitNotice::Error.message());
                    true
                }
                None => false,
            }
        }
        Msg::LocationsLoaded(locations) => {
            info!("{} property locations available", locations.len());
            component.locations.resolve(locations);
            component.widgets.locations_changed();
            true
        }
    }
}

fn phone_changed(instance: InstanceId, number: String) -> FormEvent {
    FormEvent::Changed {
        instance,
        field: Field::Phone,
        value: FieldValue::Text(number),
    }
}
