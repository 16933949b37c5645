//! Component state of the lead form.
//!
//! The component owns the form state store, the submission orchestrator, the
//! location list, and the widget slots bound to the current form instance.
//! A reset releases both widgets; a new location list releases only the
//! selects. Released slots are attached again after the next render, once
//! the fresh DOM nodes exist.

use lead_common::form::{FormEvent, FormState, FormWidgets};
use lead_common::location::LocationSource;
use lead_common::submission::SubmissionOrchestrator;
use log::error;
use yew::prelude::*;

use super::messages::Msg;
use crate::widgets::{PhoneWidget, SelectWidgets};

pub struct LeadFormComponent {
    /// Values, errors, touched flags and instance id.
    pub form: FormState,

    pub orchestrator: SubmissionOrchestrator,

    /// Cities offered by the property location select.
    pub locations: LocationSource,

    /// Reference to the phone `<input>` the intl-tel-input plugin wraps.
    pub phone_ref: NodeRef,

    pub widgets: FormWidgets<PhoneWidget, SelectWidgets>,
}

impl LeadFormComponent {
    /// A blank form whose location list is already marked as loading, so
    /// the first view shows the loading placeholder. The caller starts the
    /// fetch.
    pub fn new() -> Self {
        let mut locations = LocationSource::default();
        locations.begin();
        Self {
            form: FormState::new(),
            orchestrator: SubmissionOrchestrator::new(),
            locations,
            phone_ref: NodeRef::default(),
            widgets: FormWidgets::new(),
        }
    }

    /// Attaches every pending widget to the current DOM and form instance.
    ///
    /// The select widgets wait for a non-empty location list.
    pub fn setup_widgets(&mut self, ctx: &Context<Self>) {
        let instance = self.form.instance_id();
        let on_event: Callback<FormEvent> = ctx.link().callback(Msg::Form);

        if self.widgets.phone.is_pending() {
            if let Some(input) = self.phone_ref.cast::<web_sys::HtmlInputElement>() {
                let on_phone = on_event.clone();
                let attached = self.widgets.phone.attach(instance, || {
                    PhoneWidget::attach(input, instance, on_phone).map(Some)
                });
                if let Err(err) = attached {
                    error!("phone widget failed to attach: {:?}", err);
                }
            }
        }

        if self.widgets.selects.is_pending() && !self.locations.locations().is_empty() {
            let attached = self
                .widgets
                .selects
                .attach(instance, || SelectWidgets::attach(instance, on_event));
            if let Err(err) = attached {
                error!("select widgets failed to attach: {:?}", err);
            }
        }
    }
}
