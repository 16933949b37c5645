//! Lead form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `LeadFormProps`, `LeadFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On creation, start loading the property locations once for the lifetime of the component,
//!   so the first view already shows the loading placeholder.
//! - After any render that follows a widget release, attach the released widgets to the fresh DOM.
//! - On unmount, release the widgets.

use lead_common::location::load_locations;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LeadFormProps;
pub use state::LeadFormComponent;

use crate::transport::CitiesApi;

impl Component for LeadFormComponent {
    type Message = Msg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let component = LeadFormComponent::new();
        if component.locations.is_loading() {
            let directory = CitiesApi {
                url: ctx.props().cities_url.to_string(),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let locations = load_locations(&directory).await;
                link.send_message(Msg::LocationsLoaded(locations));
            });
        }
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.widgets.needs_setup() {
            self.setup_widgets(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.widgets.instance_changed();
    }
}
