use crate::components::lead_form::LeadFormComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="home" class="hero">
                <div class="container hero-content">
                    <div class="hero-form">
                        <LeadFormComponent />
                    </div>
                </div>
                <div class="hero-terms">{"*T&C Apply"}</div>
            </section>
        }
    }
}
