use crate::app::App;

mod app;
mod components;
mod config;
mod logger;
mod transport;
mod widgets;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
