use yew::prelude::*;
use log::info;

mod config;
mod lead {
    pub mod models;
    pub mod challenge;
    pub mod webhook;
    pub mod pipeline;
}
mod popup {
    pub mod controller;
    pub mod triggers;
}
mod components {
    pub mod lead_form;
    pub mod popup_dialog;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! { <Landing /> }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
