//! Parameter console: browser UI for reviewing and maintaining the
//! individual parameters and spidering configuration of the rule engine.

mod access;
mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod messages;
mod pages;
mod resources;
mod router;
mod session_context;
mod utils;

use session_context::SessionProvider;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <router::AppRouter />
        </SessionProvider>
    }
}

fn main() {
    if config::MOCK_SERVER_MODE {
        web_sys::console::log_1(&format!("Mock server mode: GET {}", config::API_BASE).into());
    }
    yew::Renderer::<App>::new().render();
}
