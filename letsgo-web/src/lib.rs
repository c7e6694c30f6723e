//! Let'sGo Rides web client
//!
//! Yew front end for the OTP verification screen and the user dashboard.
//! All data lives in the browser's local storage.

mod browser;
mod components;
mod config;
mod logging;
mod pages;
mod router;
mod storage;

use std::rc::Rc;

use letsgo_common::config::AppConfig;
use router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

/// Root component: configuration context plus the router
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<AppConfig>> context={props.config.clone()}>
            <BrowserRouter>
                <div class="letsgo-app">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<Rc<AppConfig>>>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    let (app_config, config_error) = match config::load_embedded() {
        Ok(app_config) => (app_config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init(&app_config.logging);
    if let Some(e) = config_error {
        tracing::error!(error = %e, "Embedded configuration rejected, using defaults");
    }

    tracing::info!(brand = %app_config.ui.brand, "Starting web client");

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(app_config),
    })
    .render();
}
