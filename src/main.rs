#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod context;
mod services;
mod stores;
mod utils;

use components::{ErrorBanner, LoadingIndicator, ResultCard, ShortenerForm};
use context::use_app_controller_provider;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting shortr web client");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let controller = use_app_controller_provider();
    let indicator_id = controller.config().loading_indicator_id.clone();

    rsx! {
        main {
            class: "max-w-xl mx-auto px-6 py-12 space-y-8",

            header {
                class: "text-center space-y-2",
                LoadingIndicator { id: indicator_id }
                h1 {
                    class: "text-3xl font-bold",
                    "shortr"
                }
                p {
                    class: "text-muted-foreground",
                    "Turn long links into short ones"
                }
            }

            ShortenerForm {}
            ErrorBanner {}
            ResultCard {}
        }
    }
}
