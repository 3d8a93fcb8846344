use dioxus::prelude::*;

/// Animated SVG logo; the controller restarts it on every request
#[component]
pub fn LoadingIndicator(id: String) -> Element {
    rsx! {
        object {
            id: "{id}",
            class: "w-24 h-24 mx-auto",
            "type": "image/svg+xml",
            "data": "/assets/logo.svg",
            aria_label: "shortr",
        }
    }
}
