use dioxus::prelude::*;

use crate::context::use_app_controller;

/// Code and message of the last failed call
#[component]
pub fn ErrorBanner() -> Element {
    let controller = use_app_controller();
    let Some(error) = controller.error() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "border border-destructive/50 bg-destructive/10 text-destructive rounded-xl p-4 flex items-baseline gap-3",
            role: "alert",
            span {
                class: "text-2xl font-bold font-mono",
                "{error.code}"
            }
            span {
                class: "font-medium tracking-wide",
                "{error.message}"
            }
        }
    }
}
