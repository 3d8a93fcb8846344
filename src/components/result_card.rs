use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_controller;
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::format::{format_date, trim};

const COPY_BUTTON_ID: &str = "copy-short-link";

/// Details of the mapping returned by the last successful call
#[component]
pub fn ResultCard() -> Element {
    let controller = use_app_controller();
    let Some(record) = controller.result() else {
        return rsx! {};
    };

    let short_link = record.short_link(controller.config()).unwrap_or_default();
    let name = trim(record.name().as_deref());
    let url = record.url().unwrap_or_default();
    let url_label = trim(Some(url.as_str()));
    let created = format_date(record.created_at().as_deref());
    let modified = format_date(record.modified_at().as_deref());
    let last_hit = format_date(record.last_hit_at().as_deref());
    let hits = record.hits();

    let link_to_copy = short_link.clone();
    let handle_copy = move |_: MouseEvent| {
        let button = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(COPY_BUTTON_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());

        match button {
            Some(button) => match copy_to_clipboard(&link_to_copy, &button) {
                Ok(()) => log::info!("Short link copied to clipboard"),
                Err(e) => log::warn!("Failed to copy to clipboard: {:?}", e),
            },
            None => log::warn!("Copy button #{} not found", COPY_BUTTON_ID),
        }
    };

    rsx! {
        div {
            class: "bg-card border border-border rounded-xl p-6 space-y-3",

            if !short_link.is_empty() {
                div {
                    class: "flex items-center gap-3",
                    a {
                        class: "text-lg font-semibold text-primary break-all",
                        href: "{short_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{short_link}"
                    }
                    button {
                        id: COPY_BUTTON_ID,
                        class: "px-3 py-1 text-sm border border-border rounded-lg hover:bg-accent transition",
                        r#type: "button",
                        onclick: handle_copy,
                        "Copy"
                    }
                }
            }

            dl {
                class: "grid grid-cols-[auto,1fr] gap-x-4 gap-y-1 text-sm",
                if !name.is_empty() {
                    dt { class: "text-muted-foreground", "Name" }
                    dd { "{name}" }
                }
                if !url.is_empty() {
                    dt { class: "text-muted-foreground", "Destination" }
                    dd {
                        a {
                            href: "{url}",
                            title: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{url_label}"
                        }
                    }
                }
                if let Some(hits) = hits {
                    dt { class: "text-muted-foreground", "Hits" }
                    dd { "{hits}" }
                }
                if !created.is_empty() {
                    dt { class: "text-muted-foreground", "Created" }
                    dd { "{created}" }
                }
                if !modified.is_empty() {
                    dt { class: "text-muted-foreground", "Modified" }
                    dd { "{modified}" }
                }
                if !last_hit.is_empty() {
                    dt { class: "text-muted-foreground", "Last hit" }
                    dd { "{last_hit}" }
                }
            }
        }
    }
}
