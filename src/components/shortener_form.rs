use dioxus::prelude::*;

use crate::context::use_app_controller;
use crate::services::shortener_api::Operation;

/// Long URL + short name inputs with the action buttons
#[component]
pub fn ShortenerForm() -> Element {
    let controller = use_app_controller();
    let draft = controller.draft();
    let is_pending = controller.is_pending();

    let on_url = {
        let controller = controller.clone();
        move |e: FormEvent| controller.set_url(e.value())
    };
    let on_name = {
        let controller = controller.clone();
        move |e: FormEvent| controller.set_name(e.value())
    };

    // Every click starts a fresh request, even if one is still running
    let dispatch = move |operation: Operation| {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            let draft = controller.draft();
            spawn(async move {
                match operation {
                    Operation::Create => controller.create(&draft.url, &draft.name).await,
                    Operation::Update => controller.update(&draft.url, &draft.name).await,
                    Operation::Delete => controller.delete(&draft.name).await,
                    Operation::Stats => controller.stats(&draft.name).await,
                }
            });
        }
    };

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: move |e| e.prevent_default(),

            div {
                label {
                    class: "block text-sm font-medium mb-1",
                    r#for: "long-url",
                    "Long URL"
                }
                input {
                    id: "long-url",
                    class: "w-full px-3 py-2 bg-background border border-border rounded-lg",
                    r#type: "url",
                    placeholder: "https://example.com/a/very/long/path",
                    value: "{draft.url}",
                    oninput: on_url,
                }
            }

            div {
                label {
                    class: "block text-sm font-medium mb-1",
                    r#for: "short-name",
                    "Short name"
                }
                input {
                    id: "short-name",
                    class: "w-full px-3 py-2 bg-background border border-border rounded-lg",
                    r#type: "text",
                    placeholder: "my-link",
                    value: "{draft.name}",
                    oninput: on_name,
                }
            }

            div {
                class: "flex flex-wrap gap-3",
                button {
                    class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                    r#type: "button",
                    onclick: dispatch(Operation::Create),
                    "Shorten"
                }
                button {
                    class: "px-4 py-2 border border-border rounded-lg hover:bg-accent transition",
                    r#type: "button",
                    onclick: dispatch(Operation::Update),
                    "Update"
                }
                button {
                    class: "px-4 py-2 border border-border rounded-lg hover:bg-accent transition",
                    r#type: "button",
                    onclick: dispatch(Operation::Stats),
                    "Stats"
                }
                button {
                    class: "px-4 py-2 bg-destructive text-destructive-foreground rounded-lg hover:bg-destructive/90 transition",
                    r#type: "button",
                    onclick: dispatch(Operation::Delete),
                    "Delete"
                }
            }

            if is_pending {
                p {
                    class: "text-sm text-muted-foreground",
                    "Working..."
                }
            }
        }
    }
}
