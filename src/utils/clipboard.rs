//! Clipboard utilities for copying text
//!
//! Copies through a hidden `<textarea>` and the synchronous `copy` command,
//! then flashes "Copied!" on the element that triggered the copy.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlElement, HtmlTextAreaElement};

/// Text shown on the source element right after a copy
pub const COPIED_LABEL: &str = "Copied!";

/// CSS class that runs the fade-out keyframes
pub const FADE_CLASS: &str = "fade-animation";

/// Delay before the fade starts, in milliseconds
pub const FADE_DELAY_MS: u32 = 500;

/// Delay between the fade starting and the original text coming back
pub const RESTORE_DELAY_MS: u32 = 500;

/// Animation completion event, including the legacy vendor names
pub const ANIMATION_END_EVENTS: [&str; 5] = [
    "webkitAnimationEnd",
    "mozAnimationEnd",
    "MSAnimationEnd",
    "oanimationend",
    "animationend",
];

/// Somewhere text can be parked, copied from, and removed again
pub trait CopyStage {
    type Node;
    type Error: From<&'static str>;

    fn stage(&self, text: &str) -> Result<Self::Node, Self::Error>;

    /// Run the copy command on a staged node; `Ok(false)` means refused
    fn copy(&self, node: &Self::Node) -> Result<bool, Self::Error>;

    fn unstage(&self, node: Self::Node) -> Result<(), Self::Error>;
}

/// The element whose label acknowledges a copy
pub trait FeedbackTarget {
    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Run `callback` once when `event` fires on the element
    fn on_animation_end(&self, event: &'static str, callback: Box<dyn FnOnce()>);
}

/// Runs a task after a delay
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Stage `text`, copy it, and always remove the staged node again
pub fn copy_text<S: CopyStage>(stage: &S, text: &str) -> Result<(), S::Error> {
    let node = stage.stage(text)?;
    let copied = stage.copy(&node);
    stage.unstage(node)?;

    match copied? {
        true => Ok(()),
        false => Err("Copy command was rejected".into()),
    }
}

/// Swap the label for "Copied!", fade it, then put the original text back
pub fn show_copied_feedback<E, S>(source: &E, scheduler: &S)
where
    E: FeedbackTarget + Clone + 'static,
    S: Scheduler + Clone + 'static,
{
    let original = source.text();
    source.set_text(COPIED_LABEL);

    let source = source.clone();
    let later = scheduler.clone();
    scheduler.after(
        FADE_DELAY_MS,
        Box::new(move || {
            source.add_class(FADE_CLASS);

            let restore = source.clone();
            later.after(RESTORE_DELAY_MS, Box::new(move || restore.set_text(&original)));

            for name in ANIMATION_END_EVENTS {
                let target = source.clone();
                source.on_animation_end(name, Box::new(move || target.remove_class(FADE_CLASS)));
            }
        }),
    );
}

/// Copy text to the system clipboard and acknowledge it on `source`
///
/// # Arguments
/// * `text` - The text to copy to the clipboard
/// * `source` - The element whose label flashes "Copied!"
///
/// # Returns
/// * `Ok(())` if the copy command succeeded
/// * `Err(JsValue)` if staging failed or the browser refused the copy; no
///   feedback is shown in that case
pub fn copy_to_clipboard(text: &str, source: &HtmlElement) -> Result<(), JsValue> {
    copy_text(&DomStage::new()?, text)?;
    show_copied_feedback(source, &TimeoutScheduler);
    Ok(())
}

/// Hidden, read-only, off-screen `<textarea>` appended to the body
struct DomStage {
    document: HtmlDocument,
    body: HtmlElement,
}

impl DomStage {
    fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("No body"))?;
        let document = document
            .dyn_into::<HtmlDocument>()
            .map_err(|_| JsValue::from_str("Not an HTML document"))?;

        Ok(Self { document, body })
    }
}

impl CopyStage for DomStage {
    type Node = HtmlTextAreaElement;
    type Error = JsValue;

    fn stage(&self, text: &str) -> Result<HtmlTextAreaElement, JsValue> {
        let staging: HtmlTextAreaElement = self
            .document
            .create_element("textarea")?
            .dyn_into()
            .map_err(JsValue::from)?;
        staging.set_value(text);
        staging.set_attribute("readonly", "")?;
        let style = staging.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", "-9999px")?;

        self.body.append_child(&staging)?;
        Ok(staging)
    }

    fn copy(&self, node: &HtmlTextAreaElement) -> Result<bool, JsValue> {
        node.select();
        self.document.exec_command("copy")
    }

    fn unstage(&self, node: HtmlTextAreaElement) -> Result<(), JsValue> {
        self.body.remove_child(&node).map(|_| ())
    }
}

impl FeedbackTarget for HtmlElement {
    fn text(&self) -> String {
        self.inner_text()
    }

    fn set_text(&self, text: &str) {
        self.set_inner_text(text);
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        self.class_list().remove_1(class).ok();
    }

    fn on_animation_end(&self, event: &'static str, callback: Box<dyn FnOnce()>) {
        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);

        let callback = Closure::once_into_js(move || callback());
        if let Err(e) = self.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &options,
        ) {
            log::debug!("Could not listen for {}: {:?}", event, e);
        }
    }
}

/// Browser timers via `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, move || task()).forget();
    }
}
