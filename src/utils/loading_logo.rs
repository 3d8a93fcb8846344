//! Loading indicator hook for the view-model
//!
//! The page embeds the logo as an SVG `<object>`. Its animation only plays
//! once, so every request restarts it by re-assigning the embedded document's
//! markup.

/// Something the controller pokes whenever a request goes out
pub trait ActivityIndicator {
    /// Restart the indicator. Must not block and must not fail.
    fn restart(&self);
}

/// The animated logo embedded in the page header
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingLogo {
    element_id: String,
}

impl LoadingLogo {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl ActivityIndicator for LoadingLogo {
    fn restart(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let logo = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&self.element_id))
                .and_then(|e| e.dyn_into::<web_sys::HtmlObjectElement>().ok());

            let root = match logo.and_then(|l| l.content_document()).and_then(|d| d.document_element()) {
                Some(root) => root,
                None => {
                    log::debug!("Loading logo #{} not ready, skipping restart", self.element_id);
                    return;
                }
            };

            let markup = root.inner_html();
            root.set_inner_html(&markup);
        }
    }
}
