/// Application Context
///
/// The page owns exactly one shortener controller. It is created once in the
/// root component and handed to the components below through the Dioxus
/// context instead of a global store.

use dioxus::prelude::*;
use std::rc::Rc;

use crate::services::shortener_api::{ApiConfig, GlooTransport};
use crate::stores::shortener::{ShortenerController, ShortenerState};
use crate::utils::loading_logo::LoadingLogo;

/// Controller as wired up in the browser
pub type AppController = ShortenerController<GlooTransport, Signal<ShortenerState>>;

/// Build the controller and make it available to every child component
pub fn use_app_controller_provider() -> AppController {
    let state = use_signal(ShortenerState::default);

    use_context_provider(move || {
        let config = ApiConfig::from_environment();
        let logo = LoadingLogo::new(config.loading_indicator_id.clone());
        ShortenerController::new(config, GlooTransport, state).with_indicator(Rc::new(logo))
    })
}

/// Access the page's controller from a child component
pub fn use_app_controller() -> AppController {
    use_context::<AppController>()
}
