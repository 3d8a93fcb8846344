// UI Components
// Everything the shortener page renders

pub mod error_banner;
pub mod loading_indicator;
pub mod result_card;
pub mod shortener_form;

pub use error_banner::ErrorBanner;
pub use loading_indicator::LoadingIndicator;
pub use result_card::ResultCard;
pub use shortener_form::ShortenerForm;
