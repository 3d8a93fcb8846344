//! View-model for the shortener page
//!
//! Owns the form draft and the outcome of the latest request. The outcome is
//! cleared before every request and replaced wholesale when a response
//! resolves. Nothing is queued or cancelled: overlapping requests race and
//! the last one to resolve wins.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::services::shortener_api::{
    ApiConfig, ApiError, ApiRequest, Operation, ShortUrlRecord, ShortenerError, ShortenerTransport,
    TransportResponse,
};
use crate::utils::loading_logo::ActivityIndicator;
use crate::utils::DataState;

/// What the user typed into the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDraft {
    pub url: String,
    pub name: String,
}

/// Everything the page renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortenerState {
    pub draft: RequestDraft,
    pub outcome: DataState<ShortUrlRecord, ApiError>,
    /// Requests sent but not yet resolved
    pub in_flight: u32,
}

impl ShortenerState {
    pub fn result(&self) -> Option<&ShortUrlRecord> {
        self.outcome.data()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.outcome.error()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    fn begin(&mut self) {
        self.outcome = DataState::Loading;
        self.in_flight += 1;
    }

    fn finish(&mut self, outcome: Result<Option<ShortUrlRecord>, ShortenerError>) {
        // A 2xx with a `null` body leaves nothing to show
        self.outcome = outcome.transpose().map(DataState::from).unwrap_or_default();
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// Storage for [`ShortenerState`]
///
/// The page keeps it in a Dioxus signal so writes re-render; tests keep it in
/// a plain `RefCell`.
pub trait StateStore {
    fn update(&self, f: impl FnOnce(&mut ShortenerState));

    fn snapshot(&self) -> ShortenerState;
}

impl StateStore for Signal<ShortenerState> {
    fn update(&self, f: impl FnOnce(&mut ShortenerState)) {
        let mut signal = *self;
        f(&mut signal.write());
    }

    fn snapshot(&self) -> ShortenerState {
        self.read().clone()
    }
}

impl StateStore for Rc<RefCell<ShortenerState>> {
    fn update(&self, f: impl FnOnce(&mut ShortenerState)) {
        f(&mut self.borrow_mut());
    }

    fn snapshot(&self) -> ShortenerState {
        self.borrow().clone()
    }
}

/// Drives the shortener API and binds its responses to the page state
pub struct ShortenerController<T, S> {
    config: ApiConfig,
    transport: Rc<T>,
    store: S,
    indicator: Option<Rc<dyn ActivityIndicator>>,
}

impl<T, S: Clone> Clone for ShortenerController<T, S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
            store: self.store.clone(),
            indicator: self.indicator.clone(),
        }
    }
}

impl<T: ShortenerTransport, S: StateStore> ShortenerController<T, S> {
    pub fn new(config: ApiConfig, transport: T, store: S) -> Self {
        Self {
            config,
            transport: Rc::new(transport),
            store,
            indicator: None,
        }
    }

    /// Restart `indicator` every time a request goes out
    pub fn with_indicator(mut self, indicator: Rc<dyn ActivityIndicator>) -> Self {
        self.indicator = Some(indicator);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn state(&self) -> ShortenerState {
        self.store.snapshot()
    }

    pub fn draft(&self) -> RequestDraft {
        self.store.snapshot().draft
    }

    pub fn result(&self) -> Option<ShortUrlRecord> {
        self.store.snapshot().result().cloned()
    }

    pub fn error(&self) -> Option<ApiError> {
        self.store.snapshot().error().cloned()
    }

    pub fn is_pending(&self) -> bool {
        self.store.snapshot().is_pending()
    }

    pub fn set_url(&self, url: String) {
        self.store.update(|s| s.draft.url = url);
    }

    pub fn set_name(&self, name: String) {
        self.store.update(|s| s.draft.name = name);
    }

    /// Create a mapping from `name` to `url`
    pub async fn create(&self, url: &str, name: &str) {
        self.run(Operation::Create, name, Some(url)).await;
    }

    /// Point the existing mapping `name` at `url`
    pub async fn update(&self, url: &str, name: &str) {
        self.run(Operation::Update, name, Some(url)).await;
    }

    /// Remove the mapping `name`
    pub async fn delete(&self, name: &str) {
        self.run(Operation::Delete, name, None).await;
    }

    /// Look up hit counters for the mapping `name`
    pub async fn stats(&self, name: &str) {
        self.run(Operation::Stats, name, None).await;
    }

    async fn run(&self, operation: Operation, name: &str, url: Option<&str>) {
        self.store.update(ShortenerState::begin);

        if let Some(indicator) = &self.indicator {
            indicator.restart();
        }

        let request = ApiRequest::new(&self.config, operation, name, url);
        log::info!("{} {} ({})", request.method(), request.url, operation.as_str());

        let outcome = self.execute(&request).await;
        match &outcome {
            Ok(_) => log::info!("{} '{}' succeeded", operation.as_str(), name),
            Err(e) => log::warn!("{} '{}' failed: {}", operation.as_str(), name, e),
        }

        self.store.update(|s| s.finish(outcome));
    }

    async fn execute(&self, request: &ApiRequest) -> Result<Option<ShortUrlRecord>, ShortenerError> {
        let response = self.transport.send(request).await?;

        if !response.ok() {
            return Err(ShortenerError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response.json().await?;
        Ok((!body.is_null()).then(|| ShortUrlRecord::new(body)))
    }
}
