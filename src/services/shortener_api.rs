use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder, Response};
use serde_json::Value;

/// Origin used when neither the build nor the page provides one
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Element id of the embedded logo animation
pub const LOADING_INDICATOR_ID: &str = "loading-logo";

/// Error code reported when no usable HTTP response was obtained
pub const TRANSPORT_ERROR_CODE: u16 = 666;

/// Where the shortener API lives and how the page is wired to it
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub origin: String,
    pub loading_indicator_id: String,
}

impl ApiConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            loading_indicator_id: LOADING_INDICATOR_ID.to_string(),
        }
    }

    /// Resolve the API origin: `SHORTR_API_ORIGIN` at build time, then the
    /// page's own origin, then [`DEFAULT_ORIGIN`]
    pub fn from_environment() -> Self {
        let origin = option_env!("SHORTR_API_ORIGIN")
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .or_else(page_origin)
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

        log::info!("Using shortener API at {}", origin);
        Self::new(origin)
    }

    /// Public link for a short name
    pub fn short_link(&self, name: &str) -> String {
        format!("{}/{}", self.origin, urlencoding::encode(name))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().origin().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// The calls the UI can make against a short-URL mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Stats,
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
            Operation::Stats => Method::GET,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Stats => "stats",
        }
    }
}

/// A fully resolved request, ready for a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub operation: Operation,
    pub url: String,
}

impl ApiRequest {
    /// Build the endpoint for `operation` on the mapping called `name`.
    /// `long_url` only goes on the wire for create and update.
    pub fn new(config: &ApiConfig, operation: Operation, name: &str, long_url: Option<&str>) -> Self {
        let mut url = config.short_link(name);

        match operation {
            Operation::Create | Operation::Update => {
                url.push_str("?url=");
                url.push_str(&urlencoding::encode(long_url.unwrap_or_default()));
            }
            Operation::Stats => url.push_str("/stats"),
            Operation::Delete => {}
        }

        Self { operation, url }
    }

    pub fn method(&self) -> Method {
        self.operation.method()
    }
}

/// Error type for shortener API calls
#[derive(Debug, Clone, PartialEq)]
pub enum ShortenerError {
    /// No usable response: network failure, bad body, JSON decoding
    Transport(String),
    /// The server answered with a non-2xx status
    Http { status: u16, status_text: String },
}

impl ShortenerError {
    pub fn code(&self) -> u16 {
        match self {
            ShortenerError::Transport(_) => TRANSPORT_ERROR_CODE,
            ShortenerError::Http { status, .. } => *status,
        }
    }

    /// Uppercased message shown to the viewer
    pub fn message(&self) -> String {
        match self {
            ShortenerError::Transport(message) => message.to_uppercase(),
            ShortenerError::Http { status, status_text } if status_text.is_empty() => {
                format!("HTTP {}", status)
            }
            ShortenerError::Http { status_text, .. } => status_text.to_uppercase(),
        }
    }
}

impl std::fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ShortenerError::Transport(e) => write!(f, "Transport error: {}", e),
            ShortenerError::Http { status, status_text } => {
                write!(f, "HTTP error {}: {}", status, status_text)
            }
        }
    }
}

impl std::error::Error for ShortenerError {}

/// Error record bound to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl From<ShortenerError> for ApiError {
    fn from(err: ShortenerError) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
        }
    }
}

/// Success body returned by the shortener API
///
/// The body is kept as-is; the accessors below read the fields the service
/// is known to send and return `None` for anything missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrlRecord(Value);

impl ShortUrlRecord {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Textual form of a scalar field; `None` for null, arrays and objects
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }

    pub fn id(&self) -> Option<i64> {
        self.0.get("id")?.as_i64()
    }

    pub fn name(&self) -> Option<String> {
        self.first_text(&["name", "short"])
    }

    pub fn url(&self) -> Option<String> {
        self.text("url")
    }

    pub fn hits(&self) -> Option<u64> {
        self.0.get("hits")?.as_u64()
    }

    pub fn created_at(&self) -> Option<String> {
        self.first_text(&["created_at", "created"])
    }

    pub fn modified_at(&self) -> Option<String> {
        self.first_text(&["modified_at", "modified", "updated"])
    }

    pub fn last_hit_at(&self) -> Option<String> {
        self.text("last_hit_at")
    }

    /// Resolvable short link for this mapping
    pub fn short_link(&self, config: &ApiConfig) -> Option<String> {
        self.name().map(|name| config.short_link(&name))
    }
}

/// A response whose headers have arrived; the body is read on demand
#[async_trait(?Send)]
pub trait TransportResponse {
    fn status(&self) -> u16;

    fn status_text(&self) -> String;

    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    async fn json(self) -> Result<Value, ShortenerError>;
}

/// Sends shortener requests over some HTTP stack
#[async_trait(?Send)]
pub trait ShortenerTransport {
    type Response: TransportResponse;

    async fn send(&self, request: &ApiRequest) -> Result<Self::Response, ShortenerError>;
}

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl ShortenerTransport for GlooTransport {
    type Response = Response;

    async fn send(&self, request: &ApiRequest) -> Result<Response, ShortenerError> {
        RequestBuilder::new(&request.url)
            .method(request.method())
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(transport_error)
    }
}

#[async_trait(?Send)]
impl TransportResponse for Response {
    fn status(&self) -> u16 {
        Response::status(self)
    }

    fn status_text(&self) -> String {
        Response::status_text(self)
    }

    async fn json(self) -> Result<Value, ShortenerError> {
        Response::json::<Value>(&self).await.map_err(transport_error)
    }
}

fn transport_error(err: gloo_net::Error) -> ShortenerError {
    match err {
        gloo_net::Error::JsError(js) => ShortenerError::Transport(js.message),
        other => ShortenerError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_strips_trailing_slash() {
        let config = ApiConfig::new("https://sho.rt/");
        assert_eq!(config.origin, "https://sho.rt");
        assert_eq!(config.loading_indicator_id, LOADING_INDICATOR_ID);
        assert_eq!(config.short_link("abc"), "https://sho.rt/abc");
    }

    #[test]
    fn test_request_urls() {
        let config = ApiConfig::new("https://sho.rt");

        let create = ApiRequest::new(&config, Operation::Create, "docs", Some("https://example.com/a"));
        assert_eq!(create.method(), Method::POST);
        assert_eq!(create.url, "https://sho.rt/docs?url=https%3A%2F%2Fexample.com%2Fa");

        let update = ApiRequest::new(&config, Operation::Update, "docs", Some("https://example.com"));
        assert_eq!(update.method(), Method::PUT);
        assert_eq!(update.url, "https://sho.rt/docs?url=https%3A%2F%2Fexample.com");

        let delete = ApiRequest::new(&config, Operation::Delete, "docs", Some("ignored"));
        assert_eq!(delete.method(), Method::DELETE);
        assert_eq!(delete.url, "https://sho.rt/docs");

        let stats = ApiRequest::new(&config, Operation::Stats, "docs", None);
        assert_eq!(stats.method(), Method::GET);
        assert_eq!(stats.url, "https://sho.rt/docs/stats");
    }

    #[test]
    fn test_request_encodes_name() {
        let config = ApiConfig::new("https://sho.rt");
        let request = ApiRequest::new(&config, Operation::Delete, "a b/c", None);
        assert_eq!(request.url, "https://sho.rt/a%20b%2Fc");
    }

    #[test]
    fn test_http_error_record() {
        let err = ShortenerError::Http { status: 404, status_text: "Not Found".to_string() };
        assert_eq!(ApiError::from(err), ApiError { code: 404, message: "NOT FOUND".to_string() });

        let err = ShortenerError::Http { status: 502, status_text: String::new() };
        assert_eq!(ApiError::from(err).message, "HTTP 502");
    }

    #[test]
    fn test_transport_error_record() {
        let err = ShortenerError::Transport("network error".to_string());
        assert_eq!(err.code(), TRANSPORT_ERROR_CODE);
        assert_eq!(ApiError::from(err), ApiError { code: 666, message: "NETWORK ERROR".to_string() });
    }

    #[test]
    fn test_record_accessors() {
        let record = ShortUrlRecord::new(json!({
            "id": 7,
            "name": "docs",
            "url": "https://example.com",
            "hits": 3,
            "last_hit_at": null,
            "created_at": "2024-01-01T00:00:00Z",
            "modified_at": "2024-01-02T00:00:00Z"
        }));

        assert_eq!(record.id(), Some(7));
        assert_eq!(record.name().as_deref(), Some("docs"));
        assert_eq!(record.url().as_deref(), Some("https://example.com"));
        assert_eq!(record.hits(), Some(3));
        assert_eq!(record.last_hit_at(), None);
        assert_eq!(record.created_at().as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(record.modified_at().as_deref(), Some("2024-01-02T00:00:00Z"));
        assert_eq!(
            record.short_link(&ApiConfig::new("https://sho.rt")).as_deref(),
            Some("https://sho.rt/docs")
        );
    }

    #[test]
    fn test_record_aliases_and_missing_fields() {
        let record = ShortUrlRecord::new(json!({"short": "abc123", "created": "2024-01-01T00:00:00Z"}));
        assert_eq!(record.name().as_deref(), Some("abc123"));
        assert_eq!(record.created_at().as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(record.url(), None);
        assert_eq!(record.hits(), None);
        assert_eq!(record.text("created"), Some("2024-01-01T00:00:00Z".to_string()));
    }
}
