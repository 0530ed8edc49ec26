use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Cross-origin policy.
///
/// With no configured origins any origin may call the API without credentials.
/// Otherwise only the listed origins are allowed, and they may send the session cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    pub fn layer(&self) -> CorsLayer {
        if self.allowed_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(ALLOWED_METHODS)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                    None
                }
            })
            .collect();

        if origins.is_empty() {
            tracing::warn!(
                "No valid CORS origins configured; CORS will block all cross-origin requests"
            );
            return CorsLayer::new();
        }

        CorsLayer::new()
            .allow_origin(origins)
            .allow_credentials(true)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE])
    }
}
