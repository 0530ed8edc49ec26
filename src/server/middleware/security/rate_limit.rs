//! Fixed-window request rate limiting keyed by client IP.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use tokio::time::Instant;

use crate::model::api::ErrorDto;

/// Number of tracked clients above which expired windows are purged.
const PURGE_THRESHOLD: usize = 10_000;

const RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("ratelimit-limit");
const RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("ratelimit-remaining");
const RATELIMIT_RESET: HeaderName = HeaderName::from_static("ratelimit-reset");

/// Client key used when the peer address is not known.
pub const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub window: Duration,
    /// Requests allowed per client per window.
    pub max: u32,
}

impl Default for RateLimitConfig {
    /// 100 requests per 10 minutes.
    fn default() -> Self {
        Self {
            window: Duration::from_secs(10 * 60),
            max: 100,
        }
    }
}

#[derive(Debug)]
struct Window {
    hits: u32,
    started: Instant,
}

/// Outcome of counting one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Time until the client's current window ends.
    pub reset_after: Duration,
}

impl Decision {
    /// Seconds until reset, rounded up.
    pub fn reset_secs(&self) -> u64 {
        self.reset_after.as_millis().div_ceil(1000) as u64
    }
}

pub struct FixedWindowLimiter {
    config: RateLimitConfig,
    windows: DashMap<String, Window>,
}

impl FixedWindowLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: DashMap::new(),
        }
    }

    /// Counts a request from `key` and decides whether it may proceed.
    ///
    /// Every request counts, including rejected ones. A window starts at the client's
    /// first request and lasts `config.window`; requests are allowed while the count
    /// within the window is at most `config.max`.
    pub fn hit(&self, key: &str) -> Decision {
        let now = Instant::now();

        if self.windows.len() > PURGE_THRESHOLD {
            self.purge_expired(now);
        }

        let mut window = self.windows.entry(key.to_string()).or_insert(Window {
            hits: 0,
            started: now,
        });

        if now.duration_since(window.started) >= self.config.window {
            window.hits = 0;
            window.started = now;
        }

        window.hits = window.hits.saturating_add(1);

        Decision {
            allowed: window.hits <= self.config.max,
            limit: self.config.max,
            remaining: self.config.max.saturating_sub(window.hits),
            reset_after: self
                .config
                .window
                .saturating_sub(now.duration_since(window.started)),
        }
    }

    /// Drops windows that have ended.
    ///
    /// Must not be called while an entry of `windows` is held.
    fn purge_expired(&self, now: Instant) {
        let window = self.config.window;
        self.windows
            .retain(|_, entry| now.duration_since(entry.started) < window);
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

fn client_key(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

pub async fn rate_limit(
    State(limiter): State<Arc<FixedWindowLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);
    let decision = limiter.hit(&key);

    let mut response = if decision.allowed {
        next.run(request).await
    } else {
        tracing::warn!("Rate limit exceeded for client {}", key);

        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorDto::new("Too many requests, please try again later.")),
        )
            .into_response();
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(decision.reset_secs()));
        response
    };

    let headers = response.headers_mut();
    headers.insert(RATELIMIT_LIMIT, HeaderValue::from(decision.limit));
    headers.insert(RATELIMIT_REMAINING, HeaderValue::from(decision.remaining));
    headers.insert(RATELIMIT_RESET, HeaderValue::from(decision.reset_secs()));

    response
}
