//! Request security pipeline.
//!
//! Every request passes through an ordered list of named stages before it reaches the
//! session layer and the routes. Each stage is configured by its own policy value, so
//! the chain can be built from configuration for the server or from any subset of
//! stages for tests.
//!
//! Canonical order, outermost first:
//! 1. `cors`
//! 2. `body_limit`
//! 3. `sanitize`
//! 4. `security_headers`
//! 5. `xss`
//! 6. `rate_limit`
//! 7. `hpp`

pub mod cors;
pub mod headers;
pub mod hpp;
pub mod rate_limit;
pub mod sanitize;
mod transform;
pub mod xss;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::limit::RequestBodyLimitLayer;

use crate::server::{
    config::SecurityConfig,
    middleware::security::{
        cors::CorsPolicy,
        headers::HeaderPolicy,
        hpp::HppPolicy,
        rate_limit::{FixedWindowLimiter, RateLimitConfig},
    },
};

/// One stage of the security pipeline together with its policy.
#[derive(Debug, Clone)]
pub enum Stage {
    Cors(CorsPolicy),
    /// Maximum request body size in bytes.
    BodyLimit(usize),
    Sanitize,
    SecurityHeaders(HeaderPolicy),
    Xss,
    RateLimit(RateLimitConfig),
    ParameterPollution(HppPolicy),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Cors(_) => "cors",
            Stage::BodyLimit(_) => "body_limit",
            Stage::Sanitize => "sanitize",
            Stage::SecurityHeaders(_) => "security_headers",
            Stage::Xss => "xss",
            Stage::RateLimit(_) => "rate_limit",
            Stage::ParameterPollution(_) => "hpp",
        }
    }

    fn layer(self, router: Router) -> Router {
        match self {
            Stage::Cors(policy) => router.layer(policy.layer()),
            Stage::BodyLimit(limit) => router.layer(RequestBodyLimitLayer::new(limit)),
            Stage::Sanitize => router.layer(middleware::from_fn(sanitize::sanitize)),
            Stage::SecurityHeaders(policy) => policy.apply(router),
            Stage::Xss => router.layer(middleware::from_fn(xss::xss_clean)),
            Stage::RateLimit(config) => {
                let limiter = Arc::new(FixedWindowLimiter::new(config));
                router.layer(middleware::from_fn_with_state(
                    limiter,
                    rate_limit::rate_limit,
                ))
            }
            Stage::ParameterPollution(policy) => {
                router.layer(middleware::from_fn_with_state(Arc::new(policy), hpp::hpp))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SecurityPipeline {
    stages: Vec<Stage>,
}

impl SecurityPipeline {
    /// Builds a pipeline from stages listed outermost first.
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Builds the canonical seven-stage pipeline.
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(vec![
            Stage::Cors(CorsPolicy::new(config.cors_allowed_origins.clone())),
            Stage::BodyLimit(config.body_limit_bytes),
            Stage::Sanitize,
            Stage::SecurityHeaders(HeaderPolicy::default()),
            Stage::Xss,
            Stage::RateLimit(config.rate_limit),
            Stage::ParameterPollution(HppPolicy::new(config.hpp_whitelist.clone())),
        ])
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::name).collect()
    }

    /// Wraps `router` so the first stage sees each request first.
    ///
    /// `Router::layer` wraps everything added before it, so stages are added in
    /// reverse order.
    pub fn apply(self, router: Router) -> Router {
        self.stages
            .into_iter()
            .rev()
            .fold(router, |router, stage| stage.layer(router))
    }
}
