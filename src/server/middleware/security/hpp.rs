//! HTTP parameter pollution guard.
//!
//! Repeated query keys collapse to their last value, so handlers never see an
//! array where they expect a scalar. Whitelisted keys may repeat.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::transform::rewrite_query;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HppPolicy {
    /// Query keys allowed to appear more than once.
    pub whitelist: Vec<String>,
}

impl HppPolicy {
    pub fn new(whitelist: Vec<String>) -> Self {
        Self { whitelist }
    }

    fn allows_repeats(&self, key: &str) -> bool {
        self.whitelist.iter().any(|allowed| allowed == key)
    }

    /// Keeps the last value of each repeated non-whitelisted key, at the position the
    /// key first appeared.
    pub fn collapse(&self, pairs: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut collapsed: Vec<(String, String)> = Vec::with_capacity(pairs.len());
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (key, value) in pairs {
            if self.allows_repeats(&key) {
                collapsed.push((key, value));
                continue;
            }

            match positions.get(&key) {
                Some(&index) => collapsed[index].1 = value,
                None => {
                    positions.insert(key.clone(), collapsed.len());
                    collapsed.push((key, value));
                }
            }
        }

        collapsed
    }
}

pub async fn hpp(
    State(policy): State<Arc<HppPolicy>>,
    mut request: Request,
    next: Next,
) -> Response {
    rewrite_query(&mut request, |pairs| policy.collapse(pairs));

    next.run(request).await
}
