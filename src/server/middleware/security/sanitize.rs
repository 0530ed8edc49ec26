//! Removes query-operator keys from request input.
//!
//! A key is prohibited when it starts with `$`, contains `.`, or has a bracketed
//! segment starting with `$` (`filter[$gt]`). Prohibited keys are removed from JSON
//! bodies at every nesting level and from the query string.

use axum::{extract::Request, middleware::Next, response::Response};
use serde_json::Value;

use super::transform::{rewrite_json_body, rewrite_query};

pub fn is_prohibited_key(key: &str) -> bool {
    key.starts_with('$') || key.contains('.') || key.contains("[$")
}

/// Removes prohibited keys from `value` recursively, returning how many were removed.
pub fn sanitize_value(value: &mut Value) -> usize {
    match value {
        Value::Object(map) => {
            let before = map.len();
            map.retain(|key, _| !is_prohibited_key(key));
            let removed = before - map.len();

            removed + map.values_mut().map(sanitize_value).sum::<usize>()
        }
        Value::Array(items) => items.iter_mut().map(sanitize_value).sum(),
        _ => 0,
    }
}

pub async fn sanitize(request: Request, next: Next) -> Response {
    let mut request = match rewrite_json_body(request, |body| {
        let removed = sanitize_value(body);
        if removed > 0 {
            tracing::warn!("Removed {} prohibited key(s) from request body", removed);
        }
    })
    .await
    {
        Ok(request) => request,
        Err(response) => return response,
    };

    rewrite_query(&mut request, |pairs| {
        pairs
            .into_iter()
            .filter(|(key, _)| {
                let prohibited = is_prohibited_key(key);
                if prohibited {
                    tracing::warn!("Removed prohibited query key '{}'", key);
                }
                !prohibited
            })
            .collect()
    });

    next.run(request).await
}
