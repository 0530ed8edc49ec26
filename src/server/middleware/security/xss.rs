//! Escapes `<` in string input so submitted text can not open HTML tags.

use axum::{extract::Request, middleware::Next, response::Response};
use serde_json::Value;

use super::transform::{rewrite_json_body, rewrite_query};

pub fn escape(input: &str) -> String {
    input.replace('<', "&lt;")
}

/// Escapes every string value in `value`. Object keys are left as they are.
pub fn clean_value(value: &mut Value) {
    match value {
        Value::String(text) => {
            if text.contains('<') {
                *text = escape(text);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(clean_value),
        Value::Object(map) => map.values_mut().for_each(clean_value),
        _ => {}
    }
}

pub async fn xss_clean(request: Request, next: Next) -> Response {
    let mut request = match rewrite_json_body(request, clean_value).await {
        Ok(request) => request,
        Err(response) => return response,
    };

    rewrite_query(&mut request, |pairs| {
        pairs
            .into_iter()
            .map(|(key, value)| (key, escape(&value)))
            .collect()
    });

    next.run(request).await
}
