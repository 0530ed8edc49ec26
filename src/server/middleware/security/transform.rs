//! Request rewriting shared by the input-cleaning stages.

use axum::{
    body::Body,
    extract::Request,
    http::{header, uri::PathAndQuery, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::model::api::ErrorDto;

/// `application/json` and any `+json` media type.
pub(crate) fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    media_type == "application/json" || media_type.ends_with("+json")
}

/// Buffers a JSON request body, lets `rewrite` modify it and puts it back.
///
/// Non-JSON, empty and unparsable bodies are passed on untouched so the handler's
/// extractor reports them. A body that can not be read, which in practice means the
/// body limit was hit, produces a 413.
pub(crate) async fn rewrite_json_body<F>(request: Request, rewrite: F) -> Result<Request, Response>
where
    F: FnOnce(&mut Value),
{
    if !is_json(request.headers()) {
        return Ok(request);
    }

    let (mut parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.map_err(|err| {
        tracing::debug!("Failed to buffer request body: {}", err);
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorDto::new("Request body too large")),
        )
            .into_response()
    })?;

    if bytes.is_empty() {
        return Ok(Request::from_parts(parts, Body::from(bytes)));
    }

    let Ok(mut value) = serde_json::from_slice::<Value>(&bytes) else {
        return Ok(Request::from_parts(parts, Body::from(bytes)));
    };

    rewrite(&mut value);

    let Ok(rewritten) = serde_json::to_vec(&value) else {
        return Ok(Request::from_parts(parts, Body::from(bytes)));
    };

    parts
        .headers
        .insert(header::CONTENT_LENGTH, HeaderValue::from(rewritten.len()));

    Ok(Request::from_parts(parts, Body::from(rewritten)))
}

/// Decodes the query string into ordered key/value pairs.
pub(crate) fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    uri.query()
        .map(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

/// Replaces the request's query string with the pairs `rewrite` returns.
///
/// The URI is only rebuilt when the pairs actually change.
pub(crate) fn rewrite_query<F>(request: &mut Request, rewrite: F)
where
    F: FnOnce(Vec<(String, String)>) -> Vec<(String, String)>,
{
    if request.uri().query().is_none() {
        return;
    }

    let pairs = query_pairs(request.uri());
    let rewritten = rewrite(pairs.clone());
    if rewritten == pairs {
        return;
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(rewritten.iter())
        .finish();

    let path_and_query = if query.is_empty() {
        request.uri().path().to_string()
    } else {
        format!("{}?{}", request.uri().path(), query)
    };

    let mut uri_parts = request.uri().clone().into_parts();
    match PathAndQuery::try_from(path_and_query) {
        Ok(path_and_query) => uri_parts.path_and_query = Some(path_and_query),
        Err(err) => {
            tracing::warn!("Failed to rebuild query string: {}", err);
            return;
        }
    }

    match Uri::from_parts(uri_parts) {
        Ok(uri) => *request.uri_mut() = uri,
        Err(err) => tracing::warn!("Failed to rebuild request URI: {}", err),
    }
}
