//! Request logging middleware
//!
//! Logs method, path, status, response size, and latency for every request,
//! plus the request body for POST.

use crate::error::AppError;
use axum::{
    body::{Body, Bytes, HttpBody},
    extract::{FromRequest, Request},
    http::{header::CONTENT_LENGTH, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request logging middleware - adds unique ID to each request for tracing
pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let (request, body) = if method == Method::POST {
        match buffer_body(request).await {
            Ok(buffered) => buffered,
            Err(response) => return response,
        }
    } else {
        (request, String::new())
    };

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        size = %response_size(&response),
        duration_ms = duration.as_millis(),
        body = %body,
        "Request completed"
    );

    response
}

/// Read the whole body so it can be logged, then re-attach it to the request
///
/// Buffering goes through the `Bytes` extractor so axum's default body limit
/// applies; an oversized body is answered with 413.
async fn buffer_body(request: Request) -> Result<(Request, String), Response> {
    let (parts, body) = request.into_parts();
    let bytes = Bytes::from_request(Request::new(body), &())
        .await
        .map_err(|rejection| {
            let message = rejection.body_text();
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(message)
            } else {
                AppError::BadRequest(message)
            };
            err.into_response()
        })?;

    let logged = describe_body(&bytes);
    Ok((Request::from_parts(parts, Body::from(bytes)), logged))
}

/// Compact JSON when the body parses, raw text otherwise
fn describe_body(bytes: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => value.to_string(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn response_size(response: &Response) -> String {
    response
        .body()
        .size_hint()
        .exact()
        .map(|n| n.to_string())
        .or_else(|| {
            response
                .headers()
                .get(CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "-".to_string())
}
