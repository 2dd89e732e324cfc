//! HTTP caching middleware
#![allow(dead_code)] // Used as middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::IntoResponse};

/// Attach `Cache-Control: max-age=<n>` to every response that passes through.
///
/// Caches key on the full request URL, so distinct query windows are cached
/// independently without any Vary gymnastics. A zero max-age skips the header
/// (used by tests).
pub async fn http_cache(
    State(max_age_sec): State<usize>,
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let response = next.run(request).await.into_response();
    if max_age_sec == 0 {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    parts.headers.insert(
        "Cache-Control",
        format!("max-age={}", max_age_sec).parse().unwrap(),
    );

    axum::http::Response::from_parts(parts, body)
}
