//! HTTP request/response tracing middleware.

use axum::{body::Body, http::Request, http::Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span with method, URI and version. The
/// response is logged with its status and latency in milliseconds: at `WARN`
/// for client errors (every failed usuario operation answers 400), at `INFO`
/// otherwise.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/usuario version=HTTP/1.1}: status=200 latency_ms=3
/// WARN request{method=PUT uri=/usuario/abc version=HTTP/1.1}: status=400 latency_ms=1
/// ```
#[allow(clippy::type_complexity)]
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    fn(&Request<Body>, &Span),
    fn(&Response<Body>, Duration, &Span),
> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(on_request as fn(&Request<Body>, &Span))
        .on_response(on_response as fn(&Response<Body>, Duration, &Span))
}

fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::debug!("Processing request");
}

fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();
    let latency_ms = latency.as_millis() as u64;

    if response.status().is_client_error() {
        tracing::warn!(status, latency_ms, "Request rejected");
    } else {
        tracing::info!(status, latency_ms, "Request completed");
    }
}
