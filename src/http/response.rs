//! HTTP response building module
//!
//! Protocol-level responses and headers shared by every route: CORS
//! preflight, conditional GET and the headers stamped on all replies.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{self, HeaderValue};
use hyper::Response;

use super::cache;

/// Methods any route may answer, advertised on preflight
const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const CORS_ALLOW_HEADERS: &str = "Content-Type, X-User-ID, If-None-Match";

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header(header::ETAG, etag)
        .header(header::CACHE_CONTROL, cache::CACHE_CONTROL)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header(header::ALLOW, CORS_ALLOW_METHODS);

    if enable_cors {
        builder = builder
            .header(header::ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS)
            .header(header::ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS)
            .header(header::ACCESS_CONTROL_MAX_AGE, "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Attach a validator to a successful GET, or turn it into a 304
///
/// Returns the response untouched when it is not a 200.
pub fn apply_etag(
    response: Response<Full<Bytes>>,
    body: &[u8],
    if_none_match: Option<&str>,
) -> Response<Full<Bytes>> {
    if response.status() != hyper::StatusCode::OK {
        return response;
    }

    let etag = cache::generate_etag(body);
    if cache::check_etag_match(if_none_match, &etag) {
        return build_304_response(&etag);
    }

    let mut response = response;
    if let Ok(value) = HeaderValue::from_str(&etag) {
        response.headers_mut().insert(header::ETAG, value);
    }
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(cache::CACHE_CONTROL));
    response
}

/// Headers every response carries: `Server` and, when enabled, CORS
pub fn apply_common_headers(
    response: &mut Response<Full<Bytes>>,
    server_name: &str,
    enable_cors: bool,
) {
    let headers = response.headers_mut();
    match HeaderValue::from_str(server_name) {
        Ok(value) => {
            headers.insert(header::SERVER, value);
        }
        Err(e) => crate::logger::log_warning(&format!("Invalid server name header: {e}")),
    }
    if enable_cors {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
