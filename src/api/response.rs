// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{self, HeaderValue};
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::types::ErrorBody;

const INTERNAL_ERROR_BODY: &str = r#"{"error":"Internal server error"}"#;

/// Serialized JSON reply
///
/// Handlers produce this rather than a `Response` so the router can hash the
/// body for an `ETag` before the bytes are moved into the response.
#[derive(Debug, Clone)]
pub struct JsonReply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl JsonReply {
    pub fn new<T: Serialize>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_vec_pretty(value) {
            Ok(json) => Self {
                status,
                body: Bytes::from(json),
            },
            Err(e) => {
                logger::log_error(&format!("Failed to serialize response: {e}"));
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: Bytes::from_static(INTERNAL_ERROR_BODY.as_bytes()),
                }
            }
        }
    }

    pub fn ok<T: Serialize>(value: &T) -> Self {
        Self::new(StatusCode::OK, value)
    }

    /// `{"error": message}` with the given status
    pub fn error(status: StatusCode, message: &str) -> Self {
        Self::new(status, &ErrorBody { error: message })
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        json_response(self.status, self.body)
    }
}

/// Build JSON response from already serialized bytes
pub fn json_response(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from_static(INTERNAL_ERROR_BODY.as_bytes())))
        })
}

/// 404 for an unknown lesson or quiz id, e.g. "Lesson not found"
pub fn not_found(entity: &str) -> JsonReply {
    JsonReply::error(StatusCode::NOT_FOUND, &format!("{entity} not found"))
}

/// 404 for a path no route matches
pub fn route_not_found() -> JsonReply {
    JsonReply::error(StatusCode::NOT_FOUND, "Not Found")
}

/// 400 Bad Request response
pub fn bad_request(message: &str) -> JsonReply {
    JsonReply::error(StatusCode::BAD_REQUEST, message)
}

/// 413 Payload Too Large response
pub fn payload_too_large(limit: u64) -> JsonReply {
    JsonReply::error(
        StatusCode::PAYLOAD_TOO_LARGE,
        &format!("Request body exceeds {limit} bytes"),
    )
}

/// 405 with the `Allow` header listing what the path accepts
pub fn method_not_allowed(allow: &'static str) -> Response<Full<Bytes>> {
    let mut response =
        JsonReply::error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static(allow));
    response
}
