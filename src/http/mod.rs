//! HTTP protocol layer module
//!
//! Protocol-level helpers decoupled from the API routes: cache validators,
//! CORS preflight and shared response headers.

pub mod cache;
pub mod response;

// Re-export commonly used helpers
pub use response::{apply_common_headers, apply_etag, build_options_response};
