//! HTTP cache validation module
//!
//! `ETag`s for JSON bodies and `If-None-Match` checks. Content never changes
//! while the process runs, so a body hash is a stable validator.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Cache-Control sent with content responses; clients must revalidate
pub const CACHE_CONTROL: &str = "no-cache";

/// Quoted `ETag` for a response body, e.g. `"abc123def"`
pub fn generate_etag(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Check if client's `If-None-Match` header matches the server's `ETag`
///
/// Handles a single tag, a comma separated list and the `*` wildcard.
/// Weak tags (`W/"..."`) compare by their opaque part.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag.split(',').map(str::trim).any(|e| {
            e == "*" || e.strip_prefix("W/").unwrap_or(e) == etag
        })
    })
}
