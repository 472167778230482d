//! Routing module
//!
//! Resolves request paths to API endpoints:
//! - optional API prefix stripping (`/api/lessons` == `/lessons`)
//! - method + path template matching with path parameters

mod matcher;

pub use matcher::{match_route, strip_api_prefix, Endpoint, RouteMatch};
