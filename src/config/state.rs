// Application state module
// Shared, read-only state handed to every connection

use crate::content::ContentStore;

use super::types::Config;

/// Application state
///
/// Built once before the listener starts and shared behind an `Arc`.
/// Nothing in here is mutated after startup, so handlers read it without locks.
pub struct AppState {
    pub config: Config,
    pub store: ContentStore,
}

impl AppState {
    pub const fn new(config: Config, store: ContentStore) -> Self {
        Self { config, store }
    }
}
