pub mod api;
pub mod catalog;
pub mod checklist;
pub mod config;
pub mod documents;
pub mod extraction;
pub mod models;
pub mod pipeline;
pub mod review;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Initialize tracing from `RUST_LOG`, falling back to the built-in
/// default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
