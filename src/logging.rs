//! Logging setup
//!
//! `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=inventory_optimizer=debug` to trace every recompute.

use crate::constants::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}
