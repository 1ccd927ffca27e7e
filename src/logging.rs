// SPDX-License-Identifier: MPL-2.0
//! Logging setup for the command-line tool.
//!
//! Log lines go to stderr so stdout carries only the two status lines.
//! `RUST_LOG` overrides the default filter.

use crate::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Builds the level filter: `RUST_LOG` when set and valid, otherwise
/// [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
