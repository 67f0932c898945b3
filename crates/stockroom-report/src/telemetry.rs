//! # Tracing Setup
//!
//! Installs the global `tracing` subscriber for binaries and tests that
//! want to see ledger and report events.
//!
//! ```text
//! RUST_LOG set?  ──yes──►  EnvFilter from RUST_LOG
//!      │
//!      no
//!      ▼
//! "info,stockroom=debug"
//! ```

use tracing_subscriber::EnvFilter;

/// Default directives when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,stockroom=debug";

/// Installs a formatted subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Already installed by an earlier call or by the host application.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
