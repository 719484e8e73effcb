//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (or the storage error that prevented it) and shutdown
//! - **Entity Operations**: Create, Get, List, Update and Delete, keyed by `entity_type` and `id`
//! - **Errors**: not-found and storage failures at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to the data access layer
//! RUST_LOG=resource_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, creating an order prints:
//!
//! ```text
//! DEBUG Create entity_type="Order" params=OrderCreate { customer_name: "Ada", description: "2 x BLT" }
//! INFO Created entity_type="Order" id=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"info"`) is used.
/// The compact format hides the module path, since every actor log line carries
/// `entity_type` already.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
