//! Library root for `homework-bot`.
//!
//! Homework-bot watches the review status of Practicum homework submissions:
//! - Polls the homework statuses endpoint at a fixed interval
//! - Turns the status of the latest homework into a human-readable verdict
//! - Sends it to a single Telegram chat, once per change
//! - Reports failures to the same chat, once per distinct failure
//!
//! The architecture is built around small traits for the status API and the
//! chat, so either side can be swapped (or mocked) without touching the loop.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the homework-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime with the Practicum and Telegram clients
/// - Starts the poll loop, which does not return under normal operation
pub async fn start(config: Config) -> Void {
    info!("Starting homework-bot ...");

    // Start the crypto provider (an error only means one is already installed).
    let _ = crypto::ring::default_provider().install_default();

    // Initialize the runtime.
    let mut runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await
}
