//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the homework bot:
//! - Homework status services (e.g., Practicum)
//! - Chat services (e.g., Telegram)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod status;

#[cfg(test)]
pub(crate) mod test_server;
