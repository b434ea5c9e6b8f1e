//! Turning API replies into notifications.
//!
//! This module holds the pure stages of the poll pipeline:
//! - Validating the shape of the homework statuses document
//! - Extracting the status of a homework and composing its notification

pub mod response;
pub mod status;
