//! Common types and result handling.

use crate::base::{
    error::BotError,
    messages::{VERDICT_APPROVED, VERDICT_REJECTED, VERDICT_REVIEWING},
};

/// Error type of startup plumbing.
pub type Err = anyhow::Error;
/// Result of startup plumbing.
pub type Res<T> = Result<T, Err>;
/// Result of startup plumbing without a value.
pub type Void = Res<()>;

/// Result of a single pipeline stage (fetch, validate, parse, notify).
pub type BotResult<T> = Result<T, BotError>;

/// Review status of a homework, as reported by the Practicum API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    /// Accepted by the reviewer.
    Approved,
    /// Taken into review.
    Reviewing,
    /// Returned with remarks.
    Rejected,
}

impl HomeworkStatus {
    /// Look up a raw API status string.
    ///
    /// Returns `None` for anything outside the three known statuses.
    pub fn from_api(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// The human-readable verdict for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => VERDICT_APPROVED,
            Self::Reviewing => VERDICT_REVIEWING,
            Self::Rejected => VERDICT_REJECTED,
        }
    }
}

/// Outcome of one poll loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A notification was delivered.
    Sent,
    /// Nothing new to report; no notification was attempted.
    Unchanged,
    /// A notification was due but delivery failed.
    Failed,
}
