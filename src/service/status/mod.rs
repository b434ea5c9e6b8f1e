pub mod practicum;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use crate::base::types::BotResult;

// Traits.

/// Generic homework status trait that clients must implement.
///
/// The client only fetches; validating the shape of the returned document is
/// the job of [`crate::interaction::response`].
#[async_trait]
pub trait GenericStatusClient: Send + Sync + 'static {
    /// Fetch the homework statuses changed since `from_date` (a Unix timestamp).
    ///
    /// Returns the decoded JSON body. Transport failures, non-200 replies and
    /// undecodable bodies are all reported as
    /// [`BotError::ApiFailure`](crate::base::error::BotError::ApiFailure).
    async fn get_homework_statuses(&self, from_date: i64) -> BotResult<Value>;
}

// Structs.

/// Homework status client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct StatusClient {
    inner: Arc<dyn GenericStatusClient>,
}

impl Deref for StatusClient {
    type Target = dyn GenericStatusClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl StatusClient {
    pub fn new(inner: Arc<dyn GenericStatusClient>) -> Self {
        Self { inner }
    }
}
