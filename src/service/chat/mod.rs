pub mod telegram;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::BotResult;

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the core functionality for delivering notifications
/// to a chat platform like Telegram. Implementing this trait allows different
/// chat services to be used with the homework bot.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Send a text message to a chat.
    ///
    /// Every call results in exactly one outbound message; deduplication is
    /// left to the caller. Delivery problems are reported as
    /// [`BotError::NotifyFailure`](crate::base::error::BotError::NotifyFailure).
    async fn send_message(&self, chat_id: &str, text: &str) -> BotResult<()>;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
