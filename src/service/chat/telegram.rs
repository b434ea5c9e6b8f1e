//! Telegram Bot API chat client.
//!
//! Only `sendMessage` is used: the bot never reads updates, it just pushes
//! notifications into a single configured chat.
//! Docs: <https://core.telegram.org/bots/api#sendmessage>

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    error::BotError,
    types::{BotResult, Res},
};

use super::{ChatClient, GenericChatClient};

// Extra methods on `ChatClient` applied by the telegram implementation.

impl ChatClient {
    /// Creates a new Telegram chat client.
    pub fn telegram(config: &Config) -> Res<Self> {
        let client = TelegramChatClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<TelegramChatClient> for ChatClient {
    fn from(client: TelegramChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Wire types.

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct TelegramReply {
    ok: bool,
    description: Option<String>,
}

// Specific implementations.

/// Telegram client implementation.
///
/// The bot token is part of the request URL: no `Debug`, and transport errors
/// are stripped of their URL.
#[derive(Clone)]
pub struct TelegramChatClient {
    client: reqwest::Client,
    send_message_url: String,
}

impl TelegramChatClient {
    /// Create a new Telegram chat client.
    #[instrument(name = "TelegramChatClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(config.request_timeout)).build()?;

        Ok(Self {
            client,
            send_message_url: send_message_url(&config.telegram_api_url, &config.telegram_token),
        })
    }
}

#[async_trait]
impl GenericChatClient for TelegramChatClient {
    #[instrument(skip(self))]
    async fn send_message(&self, chat_id: &str, text: &str) -> BotResult<()> {
        let request = SendMessageRequest { chat_id, text };

        let response = self
            .client
            .post(&self.send_message_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::NotifyFailure(e.without_url().to_string()))?;

        let status = response.status();

        match response.json::<TelegramReply>().await {
            Ok(TelegramReply { ok: true, .. }) if status.is_success() => {
                info!("Message sent: {}", text);
                Ok(())
            }
            Ok(reply) => Err(BotError::NotifyFailure(reply.description.unwrap_or_else(|| status_text(status)))),
            Err(_) if !status.is_success() => Err(BotError::NotifyFailure(status_text(status))),
            Err(e) => Err(BotError::NotifyFailure(format!("некорректный ответ Telegram: {}", e.without_url()))),
        }
    }
}

// Helpers.

/// Build the `sendMessage` URL for a bot token.
fn send_message_url(api_url: &str, token: &str) -> String {
    format!("{}/bot{}/sendMessage", api_url.trim_end_matches('/'), token)
}

fn status_text(status: StatusCode) -> String {
    format!("код ответа {}", status.as_u16())
}

// Tests.
