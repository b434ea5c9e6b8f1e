//! Runtime services and the poll loop of the homework bot.

use std::time::Duration;

use crate::{
    base::messages,
    interaction::{response, status},
    prelude::*,
    service::{chat::ChatClient, status::StatusClient},
};

/// State carried between poll iterations.
///
/// Owned by the [`Runtime`] alone; the two strings exist only to suppress
/// repeated identical notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Unix timestamp sent as `from_date`.
    pub from_date: i64,
    /// Last status notification delivered to the chat.
    pub last_message: String,
    /// Last error report delivered to the chat.
    pub last_error: String,
}

/// What a successful poll produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome {
    /// Notification for the latest homework, if there is one to consider.
    pub message: Option<String>,
    /// The server's `current_date`, if the reply carried one.
    pub current_date: Option<i64>,
}

/// Runtime service context.
///
/// This struct holds the configuration, the status and chat clients, and the
/// poll state. The clients are trivially cloneable, allowing them to be passed
/// around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The homework status client instance.
    pub api: StatusClient,
    /// The chat client instance.
    pub chat: ChatClient,
    /// What has been reported so far.
    pub state: PollState,
}

impl Runtime {
    /// Create a new runtime instance backed by the Practicum and Telegram clients.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        config.check_tokens().inspect_err(|e| error!("{}", e))?;

        let api = StatusClient::practicum(&config)?;
        let chat = ChatClient::telegram(&config)?;

        Ok(Self::with_clients(config, api, chat))
    }

    /// Create a runtime instance around existing clients.
    pub fn with_clients(config: Config, api: StatusClient, chat: ChatClient) -> Self {
        let state = PollState {
            from_date: config.initial_from_date(),
            ..Default::default()
        };

        Self { config, api, chat, state }
    }

    /// Announce the start and poll forever.
    ///
    /// Only returns on a configuration error or when the startup message
    /// cannot be delivered; every later failure is reported to the chat and
    /// the loop carries on.
    pub async fn start(&mut self) -> Void {
        if let Err(err) = self.config.check_tokens() {
            error!("{}", err);
            return Err(err.into());
        }

        info!("{}", messages::STARTUP_MESSAGE);
        self.chat.send_message(&self.config.telegram_chat_id, messages::STARTUP_MESSAGE).await?;

        let interval = Duration::from_secs(self.config.retry_time);

        loop {
            self.tick().await;
            tokio::time::sleep(interval).await;
        }
    }

    /// Run a single poll iteration and report its outcome.
    ///
    /// The poll window only moves once the outcome is settled: a notification
    /// that failed to deliver is fetched and retried on the next tick.
    #[instrument(skip(self))]
    pub async fn tick(&mut self) -> Dispatch {
        match self.poll().await {
            Ok(outcome) => {
                let dispatch = match outcome.message {
                    Some(message) => self.handle_success(message).await,
                    None => {
                        debug!("{}", messages::STATUS_UNCHANGED);
                        Dispatch::Unchanged
                    }
                };

                if dispatch != Dispatch::Failed {
                    self.advance(outcome.current_date);
                }

                dispatch
            }
            Err(err) => self.handle_failure(&err).await,
        }
    }

    /// Fetch, validate and parse the latest homework status.
    ///
    /// The message is `None` when the window moves with the server clock and
    /// nothing changed in it. Does not touch the poll state.
    pub async fn poll(&self) -> BotResult<PollOutcome> {
        let reply = self.api.get_homework_statuses(self.state.from_date).await?;
        let current_date = response::current_date(&reply);

        let homeworks = match response::check_response(&reply) {
            Err(BotError::EmptyHomeworkList) if self.config.advance_from_date => {
                return Ok(PollOutcome { message: None, current_date });
            }
            result => result?,
        };

        let homework = homeworks.first().ok_or(BotError::EmptyHomeworkList)?;
        let message = status::parse_status(homework)?;

        Ok(PollOutcome {
            message: Some(message),
            current_date,
        })
    }

    /// Deliver a status notification unless it was already delivered.
    pub async fn handle_success(&mut self, message: String) -> Dispatch {
        if message == self.state.last_message {
            debug!("{}", messages::STATUS_UNCHANGED);
            return Dispatch::Unchanged;
        }

        let dispatch = self.notify(&message).await;

        if dispatch == Dispatch::Sent {
            self.state.last_message = message;
        }

        dispatch
    }

    /// Report a failed poll unless the same report was already delivered.
    pub async fn handle_failure(&mut self, err: &BotError) -> Dispatch {
        let report = messages::failure_report(err);

        error!("{}", report);

        if report == self.state.last_error {
            return Dispatch::Unchanged;
        }

        let dispatch = self.notify(&report).await;

        if dispatch == Dispatch::Sent {
            self.state.last_error = report;
        }

        dispatch
    }

    /// Send a message to the configured chat; delivery errors are logged, not raised.
    async fn notify(&self, text: &str) -> Dispatch {
        match self.chat.send_message(&self.config.telegram_chat_id, text).await {
            Ok(()) => Dispatch::Sent,
            Err(err) => {
                error!("{}", err);
                Dispatch::Failed
            }
        }
    }

    /// Move the poll window to the server's clock, when configured to.
    fn advance(&mut self, current_date: Option<i64>) {
        if !self.config.advance_from_date {
            return;
        }

        if let Some(current_date) = current_date {
            debug!("Advancing from_date {} -> {}", self.state.from_date, current_date);
            self.state.from_date = current_date;
        } else {
            warn!("Reply has no `current_date`; keeping from_date {}", self.state.from_date);
        }
    }
}
