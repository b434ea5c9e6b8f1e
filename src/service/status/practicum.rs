//! Practicum homework statuses API client.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::base::{
    config::Config,
    error::BotError,
    types::{BotResult, Res},
};

use super::{GenericStatusClient, StatusClient};

// Extra methods on `StatusClient` applied by the practicum implementation.

impl StatusClient {
    /// Creates a new Practicum status client.
    pub fn practicum(config: &Config) -> Res<Self> {
        let client = PracticumStatusClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<PracticumStatusClient> for StatusClient {
    fn from(client: PracticumStatusClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// Practicum status client implementation.
#[derive(Clone)]
pub struct PracticumStatusClient {
    client: reqwest::Client,
    endpoint: String,
    authorization: String,
}

impl PracticumStatusClient {
    /// Create a new Practicum status client.
    #[instrument(name = "PracticumStatusClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(config.request_timeout)).build()?;

        Ok(Self {
            client,
            endpoint: config.practicum_endpoint.clone(),
            authorization: format!("OAuth {}", config.practicum_token),
        })
    }

    fn failure(&self, cause: impl ToString) -> BotError {
        BotError::ApiFailure {
            endpoint: self.endpoint.clone(),
            cause: cause.to_string(),
        }
    }
}

#[async_trait]
impl GenericStatusClient for PracticumStatusClient {
    #[instrument(skip(self))]
    async fn get_homework_statuses(&self, from_date: i64) -> BotResult<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| self.failure(e.without_url()))?;

        let status = response.status();

        if status != StatusCode::OK {
            error!("Endpoint `{}` replied with status {}", self.endpoint, status);
            return Err(self.failure(format!("код ответа {}", status.as_u16())));
        }

        let body: Value = response.json().await.map_err(|e| self.failure(format!("некорректный JSON в ответе: {}", e.without_url())))?;

        info!("Requested endpoint `{}` from {}", self.endpoint, from_date);
        debug!("Endpoint reply: {}", body);

        Ok(body)
    }
}

// Tests.
