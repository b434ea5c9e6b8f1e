//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, path::Path, sync::Arc};

use serde::Deserialize;

use super::{error::BotError, types::Res};

/// Default Practicum homework statuses endpoint.
fn default_practicum_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

/// Default Telegram Bot API base URL.
fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

/// Default poll interval, in seconds.
fn default_retry_time() -> u64 {
    600
}

/// Default HTTP request timeout, in seconds.
fn default_request_timeout() -> u64 {
    30
}

/// Default start of the polled window (2019-02-12).
fn default_from_date() -> i64 {
    1549962000
}

/// Configuration for the homework bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared settings.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Settings, as read from the config file and the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Practicum OAuth token (`PRACTICUM_TOKEN`).
    #[serde(default)]
    pub practicum_token: String,
    /// Telegram bot token (`TELEGRAM_TOKEN`).
    #[serde(default)]
    pub telegram_token: String,
    /// Chat that receives every notification (`TELEGRAM_CHAT_ID`).
    #[serde(default)]
    pub telegram_chat_id: String,
    /// Homework statuses endpoint (`PRACTICUM_ENDPOINT`).
    #[serde(default = "default_practicum_endpoint")]
    pub practicum_endpoint: String,
    /// Telegram Bot API base URL (`TELEGRAM_API_URL`).
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    /// Seconds to sleep between polls (`RETRY_TIME`).
    #[serde(default = "default_retry_time")]
    pub retry_time: u64,
    /// HTTP request timeout in seconds (`REQUEST_TIMEOUT`).
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Unix timestamp the poll window starts at (`FROM_DATE`).
    /// Zero means the current time at startup.
    #[serde(default = "default_from_date")]
    pub from_date: i64,
    /// Move the window to the server's `current_date` once a poll outcome is delivered (`ADVANCE_FROM_DATE`).
    #[serde(default)]
    pub advance_from_date: bool,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            practicum_token: String::new(),
            telegram_token: String::new(),
            telegram_chat_id: String::new(),
            practicum_endpoint: default_practicum_endpoint(),
            telegram_api_url: default_telegram_api_url(),
            retry_time: default_retry_time(),
            request_timeout: default_request_timeout(),
            from_date: default_from_date(),
            advance_from_date: false,
        }
    }
}

impl Config {
    /// Load the configuration from the process environment and an optional config file.
    pub fn load(explicit_path: Option<&Path>) -> Res<Self> {
        Self::load_from(explicit_path, None)
    }

    /// Same as [`Config::load`], but reads environment variables from `env` when given.
    pub fn load_from(explicit_path: Option<&Path>, env: Option<config::Map<String, String>>) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        cfg = cfg.add_source(config::Environment::default().source(env));

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.check_tokens()?;

        if result.retry_time == 0 {
            return Err(anyhow::anyhow!("Retry time must be greater than zero."));
        }

        if result.request_timeout == 0 {
            return Err(anyhow::anyhow!("Request timeout must be greater than zero."));
        }

        if result.from_date < 0 {
            return Err(anyhow::anyhow!("From date must not be negative."));
        }

        Ok(result)
    }

    /// Verify that every credential is present and non-empty.
    pub fn check_tokens(&self) -> Result<(), BotError> {
        let missing: Vec<&'static str> = [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() { Ok(()) } else { Err(BotError::Configuration { missing }) }
    }

    /// The poll timestamp the loop starts with.
    pub fn initial_from_date(&self) -> i64 {
        if self.from_date == 0 { chrono::Utc::now().timestamp() } else { self.from_date }
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![("PRACTICUM_TOKEN", "y0_practicum"), ("TELEGRAM_TOKEN", "123:telegram"), ("TELEGRAM_CHAT_ID", "42")]
    }

    #[test]
    fn test_load_reads_credentials_and_defaults() {
        let config = Config::load_from(None, Some(env(&full_env()))).unwrap();

        assert_eq!(config.practicum_token, "y0_practicum");
        assert_eq!(config.telegram_token, "123:telegram");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.practicum_endpoint, "https://practicum.yandex.ru/api/user_api/homework_statuses/");
        assert_eq!(config.retry_time, 600);
        assert_eq!(config.from_date, 1549962000);
        assert!(!config.advance_from_date);
    }

    #[test]
    fn test_load_parses_optional_overrides() {
        let mut pairs = full_env();
        pairs.extend([("RETRY_TIME", "5"), ("FROM_DATE", "0"), ("ADVANCE_FROM_DATE", "true")]);

        let config = Config::load_from(None, Some(env(&pairs))).unwrap();

        assert_eq!(config.retry_time, 5);
        assert_eq!(config.from_date, 0);
        assert!(config.advance_from_date);
        assert!(config.initial_from_date() > 1549962000);
    }

    #[test]
    fn test_load_fails_without_chat_id() {
        let pairs: Vec<_> = full_env().into_iter().filter(|(k, _)| *k != "TELEGRAM_CHAT_ID").collect();

        let err = Config::load_from(None, Some(env(&pairs))).unwrap_err();
        let err = err.downcast::<BotError>().unwrap();

        assert_eq!(err, BotError::Configuration { missing: vec!["TELEGRAM_CHAT_ID"] });
    }

    #[test]
    fn test_load_rejects_zero_retry_time() {
        let mut pairs = full_env();
        pairs.push(("RETRY_TIME", "0"));

        assert!(Config::load_from(None, Some(env(&pairs))).is_err());
    }

    #[test]
    fn test_check_tokens_treats_blank_as_missing() {
        let config = Config::from(ConfigInner {
            practicum_token: "   ".to_string(),
            telegram_token: "t".to_string(),
            ..Default::default()
        });

        let err = config.check_tokens().unwrap_err();
        assert_eq!(err, BotError::Configuration { missing: vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"] });
    }

    #[test]
    fn test_initial_from_date_keeps_fixed_value() {
        let config = Config::from(ConfigInner { from_date: 1700000000, ..Default::default() });
        assert_eq!(config.initial_from_date(), 1700000000);
    }
}
