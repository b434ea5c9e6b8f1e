//! Error taxonomy for the poll pipeline.

use thiserror::Error;

/// Everything that can go wrong while polling and notifying.
///
/// The rendered text of each variant is what ends up in the chat, so it must
/// stay stable between iterations for the same underlying failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    /// Required credentials are absent; fatal at startup.
    #[error("Отсутствуют обязательные переменные окружения: {}", missing.join(", "))]
    Configuration {
        /// Names of the missing environment variables.
        missing: Vec<&'static str>,
    },

    /// The status endpoint could not be reached, replied with a non-200 status, or sent garbage.
    #[error("Сервис API недоступен ({endpoint}): {cause}")]
    ApiFailure {
        /// The endpoint that was queried.
        endpoint: String,
        /// Status code or transport error.
        cause: String,
    },

    /// The reply, or its `homeworks` field, has the wrong JSON type.
    #[error("Неверный формат ответа API: ожидался {expected}, получен {found}")]
    MalformedResponse {
        /// Expected JSON type.
        expected: &'static str,
        /// Actual JSON type.
        found: &'static str,
    },

    /// The `homeworks` array is empty.
    #[error("Нет домашних работ, уточните эндпоинт")]
    EmptyHomeworkList,

    /// A homework record lacks a required field.
    #[error("Отсутствует поле домашней работы: {0}")]
    MissingField(&'static str),

    /// A homework record has a status outside the verdict table.
    #[error("Неизвестный статус домашней работы: {0}")]
    UnknownStatus(String),

    /// The chat did not accept a message.
    #[error("Не удалось отправить сообщение: {0}")]
    NotifyFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_lists_every_variable() {
        let e = BotError::Configuration {
            missing: vec!["TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"],
        };
        assert_eq!(e.to_string(), "Отсутствуют обязательные переменные окружения: TELEGRAM_TOKEN, TELEGRAM_CHAT_ID");
    }

    #[test]
    fn test_api_failure_display() {
        let e = BotError::ApiFailure {
            endpoint: "https://example.test/".to_string(),
            cause: "код ответа 503".to_string(),
        };
        assert_eq!(e.to_string(), "Сервис API недоступен (https://example.test/): код ответа 503");
    }

    #[test]
    fn test_malformed_response_display() {
        let e = BotError::MalformedResponse { expected: "array", found: "string" };
        assert_eq!(e.to_string(), "Неверный формат ответа API: ожидался array, получен string");
    }

    #[test]
    fn test_field_errors_display() {
        assert_eq!(BotError::MissingField("status").to_string(), "Отсутствует поле домашней работы: status");
        assert_eq!(BotError::UnknownStatus("pending".into()).to_string(), "Неизвестный статус домашней работы: pending");
    }
}
