//! Fixed user-facing texts sent to the chat.

/// Sent once when the poll loop starts.
pub const STARTUP_MESSAGE: &str = "Старт работы бота";

/// Prefix of every error report sent to the chat.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Logged when the latest status matches the last delivered one.
pub const STATUS_UNCHANGED: &str = "Статус работы не изменился";

/// Verdict for an approved homework.
pub const VERDICT_APPROVED: &str = "Работа проверена: ревьюеру всё понравилось. Ура!";

/// Verdict for a homework taken into review.
pub const VERDICT_REVIEWING: &str = "Работа взята на проверку ревьюером.";

/// Verdict for a homework returned with remarks.
pub const VERDICT_REJECTED: &str = "Работа проверена: у ревьюера есть замечания.";

/// Compose the status change notification for a homework.
pub fn status_changed(homework_name: &str, verdict: &str) -> String {
    format!("Изменился статус проверки работы \"{homework_name}\". {verdict}")
}

/// Compose the error report for a failed poll.
pub fn failure_report(error: &impl std::fmt::Display) -> String {
    format!("{FAILURE_PREFIX}: {error}")
}
