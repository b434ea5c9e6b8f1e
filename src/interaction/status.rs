use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::base::{
    error::BotError,
    messages,
    types::{BotResult, HomeworkStatus},
};

/// Build the status change notification for a single homework record.
#[instrument(skip_all)]
pub fn parse_status(homework: &Value) -> BotResult<String> {
    debug!("Parsing homework: {}", homework);

    let homework_name = required_str(homework, "homework_name")?;
    let status = required_str(homework, "status")?;

    let Some(verdict) = HomeworkStatus::from_api(status).map(HomeworkStatus::verdict) else {
        let err = BotError::UnknownStatus(status.to_string());
        error!("{}", err);
        return Err(err);
    };

    info!("Homework `{}` has verdict: {}", homework_name, verdict);

    Ok(messages::status_changed(homework_name, verdict))
}

/// A non-empty string field of the record.
fn required_str<'a>(homework: &'a Value, field: &'static str) -> BotResult<&'a str> {
    match homework.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            let err = BotError::MissingField(field);
            error!("{}", err);
            Err(err)
        }
    }
}
