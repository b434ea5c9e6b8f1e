//! Shape checks for the homework statuses document.

use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::base::{error::BotError, types::BotResult};

/// Validate the API reply and return its `homeworks` array.
///
/// The reply must be a JSON object holding a non-empty array under `homeworks`;
/// the array is returned as-is, order preserved.
#[instrument(skip_all)]
pub fn check_response(response: &Value) -> BotResult<&[Value]> {
    let Some(object) = response.as_object() else {
        let err = BotError::MalformedResponse {
            expected: "object",
            found: json_kind(Some(response)),
        };
        error!("{}", err);
        return Err(err);
    };

    let homeworks = object.get("homeworks");

    let Some(homeworks) = homeworks.and_then(Value::as_array) else {
        let err = BotError::MalformedResponse {
            expected: "array",
            found: json_kind(homeworks),
        };
        error!("{}", err);
        return Err(err);
    };

    if homeworks.is_empty() {
        return Err(BotError::EmptyHomeworkList);
    }

    info!("Checked API reply: {} homework(s)", homeworks.len());
    debug!("Homeworks: {:?}", homeworks);

    Ok(homeworks.as_slice())
}

/// The server-side timestamp of the reply, if it carries one.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

/// Name of a JSON value's type, as used in error texts.
fn json_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_returns_homeworks_in_order() {
        let response = json!({
            "homeworks": [
                { "homework_name": "hw2", "status": "reviewing" },
                { "homework_name": "hw1", "status": "approved" },
            ],
            "current_date": 1700000000,
        });

        let homeworks = check_response(&response).unwrap();

        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw2");
        assert_eq!(homeworks[1]["homework_name"], "hw1");
    }

    #[test]
    fn test_rejects_non_object() {
        for response in [json!([]), json!("homeworks"), json!(null), json!(1)] {
            let err = check_response(&response).unwrap_err();
            assert!(matches!(err, BotError::MalformedResponse { expected: "object", .. }), "{response}");
        }
    }

    #[test]
    fn test_rejects_missing_homeworks() {
        let err = check_response(&json!({ "current_date": 1 })).unwrap_err();
        assert_eq!(err, BotError::MalformedResponse { expected: "array", found: "nothing" });
    }

    #[test]
    fn test_rejects_non_array_homeworks() {
        let err = check_response(&json!({ "homeworks": { "homework_name": "hw1" } })).unwrap_err();
        assert_eq!(err, BotError::MalformedResponse { expected: "array", found: "object" });

        let err = check_response(&json!({ "homeworks": null })).unwrap_err();
        assert_eq!(err, BotError::MalformedResponse { expected: "array", found: "null" });
    }

    #[test]
    fn test_rejects_empty_homeworks() {
        let err = check_response(&json!({ "homeworks": [] })).unwrap_err();
        assert_eq!(err, BotError::EmptyHomeworkList);
    }

    #[test]
    fn test_current_date() {
        assert_eq!(current_date(&json!({ "current_date": 1700000000 })), Some(1700000000));
        assert_eq!(current_date(&json!({ "current_date": "soon" })), None);
        assert_eq!(current_date(&json!({ "homeworks": [] })), None);
    }
}
