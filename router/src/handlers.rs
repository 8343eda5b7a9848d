use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use router_client::wire::{ChatStateReply, MultiplyReply, Status, TestReply, WebhookReply};
use serde_json::Value;
use tracing::instrument;

use crate::error::ApiError;
use crate::summary::summarize;
use crate::{timestamp, AppState};

pub const GREETING: &str = "Hello! Your app is running on Render.";

const MISSING_OPERANDS: &str = "Please provide both 'number1' and 'number2' in the request body";
const INVALID_OPERANDS: &str = "Both numbers must be valid numbers";
const MULTIPLY_FAILURE: &str = "An error occurred";

pub async fn root() -> &'static str {
    GREETING
}

pub async fn test() -> Json<TestReply> {
    Json(TestReply {
        status: Status::Working,
        message: "Test endpoint is responding".to_string(),
        timestamp: timestamp(),
    })
}

#[instrument(skip_all)]
pub async fn webhook(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WebhookReply>, ApiError> {
    let Json(data) = payload?;
    let timestamp = timestamp();

    tracing::info!("Received request at {}", timestamp);
    tracing::info!("Request data: {}", data);

    Ok(Json(WebhookReply {
        status: Status::Success,
        message: "Request received and processed".to_string(),
        timestamp,
        received_data: data,
    }))
}

#[instrument(skip_all, fields(number1, number2))]
pub async fn multiply(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MultiplyReply>, ApiError> {
    let Json(body) = payload?;
    let (number1, number2) = operands(&body)?;

    let span = tracing::Span::current();
    span.record("number1", number1);
    span.record("number2", number2);

    let result = number1 * number2;
    if !result.is_finite() {
        return Err(ApiError::Internal {
            context: MULTIPLY_FAILURE,
            detail: format!("product of {number1} and {number2} is not a finite number"),
        });
    }

    state.delay.run("multiply").await;

    tracing::info!("SUCCESS");
    Ok(Json(MultiplyReply {
        status: Status::Success,
        message: "Multiplication completed successfully".to_string(),
        number1,
        number2,
        result,
        timestamp: timestamp(),
    }))
}

#[instrument(skip_all)]
pub async fn chatstate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatStateReply>, ApiError> {
    let Json(document) = payload?;
    let summary = summarize(&document);
    tracing::info!("ChatState summary: {}", summary.replace('\n', " | "));

    state.delay.run("chatstate").await;

    tracing::info!("SUCCESS");
    Ok(Json(ChatStateReply {
        status: Status::Success,
        message: "ChatState received and processed successfully".to_string(),
        summary,
        timestamp: timestamp(),
    }))
}

fn operands(body: &Value) -> Result<(f64, f64), ApiError> {
    match (body.get("number1"), body.get("number2")) {
        (Some(a), Some(b)) => match (coerce(a), coerce(b)) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(ApiError::Validation(INVALID_OPERANDS)),
        },
        _ => Err(ApiError::Validation(MISSING_OPERANDS)),
    }
}

/// Numbers pass through; strings are parsed as floats. Non-finite values
/// and every other JSON type are rejected.
fn coerce(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings_coerce() {
        assert_eq!(coerce(&json!(3)), Some(3.0));
        assert_eq!(coerce(&json!(-2.5)), Some(-2.5));
        assert_eq!(coerce(&json!(" 4.5 ")), Some(4.5));
        assert_eq!(coerce(&json!("1e3")), Some(1000.0));
    }

    #[test]
    fn other_values_do_not_coerce() {
        assert_eq!(coerce(&json!("abc")), None);
        assert_eq!(coerce(&json!("")), None);
        assert_eq!(coerce(&json!("inf")), None);
        assert_eq!(coerce(&json!("NaN")), None);
        assert_eq!(coerce(&json!(null)), None);
        assert_eq!(coerce(&json!(true)), None);
        assert_eq!(coerce(&json!([1])), None);
    }

    #[test]
    fn missing_operand_is_reported_before_invalid_one() {
        let err = operands(&json!({"number1": "abc"})).unwrap_err();
        assert_eq!(err.to_string(), MISSING_OPERANDS);

        let err = operands(&json!({"number1": "abc", "number2": 2})).unwrap_err();
        assert_eq!(err.to_string(), INVALID_OPERANDS);
    }

    #[test]
    fn non_object_body_has_no_operands() {
        let err = operands(&json!([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), MISSING_OPERANDS);
    }

    #[test]
    fn operands_are_read_as_floats() {
        assert_eq!(
            operands(&json!({"number1": "6", "number2": 7})).unwrap(),
            (6.0, 7.0)
        );
    }
}
