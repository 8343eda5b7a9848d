//! JSON bodies exchanged with the router.
//!
//! Every response carries `status` and `message`; successful ones add a
//! `timestamp` and their route-specific payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Working,
}

/// The serde wire name.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_value(self) {
            Ok(Value::String(name)) => f.write_str(&name),
            _ => Err(fmt::Error),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestReply {
    pub status: Status,
    pub message: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebhookReply {
    pub status: Status,
    pub message: String,
    pub timestamp: String,
    pub received_data: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MultiplyRequest {
    pub number1: f64,
    pub number2: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MultiplyReply {
    pub status: Status,
    pub message: String,
    pub number1: f64,
    pub number2: f64,
    pub result: f64,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatStateReply {
    pub status: Status,
    pub message: String,
    pub summary: String,
    pub timestamp: String,
}

/// Body of every 4xx/5xx response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub status: Status,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_is_lowercase_on_the_wire() {
        assert_eq!(json!(Status::Working), json!("working"));
        assert_eq!(
            serde_json::from_value::<Status>(json!("error")).unwrap(),
            Status::Error
        );
        for status in [Status::Success, Status::Error, Status::Working] {
            assert_eq!(json!(status), json!(status.to_string()));
        }
    }

    #[test]
    fn error_body_has_no_timestamp() {
        let body = ErrorBody {
            status: Status::Error,
            message: "Both numbers must be valid numbers".to_string(),
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"status": "error", "message": "Both numbers must be valid numbers"})
        );
    }
}
