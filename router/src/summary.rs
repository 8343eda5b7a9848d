use serde_json::{Map, Value};

const UNKNOWN_BUSINESS: &str = "Unknown Business";
const UNKNOWN_STAGE: &str = "Unknown Stage";
const UNKNOWN_LANGUAGE: &str = "Unknown Language";

#[derive(Debug, thiserror::Error)]
enum ShapeError {
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("'{field}' must be {expected}, found {found}")]
    WrongShape {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// The four values a summary shows, borrowed from the document.
#[derive(Debug)]
struct Digest<'a> {
    business: Option<&'a Value>,
    stage: Option<&'a Value>,
    language: Option<&'a Value>,
    direct_competitors: usize,
}

/// Describes a ChatState document in a few lines.
///
/// Only `business.name`, `stage`, `language` and `competitors.direct` are
/// read; nothing else in the document can affect the result. Never fails: a
/// wrong shape along one of those paths yields a description of the parse
/// error instead of a summary.
pub fn summarize(document: &Value) -> String {
    match digest(document).and_then(|d| render(&d)) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!("ChatState could not be summarized: {}", e);
            format!("Error parsing ChatState: {e}")
        }
    }
}

fn digest(document: &Value) -> Result<Digest<'_>, ShapeError> {
    let root = document.as_object().ok_or(ShapeError::NotAnObject)?;

    let business = match present(root, "business") {
        None => None,
        Some(Value::Object(business)) => present(business, "name"),
        Some(other) => return Err(wrong_shape("business", "an object", other)),
    };

    let direct_competitors = match present(root, "competitors") {
        None => 0,
        Some(Value::Object(competitors)) => match present(competitors, "direct") {
            None => 0,
            Some(Value::Array(direct)) => direct.len(),
            Some(other) => return Err(wrong_shape("competitors.direct", "a list", other)),
        },
        Some(other) => return Err(wrong_shape("competitors", "an object", other)),
    };

    Ok(Digest {
        business,
        stage: present(root, "stage"),
        language: present(root, "language"),
        direct_competitors,
    })
}

fn render(digest: &Digest<'_>) -> Result<String, ShapeError> {
    Ok(format!(
        "ChatState Summary:\nBusiness: {}\nStage: {}\nLanguage: {}\nDirect Competitors: {}",
        label("business.name", digest.business, UNKNOWN_BUSINESS)?,
        label("stage", digest.stage, UNKNOWN_STAGE)?,
        label("language", digest.language, UNKNOWN_LANGUAGE)?,
        digest.direct_competitors,
    ))
}

/// `null` counts as absent.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

/// Strings print as-is, numbers and booleans as their JSON text.
fn label(field: &'static str, value: Option<&Value>, default: &str) -> Result<String, ShapeError> {
    match value {
        None => Ok(default.to_string()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(scalar.to_string()),
        Some(other) => Err(wrong_shape(field, "a scalar", other)),
    }
}

fn wrong_shape(field: &'static str, expected: &'static str, found: &Value) -> ShapeError {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    };
    ShapeError::WrongShape {
        field,
        expected,
        found,
    }
}
