//! Request and response payloads of the HTTP surface

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request for teacher login
///
/// Fields are kept as raw JSON: a missing or empty one is a bad request,
/// while a value of the wrong type simply cannot match any teacher.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

impl LoginRequest {
    /// Both fields are present and non-empty
    pub fn is_complete(&self) -> bool {
        is_present(self.username.as_ref()) && is_present(self.password.as_ref())
    }

    /// Username and password, when both are strings
    pub fn as_text(&self) -> Option<(&str, &str)> {
        Some((
            self.username.as_ref()?.as_str()?,
            self.password.as_ref()?.as_str()?,
        ))
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Response for teacher login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in_hours: i64,
}

/// Email carried in the query string of signup and unregister
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Confirmation returned by roster mutations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> LoginRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_missing_or_empty_fields() {
        assert!(!request(json!({})).is_complete());
        assert!(!request(json!({"username": "mchen"})).is_complete());
        assert!(!request(json!({"username": "", "password": "x"})).is_complete());
        assert!(!request(json!({"username": null, "password": "x"})).is_complete());
        assert!(!request(json!({"username": 0, "password": "x"})).is_complete());
    }

    #[test]
    fn test_non_string_fields_are_complete_but_not_text() {
        let login = request(json!({"username": 1, "password": "x"}));
        assert!(login.is_complete());
        assert_eq!(login.as_text(), None);

        let login = request(json!({"username": "mchen", "password": "chess456"}));
        assert!(login.is_complete());
        assert_eq!(login.as_text(), Some(("mchen", "chess456")));
    }
}
