//! The uniform response envelope for API endpoints.
//!
//! Every `/api` route wraps its payload in `{status, code, message, data}`.
//! Validation failures additionally carry an `errors` field→message map.

use serde::{Deserialize, Serialize};

/// Standard response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// `"success"` or `"error"`.
    pub status: String,
    /// HTTP status code, repeated in the body.
    pub code: u16,
    /// Human-readable message.
    pub message: String,
    /// Response payload; `null` on errors and on bodyless successes.
    pub data: Option<T>,
    /// Field→message map, present only on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful envelope with the given code.
    pub fn success(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            code,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    /// Create a 200 envelope.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(200, message, data)
    }

    /// Create a 201 envelope.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(201, message, data)
    }
}

impl ApiResponse<serde_json::Value> {
    /// Create a successful envelope with `data: null` (e.g. after a delete).
    pub fn success_empty(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            code,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    /// Create an error envelope with `data: null`.
    pub fn error(
        code: u16,
        message: impl Into<String>,
        errors: Option<serde_json::Value>,
    ) -> Self {
        Self {
            status: "error".to_string(),
            code,
            message: message.into(),
            data: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let resp = ApiResponse::created("User registered", serde_json::json!({"id": 1}));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["code"], 201);
        assert_eq!(value["message"], "User registered");
        assert_eq!(value["data"]["id"], 1);
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn error_envelope_has_null_data() {
        let resp = ApiResponse::error(404, "Not found", None);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value["data"].is_null());
    }
}
