//! Request and response DTOs.

pub mod request;
pub mod response;

use catalog_core::error::AppError;
use validator::{Validate, ValidationErrors};

/// Validate a request DTO, converting failures into a `Validation` error
/// carrying a field→message map.
pub fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(validation_error)
}

fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields = serde_json::Map::new();
    for (field, errs) in errors.field_errors() {
        let message = errs
            .first()
            .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid value".to_string());
        fields.insert(field.to_string(), serde_json::Value::String(message));
    }
    AppError::validation("Validation failed").with_details(serde_json::Value::Object(fields))
}
