// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::error::ValidationError;

/// Outcome of validating one commit message: accepted, or rejected for
/// exactly one reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The original message bytes.
    pub message: Vec<u8>,
    /// Why the message was rejected, if it was.
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    /// An accepted message.
    pub fn success(message: impl Into<Vec<u8>>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// A rejected message.
    pub fn failure(message: impl Into<Vec<u8>>, error: ValidationError) -> Self {
        Self {
            message: message.into(),
            error: Some(error),
        }
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Convert into a plain `Result`.
    pub fn into_result(self) -> std::result::Result<(), ValidationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Machine-readable form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "code": self.error.as_ref().map(ValidationError::code),
            "error": self.error.as_ref().map(ToString::to_string),
            "message": String::from_utf8_lossy(&self.message),
        })
    }
}
