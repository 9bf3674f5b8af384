// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message validator.

use crate::commit::CommitMessage;
use crate::config::ValidatorConfig;
use crate::error::ValidationError;

use super::builtin::{
    check_allowed_type, check_blank_separator, check_body_line_length, check_header_format,
    check_header_length, check_not_empty, check_subject_case, check_subject_trailing_dot,
};
use super::validator::ValidationResult;

/// Validates one commit message against the header convention.
///
/// Checks run in a fixed order and the first one that fails decides the
/// result:
///
/// 1. the message is not empty
/// 2. the header reads `type(scope): subject`
/// 3. the subject does not start with a capital
/// 4. the subject does not end with a dot
/// 5. the type is allowed
/// 6. the second line, if any, is blank
/// 7. no later line is longer than `other_line_limit` (`#` comments excepted)
/// 8. the header is not longer than `first_line_limit`
///
/// ```
/// use validate_commit_msg::rules::CommitMessageValidator;
///
/// let validator = CommitMessageValidator::new("fix(parser): handle empty scope");
/// assert!(validator.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct CommitMessageValidator {
    message: Vec<u8>,
    config: ValidatorConfig,
}

impl CommitMessageValidator {
    /// Create a validator with the default rule parameters.
    pub fn new(message: impl Into<Vec<u8>>) -> Self {
        Self::with_config(message, ValidatorConfig::default())
    }

    /// Create a validator with explicit rule parameters. The message may be
    /// any bytes; it is not required to be UTF-8.
    pub fn with_config(message: impl Into<Vec<u8>>, config: ValidatorConfig) -> Self {
        Self {
            message: message.into(),
            config,
        }
    }

    /// Run every check and return the first failure.
    pub fn check(&self) -> std::result::Result<(), ValidationError> {
        let message = CommitMessage::new(&self.message);
        let config = &self.config;

        check_not_empty(&message)?;

        let header = check_header_format(&message)?;
        tracing::debug!(
            commit_type = %String::from_utf8_lossy(header.commit_type),
            scope = %String::from_utf8_lossy(header.scope),
            subject = %String::from_utf8_lossy(header.subject),
            "Parsed header"
        );

        check_subject_case(&header)?;
        check_subject_trailing_dot(&header)?;
        check_allowed_type(&header, config)?;
        check_blank_separator(&message)?;
        check_body_line_length(&message, config)?;
        check_header_length(&message, config)?;

        Ok(())
    }

    /// Validate the message.
    pub fn validate(&self) -> ValidationResult {
        match self.check() {
            Ok(()) => {
                tracing::debug!("Commit message accepted");
                ValidationResult::success(self.message.clone())
            }
            Err(err) => {
                tracing::debug!(code = err.code(), "Commit message rejected: {}", err);
                ValidationResult::failure(self.message.clone(), err)
            }
        }
    }

    /// Whether the message passes every check.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}
