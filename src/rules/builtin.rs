// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The individual checks, in the order they run.
//!
//! Each check either passes or returns the single [`ValidationError`] that
//! rejects the message. The validator chains them with `?`. Lengths are
//! byte counts of the raw message.

use crate::commit::{CommitMessage, ParsedHeader};
use crate::config::ValidatorConfig;
use crate::error::ValidationError;

type Check = std::result::Result<(), ValidationError>;

/// The message must not be empty.
pub fn check_not_empty(message: &CommitMessage<'_>) -> Check {
    if message.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(())
}

/// The header must read `type(scope): subject`.
pub fn check_header_format<'a>(
    message: &CommitMessage<'a>,
) -> std::result::Result<ParsedHeader<'a>, ValidationError> {
    ParsedHeader::parse(message.header()).ok_or(ValidationError::MalformedHeader)
}

/// The subject must not start with an uppercase ASCII letter.
pub fn check_subject_case(header: &ParsedHeader<'_>) -> Check {
    if header.subject.first().is_some_and(u8::is_ascii_uppercase) {
        return Err(ValidationError::CapitalizedSubject {
            subject: header.subject.into(),
        });
    }
    Ok(())
}

/// The subject must not end with `.`.
pub fn check_subject_trailing_dot(header: &ParsedHeader<'_>) -> Check {
    if header.subject.ends_with(b".") {
        return Err(ValidationError::TrailingDot {
            subject: header.subject.into(),
        });
    }
    Ok(())
}

/// The type must be one of the configured tags.
pub fn check_allowed_type(header: &ParsedHeader<'_>, config: &ValidatorConfig) -> Check {
    if !config.is_allowed_type(header.commit_type) {
        return Err(ValidationError::UnknownType {
            commit_type: header.commit_type.into(),
            allowed: config.allowed_types.clone(),
        });
    }
    Ok(())
}

/// In a multi-line message the second line must be empty.
pub fn check_blank_separator(message: &CommitMessage<'_>) -> Check {
    match message.body_lines().next() {
        Some(line) if !line.is_empty() => Err(ValidationError::MissingBlankSeparator),
        _ => Ok(()),
    }
}

/// No line after the header may exceed the limit, comments excepted.
pub fn check_body_line_length(message: &CommitMessage<'_>, config: &ValidatorConfig) -> Check {
    let limit = config.other_line_limit;

    match message
        .body_lines()
        .find(|line| line.len() > limit && !line.starts_with(b"#"))
    {
        Some(line) => Err(ValidationError::BodyLineTooLong {
            limit,
            length: line.len(),
        }),
        None => Ok(()),
    }
}

/// The header must not exceed its limit.
pub fn check_header_length(message: &CommitMessage<'_>, config: &ValidatorConfig) -> Check {
    let limit = config.first_line_limit;
    let length = message.header().len();

    if length > limit {
        return Err(ValidationError::HeaderTooLong { limit, length });
    }
    Ok(())
}
