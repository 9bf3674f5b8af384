// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rejection report written to stderr by the hook.

use crate::error::ValidationError;
use std::io::{self, Write};

/// Reference for the commit message convention.
pub const GUIDE_URL: &str =
    "https://docs.google.com/document/d/1QrDFcIiPjSLDn3EL15IJygNPiHORgU1_OOAqWjiDU5Y/edit#";

/// Write the reason, a pointer to the guide, and the raw message.
pub fn write_rejection<W: Write>(out: &mut W, error: &ValidationError, raw: &[u8]) -> io::Result<()> {
    write_reason(out, error)?;
    writeln!(out)?;
    writeln!(out, "Refer to commit guide: {}", GUIDE_URL)?;
    write!(out, "\nYour message:\n\n")?;
    out.write_all(raw)?;
    writeln!(out)?;
    out.flush()
}

/// Write the reason with quoted message text copied byte for byte, so a
/// non-UTF-8 subject reads the same as in the echoed message.
fn write_reason<W: Write>(out: &mut W, error: &ValidationError) -> io::Result<()> {
    match error {
        ValidationError::CapitalizedSubject { subject } => {
            out.write_all(b"Commit subject '")?;
            out.write_all(subject.as_bytes())?;
            out.write_all(b"' must not have a capital first letter!")
        }
        ValidationError::TrailingDot { subject } => {
            out.write_all(b"Commit subject '")?;
            out.write_all(subject.as_bytes())?;
            out.write_all(b"' must not end with a dot (.)!")
        }
        ValidationError::UnknownType {
            commit_type,
            allowed,
        } => {
            out.write_all(b"Commit type '")?;
            out.write_all(commit_type.as_bytes())?;
            write!(out, "' not in valid ones: {}!", allowed.join(", "))
        }
        other => write!(out, "{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(error: &ValidationError) -> Vec<u8> {
        let mut out = Vec::new();
        write_reason(&mut out, error).unwrap();
        out
    }

    #[test]
    fn test_rejection_layout() {
        let mut out = Vec::new();
        write_rejection(&mut out, &ValidationError::MalformedHeader, b"bla").unwrap();

        let expected = format!(
            "First commit message line (header) does not follow format: type(scope): message\n\
             Refer to commit guide: {}\n\
             \n\
             Your message:\n\
             \n\
             bla\n",
            GUIDE_URL
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_raw_bytes_are_echoed() {
        let mut out = Vec::new();
        write_rejection(&mut out, &ValidationError::EmptyMessage, b"\xff\xfe").unwrap();
        assert!(out.ends_with(b"\xff\xfe\n"));
    }

    #[test]
    fn test_reason_matches_display_for_utf8() {
        let errors = [
            ValidationError::CapitalizedSubject {
                subject: "Implement tests".into(),
            },
            ValidationError::TrailingDot {
                subject: "implement tests.".into(),
            },
            ValidationError::UnknownType {
                commit_type: "foo".into(),
                allowed: vec!["feat".to_string(), "fix".to_string()],
            },
            ValidationError::MissingBlankSeparator,
            ValidationError::HeaderTooLong {
                limit: 70,
                length: 93,
            },
        ];

        for error in &errors {
            assert_eq!(reason(error), error.to_string().into_bytes());
        }
    }

    #[test]
    fn test_reason_quotes_raw_subject() {
        let error = ValidationError::TrailingDot {
            subject: (b"caf\xe9." as &[u8]).into(),
        };
        assert_eq!(
            reason(&error),
            b"Commit subject 'caf\xe9.' must not end with a dot (.)!".to_vec()
        );
    }
}
