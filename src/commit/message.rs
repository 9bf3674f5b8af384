// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and header parsing.
//!
//! Messages are handled as raw bytes: git hands the hook whatever
//! `i18n.commitEncoding` produced, which need not be UTF-8.

use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    /// Regex for the `type(scope): subject` header.
    ///
    /// Unicode mode is off so `.` matches any byte. Greedy on purpose: with
    /// several parenthesised groups on the line the type runs up to the last
    /// `(...): ` that still leaves a match.
    static ref HEADER_REGEX: Regex = Regex::new(r"(?-u)^(.*)\((.*)\): (.*)$").unwrap();
}

/// A raw commit message, viewed as `\n`-separated lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitMessage<'a> {
    raw: &'a [u8],
}

impl<'a> CommitMessage<'a> {
    /// Wrap a raw message.
    pub fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// Whether the message has zero length.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The first line.
    pub fn header(&self) -> &'a [u8] {
        self.raw.split(|&b| b == b'\n').next().unwrap_or_default()
    }

    /// Every line after the header, starting with the separator line. A
    /// trailing `\n` produces a trailing empty line and `\r` is left in place.
    pub fn body_lines(&self) -> impl Iterator<Item = &'a [u8]> {
        self.raw.split(|&b| b == b'\n').skip(1)
    }
}

/// The three captures of a well-formed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedHeader<'a> {
    /// Everything before the scope parentheses.
    pub commit_type: &'a [u8],
    /// Text inside the parentheses, possibly empty.
    pub scope: &'a [u8],
    /// Text after `: `, possibly empty.
    pub subject: &'a [u8],
}

impl<'a> ParsedHeader<'a> {
    /// Parse a header line; `None` when it does not have the
    /// `type(scope): subject` shape.
    pub fn parse(line: &'a [u8]) -> Option<Self> {
        let captures = HEADER_REGEX.captures(line)?;

        Some(Self {
            commit_type: captures.get(1)?.as_bytes(),
            scope: captures.get(2)?.as_bytes(),
            subject: captures.get(3)?.as_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_trailing_empty() {
        let msg = CommitMessage::new(b"feat(core): add\n");
        assert_eq!(msg.header(), b"feat(core): add");
        assert_eq!(msg.body_lines().collect::<Vec<_>>(), vec![b"" as &[u8]]);
    }

    #[test]
    fn test_single_line() {
        let msg = CommitMessage::new(b"feat(core): add");
        assert_eq!(msg.header(), b"feat(core): add");
        assert_eq!(msg.body_lines().count(), 0);
    }

    #[test]
    fn test_carriage_return_is_kept() {
        let msg = CommitMessage::new(b"fix(x): y\r\n\r\nbody");
        assert_eq!(msg.header(), b"fix(x): y\r");
        assert_eq!(msg.body_lines().next(), Some(b"\r" as &[u8]));
    }

    #[test]
    fn test_parse_header() {
        let header = ParsedHeader::parse(b"test(valid-commit-msg): implement tests").unwrap();
        assert_eq!(header.commit_type, b"test");
        assert_eq!(header.scope, b"valid-commit-msg");
        assert_eq!(header.subject, b"implement tests");
    }

    #[test]
    fn test_parse_empty_scope_and_subject() {
        let header = ParsedHeader::parse(b"fix(): ").unwrap();
        assert_eq!(header.commit_type, b"fix");
        assert_eq!(header.scope, b"");
        assert_eq!(header.subject, b"");
    }

    #[test]
    fn test_parse_is_greedy() {
        let header = ParsedHeader::parse(b"feat(a): b(c): d").unwrap();
        assert_eq!(header.commit_type, b"feat(a): b");
        assert_eq!(header.scope, b"c");
        assert_eq!(header.subject, b"d");
    }

    #[test]
    fn test_parse_non_utf8_subject() {
        let header = ParsedHeader::parse(b"fix(a): caf\xe9").unwrap();
        assert_eq!(header.subject, b"caf\xe9");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(ParsedHeader::parse(b"bla").is_none());
        assert!(ParsedHeader::parse(b"feat: no scope").is_none());
        assert!(ParsedHeader::parse(b"feat(core):missing space").is_none());
    }
}
