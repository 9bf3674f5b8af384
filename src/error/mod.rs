// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for validate-commit-msg.
//!
//! Rejections of a commit message are ordinary values ([`ValidationError`]);
//! everything that can go wrong around them (reading the message file,
//! loading configuration, touching git hooks) is a [`CommitMsgError`].

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for validate-commit-msg operations.
#[derive(Error, Debug)]
pub enum CommitMsgError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // The message was rejected
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // The message file could not be read
    #[error("open {}: {source}", .path.display())]
    ReadMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Reasons a commit message is rejected.
///
/// Exactly one of these is produced per validation, by the first check
/// that fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("First commit message line (header) does not follow format: type(scope): message")]
    MalformedHeader,

    #[error("Commit subject '{subject}' must not have a capital first letter!")]
    CapitalizedSubject { subject: RawText },

    #[error("Commit subject '{subject}' must not end with a dot (.)!")]
    TrailingDot { subject: RawText },

    #[error("Commit type '{commit_type}' not in valid ones: {}!", .allowed.join(", "))]
    UnknownType {
        commit_type: RawText,
        allowed: Vec<String>,
    },

    #[error("Second commit message line must be empty!")]
    MissingBlankSeparator,

    #[error("Other lines should not be longer than {limit} characters! It has {length} characters.")]
    BodyLineTooLong { limit: usize, length: usize },

    #[error("First line should not be longer than {limit} characters! It has {length} characters.")]
    HeaderTooLong { limit: usize, length: usize },
}

impl ValidationError {
    /// Stable identifier for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyMessage => "empty-message",
            ValidationError::MalformedHeader => "malformed-header",
            ValidationError::CapitalizedSubject { .. } => "subject-capitalized",
            ValidationError::TrailingDot { .. } => "subject-trailing-dot",
            ValidationError::UnknownType { .. } => "type-unknown",
            ValidationError::MissingBlankSeparator => "missing-blank-line",
            ValidationError::BodyLineTooLong { .. } => "body-line-too-long",
            ValidationError::HeaderTooLong { .. } => "header-too-long",
        }
    }
}

/// Message text quoted in a [`ValidationError`], kept byte for byte.
///
/// `Display` decodes it lossily; the hook report writes the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText(Vec<u8>);

impl RawText {
    /// The original bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl From<&[u8]> for RawText {
    fn from(bytes: &[u8]) -> Self {
        RawText(bytes.to_vec())
    }
}

impl From<&str> for RawText {
    fn from(text: &str) -> Self {
        RawText(text.as_bytes().to_vec())
    }
}

impl PartialEq<str> for RawText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for RawText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {} (use --force to overwrite)", .path.display())]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        if err.code() == git2::ErrorCode::NotFound {
            GitError::NotARepository
        } else {
            GitError::OpenFailed {
                message: err.message().to_string(),
            }
        }
    }
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Backup already exists: {} (move it away before replacing the hook)", .path.display())]
    BackupExists { path: PathBuf },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for validate-commit-msg operations.
pub type Result<T> = std::result::Result<T, CommitMsgError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CommitMsgError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
