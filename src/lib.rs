// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! validate-commit-msg - commit-msg hook for conventional headers
//!
//! Checks that a commit message starts with a `type(scope): subject`
//! header, that the subject is lowercase and has no trailing dot, that the
//! type is one of a known set, that a blank line separates the header from
//! the body, and that lines stay within their length limits.
//!
//! # Example
//!
//! ```
//! use validate_commit_msg::rules::CommitMessageValidator;
//!
//! let result = CommitMessageValidator::new("fix(core): Handle eof").validate();
//! assert_eq!(
//!     result.error().unwrap().to_string(),
//!     "Commit subject 'Handle eof' must not have a capital first letter!"
//! );
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::{CommitMsgConfig, ValidatorConfig};
pub use error::{CommitMsgError, Result, ValidationError};
pub use rules::{CommitMessageValidator, ValidationResult};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of validate-commit-msg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, short_sha(sha), date)
            }
            (Some(sha), None) => format!("{} ({})", VERSION, short_sha(sha)),
            _ => VERSION.to_string(),
        }
    }

    fn short_sha(sha: &str) -> &str {
        sha.get(..7).unwrap_or(sha)
    }

}
