// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Type tags accepted when no configuration says otherwise.
pub const DEFAULT_TYPES: &[&str] = &["feat", "fix", "docs", "style", "refactor", "test", "chore"];

/// Default limit for the header line.
pub const DEFAULT_FIRST_LINE_LIMIT: usize = 70;

/// Default limit for every line after the header.
pub const DEFAULT_OTHER_LINE_LIMIT: usize = 100;

/// The configuration file layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CommitMsgConfig {
    /// Rule parameters.
    pub rules: ValidatorConfig,
}

impl CommitMsgConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Parameters of the validation rules.
///
/// Never mutated once a validator has been built from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Accepted type tags, in the order they are reported.
    pub allowed_types: Vec<String>,

    /// Maximum length of the header line, in bytes.
    pub first_line_limit: usize,

    /// Maximum length of any other non-comment line, in bytes.
    pub other_line_limit: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            first_line_limit: DEFAULT_FIRST_LINE_LIMIT,
            other_line_limit: DEFAULT_OTHER_LINE_LIMIT,
        }
    }
}

impl ValidatorConfig {
    /// Replace the accepted type tags.
    pub fn with_allowed_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the header line limit.
    pub fn with_first_line_limit(mut self, limit: usize) -> Self {
        self.first_line_limit = limit;
        self
    }

    /// Replace the limit for lines after the header.
    pub fn with_other_line_limit(mut self, limit: usize) -> Self {
        self.other_line_limit = limit;
        self
    }

    /// Whether `commit_type` is one of the accepted tags (case-sensitive).
    pub fn is_allowed_type(&self, commit_type: impl AsRef<[u8]>) -> bool {
        let commit_type = commit_type.as_ref();
        self.allowed_types
            .iter()
            .any(|t| t.as_bytes() == commit_type)
    }

    /// Reject values that would make every message fail.
    pub fn check(&self) -> std::result::Result<(), ConfigError> {
        if self.allowed_types.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "rules.allowed_types".to_string(),
                message: "at least one type is required".to_string(),
            });
        }
        if self.first_line_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rules.first_line_limit".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.other_line_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rules.other_line_limit".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(
            config.allowed_types,
            vec!["feat", "fix", "docs", "style", "refactor", "test", "chore"]
        );
        assert_eq!(config.first_line_limit, 70);
        assert_eq!(config.other_line_limit, 100);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = ValidatorConfig::default()
            .with_allowed_types(["feat", "perf"])
            .with_first_line_limit(50)
            .with_other_line_limit(72);

        assert!(config.is_allowed_type("perf"));
        assert!(!config.is_allowed_type("fix"));
        assert_eq!(config.first_line_limit, 50);
        assert_eq!(config.other_line_limit, 72);
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        let config = ValidatorConfig::default();
        assert!(config.is_allowed_type("feat"));
        assert!(!config.is_allowed_type("Feat"));
        assert!(!config.is_allowed_type("feat "));
        assert!(!config.is_allowed_type(b"f\xe9at"));
    }

    #[test]
    fn test_check_rejects_empty_types() {
        let config = ValidatorConfig::default().with_allowed_types(Vec::<String>::new());
        assert!(matches!(
            config.check(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "rules.allowed_types"
        ));
    }

    #[test]
    fn test_check_rejects_zero_limit() {
        let config = ValidatorConfig::default().with_other_line_limit(0);
        assert!(config.check().is_err());
    }
}
