// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CommitMsgError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CommitMsgConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &["commit-msg.toml", ".commit-msg.toml", ".config/commit-msg.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = find_in(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = find_in(&home) {
            return Some(found);
        }
    }

    let xdg = dirs::config_dir()?
        .join("validate-commit-msg")
        .join("config.toml");
    xdg.exists().then_some(xdg)
}

fn find_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CommitMsgConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CommitMsgConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CommitMsgConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CommitMsgError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CommitMsgError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and check configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CommitMsgConfig> {
    let config: CommitMsgConfig = toml::from_str(content).map_err(|e| {
        CommitMsgError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    config.rules.check()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.rules.first_line_limit, 70);
        assert_eq!(config.rules.other_line_limit, 100);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
allowed_types = ["feat", "fix", "perf"]
first_line_limit = 50
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.allowed_types, vec!["feat", "fix", "perf"]);
        assert_eq!(config.rules.first_line_limit, 50);
        assert_eq!(config.rules.other_line_limit, 100);
    }

    #[test]
    fn test_parse_rejects_empty_types() {
        let err = parse_config("[rules]\nallowed_types = []\n").unwrap_err();
        assert!(matches!(
            err,
            CommitMsgError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[rules\n").unwrap_err();
        assert!(matches!(
            err,
            CommitMsgError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(
            err,
            CommitMsgError::Config(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".commit-msg.toml"), "[rules]\nfirst_line_limit = 60\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".commit-msg.toml"));

        let config = load_config_from(&found).unwrap();
        assert_eq!(config.rules.first_line_limit, 60);
    }

    #[test]
    fn test_find_prefers_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("commit-msg.toml"), "").unwrap();
        fs::write(dir.path().join(".commit-msg.toml"), "").unwrap();

        let found = find_config_file_from(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("commit-msg.toml"));
    }
}
