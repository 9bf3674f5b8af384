// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example configuration written by `init`.

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# validate-commit-msg configuration
#
# Headers must read `type(scope): subject`. The checks themselves are
# fixed; this file only tunes their parameters.

[rules]
# Accepted type tags (case-sensitive).
allowed_types = ["feat", "fix", "docs", "style", "refactor", "test", "chore"]

# Maximum header length.
first_line_limit = 70

# Maximum length of every other line. Lines starting with '#' are exempt.
other_line_limit = 100
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitMsgConfig;

    #[test]
    fn test_default_config() {
        let config = CommitMsgConfig::default();
        assert_eq!(config.rules.first_line_limit, 70);
        assert_eq!(config.rules.allowed_types.len(), 7);
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config: CommitMsgConfig =
            toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(config, CommitMsgConfig::default());
    }
}
