// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for validate-commit-msg.
//!
//! The rule set itself is fixed; configuration only supplies its
//! parameters (accepted type tags and the two line-length limits).

pub mod default;
mod loader;
mod schema;

pub use default::example_config;
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
};
pub use schema::*;
