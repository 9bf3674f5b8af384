// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for validate-commit-msg.
//!
//! This module handles command-line argument parsing and command dispatch.

pub mod args;
mod dispatch;
pub mod report;

pub use args::{Cli, Commands};
pub use dispatch::run;
