// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message model.

mod message;

pub use message::{CommitMessage, ParsedHeader};
