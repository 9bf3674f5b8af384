// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message validation.

mod builtin;
mod engine;
mod validator;

pub use builtin::*;
pub use engine::CommitMessageValidator;
pub use validator::ValidationResult;
