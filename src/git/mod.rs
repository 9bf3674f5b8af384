// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration, used to locate the hooks directory.

mod repo;

pub use repo::{open_repo, Repository};
