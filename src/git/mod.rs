// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages out of a repository so they can be checked.

mod repo;

pub use repo::{get_commit_message, get_commit_range, open_repo, Repository};
