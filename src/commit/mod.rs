// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing and input handling.

mod input;
mod message;
mod parser;

pub use input::{read_message_file, read_stdin, strip_comments};
pub use message::{CommitMessage, FORMAT_DOCS_URL};
