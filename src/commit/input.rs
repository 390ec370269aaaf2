// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading raw commit messages.

use std::io::Read;
use std::path::Path;

use crate::error::{Result, ResultExt};

/// Git's scissors line. Everything below it is dropped from the message.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Read a message file verbatim, keeping every line terminator.
pub fn read_message_file(path: &Path) -> Result<String> {
    tracing::debug!("Reading commit message from {:?}", path);
    std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
}

/// Read a message from stdin.
pub fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

/// Drop the lines git itself removes before committing.
///
/// Lines starting with `#` are removed, as is everything from the scissors
/// line on. Other lines keep their terminators.
pub fn strip_comments(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());

    for line in raw.split_inclusive('\n') {
        if line.trim_end() == SCISSORS {
            break;
        }
        if !line.starts_with('#') {
            stripped.push_str(line);
        }
    }

    stripped
}
