// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitfmt - Commit message format checker
//!
//! Checks a commit message against a fixed style policy and reports every
//! violation with a severity and a source position.
//!
//! Checking happens in two stages. The structural parser splits the raw
//! text into a title and an optional body, separated by exactly one blank
//! line; a message that cannot be split gets a single error and nothing
//! else. The rule engine then runs a fixed, ordered list of rules over the
//! title and body. Release tags such as `v1.2.3` skip the rules entirely.
//!
//! # Example
//!
//! ```
//! let message = commitfmt::parse("Commit message ending with a period.");
//!
//! assert!(message.has_errors());
//! assert_eq!(message.diagnostics().len(), 1);
//! assert_eq!(
//!     message.diagnostics()[0].to_string(),
//!     "1:36: error: Commit message should not end with a period or whitespace"
//! );
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

use std::path::Path;

// Re-exports for convenience
pub use commit::CommitMessage;
pub use config::{Config, RuleConfig, RuleOverrides};
pub use error::{CfError, Result};
pub use rules::{Diagnostic, Position, Severity};

/// Parse and check a message against the default rules.
pub fn parse(raw: &str) -> CommitMessage {
    CommitMessage::parse(raw)
}

/// Parse and check a message against the given rules.
pub fn parse_with_config(raw: &str, config: &RuleConfig) -> CommitMessage {
    CommitMessage::parse_with_config(raw, config)
}

/// Read a message file verbatim and check it against the default rules.
pub fn parse_from_file(path: impl AsRef<Path>) -> Result<CommitMessage> {
    let raw = commit::read_message_file(path.as_ref())?;
    Ok(parse(&raw))
}

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitfmt.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
