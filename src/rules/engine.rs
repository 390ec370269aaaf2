// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::path::Path;

use crate::commit::{self, CommitMessage};
use crate::config::RuleConfig;
use crate::error::Result;
use crate::git;

use super::builtin::ACTIVE_RULES;
use super::diagnostic::Diagnostic;
use super::report::Report;

/// Run every enabled active rule against a parsed message.
///
/// Rules run in a fixed order and never see each other's results.
pub fn evaluate(message: &CommitMessage, config: &RuleConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for rule in ACTIVE_RULES {
        if !config.is_enabled(*rule) {
            tracing::trace!(rule = rule.name(), "Rule disabled, skipping");
            continue;
        }
        if let Some(diagnostic) = rule.check(message, config) {
            tracing::debug!(rule = rule.name(), "{}", diagnostic);
            diagnostics.push(diagnostic);
        }
    }

    diagnostics
}

/// Rule engine for validating commit messages from various sources.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Validate a commit message string.
    pub fn validate_string(&self, raw: &str) -> CommitMessage {
        CommitMessage::parse_with_config(raw, &self.config)
    }

    /// Validate a message read from a file, or stdin for `-`.
    pub fn check_file(&self, path: &Path, strip_comments: bool) -> Result<Report> {
        let raw = if path == Path::new("-") {
            commit::read_stdin()?
        } else {
            commit::read_message_file(path)?
        };
        let raw = if strip_comments {
            commit::strip_comments(&raw)
        } else {
            raw
        };

        Ok(Report::new(
            Some(path.display().to_string()),
            self.validate_string(&raw),
        ))
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<Report> {
        let (oid, message) = git::get_commit_message(reference)?;
        Ok(Report::new(Some(oid), self.validate_string(&message)))
    }

    /// Check a range of commits.
    pub fn check_range(&self, range: &str) -> Result<Vec<Report>> {
        let commits = git::get_commit_range(range)?;
        tracing::debug!("Checking {} commits in {}", commits.len(), range);

        Ok(commits
            .into_iter()
            .map(|(oid, message)| Report::new(Some(oid), self.validate_string(&message)))
            .collect())
    }
}
