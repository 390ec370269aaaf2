// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::config::RuleConfig;
use crate::rules::{self, Diagnostic};

use super::parser::{self, Structure};

/// Where the expected message format is documented.
pub const FORMAT_DOCS_URL: &str = "https://cbea.ms/git-commit/";

/// A parsed commit message and the diagnostics found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
    title: String,
    body: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl CommitMessage {
    /// Parse and check a message against the default rules.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_config(raw, RuleConfig::defaults())
    }

    /// Parse and check a message against the given rules.
    ///
    /// Never fails: structural problems and rule violations both end up
    /// in [`CommitMessage::diagnostics`].
    pub fn parse_with_config(raw: &str, config: &RuleConfig) -> Self {
        let mut message = match parser::split(raw) {
            Structure::Parts { title, body } => Self::from_parts(raw, title, body),
            Structure::Malformed(reason) => {
                tracing::debug!("Structural check failed: {}", reason);
                let mut message = Self::from_parts(raw, "", None);
                message.diagnostics.push(Self::structural_error());
                return message;
            }
        };

        if parser::is_release_tag(raw) {
            tracing::debug!("Release tag, skipping rules");
            return message;
        }

        let diagnostics = rules::evaluate(&message, config);
        message.diagnostics.extend(diagnostics);
        message
    }

    /// Build an unchecked message from already split parts.
    pub(crate) fn from_parts(raw: &str, title: &str, body: Option<&str>) -> Self {
        Self {
            raw: raw.to_string(),
            title: title.to_string(),
            body: body.map(str::to_string),
            diagnostics: Vec::new(),
        }
    }

    /// The single diagnostic reported for a message that cannot be split.
    pub fn structural_error() -> Diagnostic {
        Diagnostic::error(
            format!(
                "Commit message is not in the correct format, see {}",
                FORMAT_DOCS_URL
            ),
            None,
        )
    }

    /// The original text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The first line, without its terminator. Empty when malformed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Everything after the blank separator line.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Diagnostics in detection order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        rules::has_errors(&self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Position, Severity};

    #[test]
    fn test_parse_valid() {
        let msg = CommitMessage::parse("Test commit\n");
        assert_eq!(msg.title(), "Test commit");
        assert_eq!(msg.body(), None);
        assert!(msg.diagnostics().is_empty());
        assert!(!msg.has_errors());
    }

    #[test]
    fn test_parse_with_body() {
        let msg = CommitMessage::parse("Fix bug\n\nThis is the body\n");
        assert_eq!(msg.title(), "Fix bug");
        assert_eq!(msg.body(), Some("This is the body\n"));
        assert_eq!(msg.raw(), "Fix bug\n\nThis is the body\n");
    }

    #[test]
    fn test_structural_failure_short_circuits() {
        let msg = CommitMessage::parse("\nlowercase title.");
        assert_eq!(msg.diagnostics(), &[CommitMessage::structural_error()]);
        assert!(msg.has_errors());
        assert_eq!(msg.diagnostics()[0].position, None);
    }

    #[test]
    fn test_release_tag_skips_rules() {
        let msg = CommitMessage::parse("v1.0.0-alpha");
        assert!(msg.diagnostics().is_empty());
        assert_eq!(msg.title(), "v1.0.0-alpha");
    }

    #[test]
    fn test_independent_title_rules() {
        let msg = CommitMessage::parse("lowercase title.");
        assert_eq!(
            msg.diagnostics(),
            &[
                Diagnostic::error(
                    "Commit message should start with a capitalized letter",
                    Some(Position::new(1, 1))
                ),
                Diagnostic::error(
                    "Commit message should not end with a period or whitespace",
                    Some(Position::new(1, 16))
                ),
            ]
        );
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let body = "z".repeat(100);
        let msg = CommitMessage::parse(&format!("Title\n\n{}\n", body));
        assert_eq!(msg.diagnostics().len(), 1);
        assert_eq!(msg.diagnostics()[0].severity, Severity::Warning);
        assert!(!msg.has_errors());
    }

    #[test]
    fn test_parse_with_custom_config() {
        let config = RuleConfig::defaults().with_overrides(&crate::config::RuleOverrides {
            body_max_line_length: Some(120),
            ..Default::default()
        });
        let body = "z".repeat(100);
        let msg = CommitMessage::parse_with_config(&format!("Title\n\n{}\n", body), &config);
        assert!(msg.diagnostics().is_empty());
    }
}
