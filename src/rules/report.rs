// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Check reports for terminal and JSON output.

use crate::commit::CommitMessage;
use console::style;

/// Result of checking one commit message.
#[derive(Debug, Clone)]
pub struct Report {
    /// Where the message came from: a commit SHA or a file path.
    pub source: Option<String>,
    /// The checked message, carrying its diagnostics.
    pub message: CommitMessage,
}

impl Report {
    /// Create a new report.
    pub fn new(source: Option<String>, message: CommitMessage) -> Self {
        Self { source, message }
    }

    /// Check if the message passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.message.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.message
            .diagnostics()
            .iter()
            .filter(|d| d.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.message.diagnostics().len() - self.error_count()
    }

    /// Print the text report to stdout.
    pub fn print(&self) {
        print!("{}", self.render_text());
    }

    /// Render in text format.
    pub fn render_text(&self) -> String {
        let mut output = String::new();

        if let Some(ref source) = self.source {
            let status = if self.is_valid() {
                style("✓").green().bold()
            } else {
                style("✗").red().bold()
            };
            let label = if looks_like_sha(source) {
                &source[..7]
            } else {
                source.as_str()
            };
            output.push_str(&format!(
                "{} {} {}\n",
                status,
                style(label).cyan(),
                self.message.title()
            ));
        }

        for diagnostic in self.message.diagnostics() {
            output.push_str(&format!("  {}\n", diagnostic.format()));
        }

        output.push_str(&format!("  {}\n", style(self.summary()).dim()));
        output
    }

    /// Render in JSON format.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "source": self.source,
            "title": self.message.title(),
            "diagnostics": self.message.diagnostics(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors == 0 {
            if warnings == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", warnings)
            }
        } else {
            format!("Invalid ({} errors, {} warnings)", errors, warnings)
        }
    }
}

fn looks_like_sha(source: &str) -> bool {
    source.len() == 40 && source.chars().all(|c| c.is_ascii_hexdigit())
}
