// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Diagnostics reported by the checker.

use console::{style, Style};
use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks acceptance of the message.
    Error,
    /// Advisory only.
    Warning,
}

impl Severity {
    /// Lowercase label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 1-indexed line and column in the raw message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single format violation.
///
/// Diagnostics are plain values: two are equal when message, severity and
/// position all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    /// Human-readable message.
    pub message: String,
    /// Error or warning.
    pub severity: Severity,
    /// Where the violation starts. `None` means the whole message.
    pub position: Option<Position>,
}

impl Diagnostic {
    /// An error at the given position.
    pub fn error(message: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            position,
        }
    }

    /// A warning at the given position.
    pub fn warning(message: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
            position,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self) -> String {
        let (prefix, severity_style) = match self.severity {
            Severity::Error => (style("✗").red().bold(), Style::new().red()),
            Severity::Warning => (style("⚠").yellow().bold(), Style::new().yellow()),
        };

        match self.position {
            Some(position) => format!(
                "{} {} {}: {}",
                prefix,
                style(position).dim(),
                severity_style.apply_to(self.severity),
                self.message
            ),
            None => format!(
                "{} {}: {}",
                prefix,
                severity_style.apply_to(self.severity),
                self.message
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{}: {}: {}", position, self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// True iff at least one diagnostic is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_position() {
        let diagnostic = Diagnostic::error("Bad title", Some(Position::new(1, 4)));
        assert_eq!(diagnostic.to_string(), "1:4: error: Bad title");
    }

    #[test]
    fn test_display_without_position() {
        let diagnostic = Diagnostic::warning("Whole message", None);
        assert_eq!(diagnostic.to_string(), "warning: Whole message");
    }

    #[test]
    fn test_value_equality() {
        let a = Diagnostic::error("Same", Some(Position::new(1, 1)));
        let b = Diagnostic::error("Same", Some(Position::new(1, 1)));
        assert_eq!(a, b);

        assert_ne!(a, Diagnostic::warning("Same", Some(Position::new(1, 1))));
        assert_ne!(a, Diagnostic::error("Same", Some(Position::new(1, 2))));
        assert_ne!(a, Diagnostic::error("Same", None));
    }

    #[test]
    fn test_has_errors() {
        assert!(!has_errors(&[]));
        assert!(!has_errors(&[Diagnostic::warning("w", None)]));
        assert!(has_errors(&[
            Diagnostic::warning("w", None),
            Diagnostic::error("e", None)
        ]));
    }

    #[test]
    fn test_format_contains_message() {
        let formatted = Diagnostic::error("Test message", Some(Position::new(3, 72))).format();
        assert!(formatted.contains("Test message"));
        assert!(formatted.contains("3:72"));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Diagnostic::warning("w", Some(Position::new(3, 72))))
            .unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["position"]["line"], 3);
        assert_eq!(json["position"]["column"], 72);
    }
}
