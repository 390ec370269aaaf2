// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Rules are a closed set of variants evaluated in a fixed order. Each one
//! inspects the parsed title and body and reports at most one diagnostic.

mod builtin;
mod diagnostic;
mod engine;
mod report;

pub use builtin::{Rule, ACTIVE_RULES, BODY_FIRST_LINE};
pub use diagnostic::{has_errors, Diagnostic, Position, Severity};
pub use engine::{evaluate, RuleEngine};
pub use report::Report;
