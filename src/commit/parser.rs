// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structural split of raw message text into title and body.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Release tags such as `v1.2.3`, `1.0.0-alpha.1` or `v2.0.0+build.5`.
    static ref SEMVER_TAG_REGEX: Regex = Regex::new(
        r"^v?(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$"
    ).unwrap();
}

/// Shape of a raw message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Structure<'a> {
    /// A title line, optionally followed by one blank line and a body.
    Parts { title: &'a str, body: Option<&'a str> },
    /// The message cannot be split; the reason is only used for logging.
    Malformed(&'static str),
}

/// Split raw text into title and body.
///
/// The title is the first line without its terminator. Anything after it
/// must be whitespace only, or a single blank line followed by the body.
pub(crate) fn split(raw: &str) -> Structure<'_> {
    if raw.trim().is_empty() {
        return Structure::Malformed("message is empty");
    }

    let (title_line, rest) = split_first_line(raw);
    if is_blank(title_line) {
        return Structure::Malformed("message starts with a blank line");
    }
    let title = strip_line_ending(title_line);

    if rest.trim().is_empty() {
        return Structure::Parts { title, body: None };
    }

    let (separator, body) = split_first_line(rest);
    if !is_blank(separator) {
        return Structure::Malformed("title is not followed by a blank line");
    }
    if is_blank(split_first_line(body).0) {
        return Structure::Malformed("body starts with a blank line");
    }

    Structure::Parts {
        title,
        body: Some(body),
    }
}

/// Whether the whole message is a semantic-version release tag.
pub(crate) fn is_release_tag(raw: &str) -> bool {
    SEMVER_TAG_REGEX.is_match(raw.trim())
}

fn split_first_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(index) => text.split_at(index + 1),
        None => (text, ""),
    }
}

fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

/// A line holding nothing but whitespace and its terminator.
fn is_blank(line: &str) -> bool {
    strip_line_ending(line).trim().is_empty()
}
