// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::Config;

/// Get the default configuration.
pub fn default_config() -> Config {
    Config::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commitfmt configuration
#
# Every key is optional. Keys left out keep their built-in default.

[rules]
# Body lines longer than this are reported as a warning.
body_max_line_length = 72

# Warn when the title is longer than this. Off unless set.
# title_max_length = 50

# Punctuation accepted in the title, in addition to letters, digits and spaces.
title_allowed_punctuation = ".,:;!?'\"()[]{}/\\-_#@&%+*=$~^|"

# Rules to skip. Available: title-capitalization, title-trailing-punctuation,
# title-invalid-characters, title-invalid-whitespace, title-max-length,
# body-line-length
disabled = []

[ui]
color = true
"#
}
