// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitfmt.
//!
//! Rule defaults live in one process-wide value that is never mutated.
//! Config files and command-line flags are applied as overrides, each
//! producing a private copy of the rule configuration.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config, CONFIG_FILES};
pub use schema::*;
