// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the effective configuration and the partial overrides that can be
//! loaded from commitfmt.toml or passed on the command line.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::rules::Rule;

/// Punctuation allowed in a title besides letters, digits and spaces.
pub const DEFAULT_TITLE_ALLOWED_PUNCTUATION: &str = ".,:;!?'\"()[]{}/\\-_#@&%+*=$~^|";

/// Default maximum length of a body line.
pub const DEFAULT_BODY_MAX_LINE_LENGTH: usize = 72;

lazy_static! {
    /// Process-wide rule defaults. Never mutated; overrides work on a copy.
    static ref DEFAULT_RULES: RuleConfig = RuleConfig::default();
}

/// The effective configuration for commitfmt.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Config {
    /// Rule parameters.
    pub rules: RuleConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Build the effective configuration from a parsed config file.
    pub fn from_file(file: ConfigFile) -> Result<Self> {
        file.rules.validate()?;
        Ok(Self {
            rules: RuleConfig::defaults().with_overrides(&file.rules),
            ui: file.ui,
        })
    }

    /// Return a copy of this configuration with rule overrides applied.
    pub fn with_rule_overrides(&self, overrides: &RuleOverrides) -> Result<Self> {
        overrides.validate()?;
        Ok(Self {
            rules: self.rules.with_overrides(overrides),
            ui: self.ui.clone(),
        })
    }
}

/// Tunable parameters of the format rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleConfig {
    /// Maximum number of characters in a body line.
    pub body_max_line_length: usize,

    /// Maximum number of characters in the title (rule is off when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_max_length: Option<usize>,

    /// Punctuation characters accepted in the title.
    pub title_allowed_punctuation: String,

    /// Names of rules that are not evaluated.
    pub disabled: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            body_max_line_length: DEFAULT_BODY_MAX_LINE_LENGTH,
            title_max_length: None,
            title_allowed_punctuation: DEFAULT_TITLE_ALLOWED_PUNCTUATION.to_string(),
            disabled: Vec::new(),
        }
    }
}

impl RuleConfig {
    /// The shared default rule configuration.
    pub fn defaults() -> &'static RuleConfig {
        &DEFAULT_RULES
    }

    /// Return a private copy with the given overrides applied.
    ///
    /// Disabled rule names accumulate; every other parameter is replaced
    /// only when the override sets it.
    pub fn with_overrides(&self, overrides: &RuleOverrides) -> RuleConfig {
        let mut config = self.clone();

        if let Some(max) = overrides.body_max_line_length {
            config.body_max_line_length = max;
        }
        if let Some(max) = overrides.title_max_length {
            config.title_max_length = Some(max);
        }
        if let Some(ref punctuation) = overrides.title_allowed_punctuation {
            config.title_allowed_punctuation = punctuation.clone();
        }
        for name in &overrides.disabled {
            if !config.disabled.contains(name) {
                config.disabled.push(name.clone());
            }
        }

        config
    }

    /// Whether the named rule should be evaluated.
    pub fn is_enabled(&self, rule: Rule) -> bool {
        !self.disabled.iter().any(|name| name == rule.name())
    }

    /// Whether a character may appear in a title.
    pub fn is_allowed_title_char(&self, c: char) -> bool {
        c.is_alphanumeric() || c == ' ' || self.title_allowed_punctuation.contains(c)
    }
}

/// Partial rule configuration, as written in a config file or given by flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleOverrides {
    /// Maximum number of characters in a body line.
    pub body_max_line_length: Option<usize>,

    /// Maximum number of characters in the title.
    pub title_max_length: Option<usize>,

    /// Punctuation characters accepted in the title.
    pub title_allowed_punctuation: Option<String>,

    /// Names of rules to skip.
    pub disabled: Vec<String>,
}

impl RuleOverrides {
    /// Reject values no rule can work with.
    pub fn validate(&self) -> Result<()> {
        if self.body_max_line_length == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "rules.body_max_line_length".to_string(),
                message: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.title_max_length == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "rules.title_max_length".to_string(),
                message: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(ref punctuation) = self.title_allowed_punctuation {
            if punctuation.contains('\t') {
                return Err(ConfigError::InvalidValue {
                    key: "rules.title_allowed_punctuation".to_string(),
                    message: "tabs are never allowed in a title".to_string(),
                }
                .into());
            }
        }
        for name in &self.disabled {
            if name.parse::<Rule>().is_err() {
                return Err(ConfigError::InvalidValue {
                    key: "rules.disabled".to_string(),
                    message: format!("unknown rule '{}'", name),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// On-disk configuration file layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    /// Rule overrides on top of the defaults.
    pub rules: RuleOverrides,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
