//! Configuration schema (desclint.toml)

use crate::diagnostic::{DiagnosticCode, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Symbol characters that fail the `symbols` rule by default.
pub const DEFAULT_DISALLOWED_SYMBOLS: &str = "€$£¥%#@&*^=+<>|~";

/// Leading words the `article` rule accepts by default.
pub const DEFAULT_ALLOWED_ARTICLES: &[&str] = &["the", "a", "an"];

/// Settings for the `article` rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleConfig {
    /// Allowed leading words, compared case-insensitively
    pub allowed: Vec<String>,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            allowed: DEFAULT_ALLOWED_ARTICLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Settings for the `symbols` rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolConfig {
    /// Characters that are not allowed to appear in a description
    pub disallowed: String,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            disallowed: DEFAULT_DISALLOWED_SYMBOLS.to_string(),
        }
    }
}

/// Severity threshold overrides for specific diagnostic codes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeverityThreshold {
    /// Map of diagnostic code to severity override
    #[serde(default)]
    pub overrides: HashMap<String, Severity>,
}

impl SeverityThreshold {
    /// Get severity for a diagnostic code, or default
    pub fn get_severity(&self, code: DiagnosticCode, default: Severity) -> Severity {
        self.overrides.get(code.as_str()).copied().unwrap_or(default)
    }

    /// Set severity override for a code
    pub fn set_override(&mut self, code: DiagnosticCode, severity: Severity) {
        self.overrides.insert(code.as_str().to_string(), severity);
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Skip checks for these model/source names (glob patterns)
    #[serde(default)]
    pub skip_models: Vec<String>,

    /// Settings for the `article` rule
    #[serde(default)]
    pub article: ArticleConfig,

    /// Settings for the `symbols` rule
    #[serde(default)]
    pub symbols: SymbolConfig,

    /// Severity thresholds
    #[serde(default)]
    pub severity: SeverityThreshold,

    /// Project root path (for resolving relative paths)
    #[serde(skip)]
    pub project_root: std::path::PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_models: Vec::new(),
            article: ArticleConfig::default(),
            symbols: SymbolConfig::default(),
            severity: SeverityThreshold::default(),
            project_root: std::env::current_dir().unwrap_or_default(),
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let mut config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Set project root to parent of config file
        if let Some(parent) = path.parent() {
            config.project_root = parent.to_path_buf();
        }

        Ok(config)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Check if a model/source name should be skipped
    pub fn is_model_skipped(&self, model: &str) -> bool {
        self.skip_models.iter().any(|pattern| {
            if pattern.contains('*') {
                glob_match(pattern, model)
            } else {
                pattern == model
            }
        })
    }
}

/// Simple glob matching (supports * and **)
fn glob_match(pattern: &str, text: &str) -> bool {
    // Very simple implementation - just handle basic * wildcard
    if pattern == "*" || pattern == "**" {
        return true;
    }

    if let Some(star_pos) = pattern.find('*') {
        let prefix = &pattern[..star_pos];
        let suffix = &pattern[star_pos + 1..];

        text.starts_with(prefix) && text.ends_with(suffix)
    } else {
        pattern == text
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
