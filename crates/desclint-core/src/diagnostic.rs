//! Diagnostic codes and violation reporting
//!
//! IMPORTANT: Diagnostic codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};

/// Diagnostic code registry (v1)
///
/// These codes are STABLE and VERSIONED.
/// Do NOT rename or remove codes - only add new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    // Description conventions (1xxx)
    /// Description does not start with an uppercase letter
    DescriptionNotCapitalized,

    /// Description contains a run of two or more spaces
    DescriptionDoubleSpaces,

    /// Description does not end with a period
    DescriptionMissingPeriod,

    /// Description contains a disallowed symbol character
    DescriptionDisallowedSymbol,

    /// Description does not start with an allowed leading article
    DescriptionLeadingArticle,

    // File-level issues (2xxx)
    /// Schema file could not be parsed as YAML
    YamlParseError,

    /// Schema file could not be read from disk
    FileReadError,

    // General (9xxx)
    /// General informational message
    Info,

    /// General warning message
    Warning,
}

impl DiagnosticCode {
    /// Get the diagnostic code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DescriptionNotCapitalized => "DESCRIPTION_NOT_CAPITALIZED",
            Self::DescriptionDoubleSpaces => "DESCRIPTION_DOUBLE_SPACES",
            Self::DescriptionMissingPeriod => "DESCRIPTION_MISSING_PERIOD",
            Self::DescriptionDisallowedSymbol => "DESCRIPTION_DISALLOWED_SYMBOL",
            Self::DescriptionLeadingArticle => "DESCRIPTION_LEADING_ARTICLE",
            Self::YamlParseError => "YAML_PARSE_ERROR",
            Self::FileReadError => "FILE_READ_ERROR",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,

    /// Warning - should be reviewed but not blocking
    Warn,

    /// Error - blocking issue that should fail the hook
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source location in a schema file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root
    pub file: String,

    /// Optional line number (1-indexed)
    pub line: Option<usize>,
}

impl Location {
    /// Create a new location with just a file path
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }

    /// Create a location with file and line number
    pub fn with_line(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }
}

/// A diagnostic message with structured metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable diagnostic code
    pub code: DiagnosticCode,

    /// Severity level
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Source location (best-effort)
    pub location: Option<Location>,

    /// Conforming text (for fixable rules, a fix preview)
    pub expected: Option<String>,

    /// Actual description text as written
    pub actual: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with minimal fields
    pub fn new(code: DiagnosticCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            location: None,
            expected: None,
            actual: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set expected/actual values
    pub fn with_comparison(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_code_stability() {
        // Ensure codes are stable strings
        assert_eq!(
            DiagnosticCode::DescriptionNotCapitalized.as_str(),
            "DESCRIPTION_NOT_CAPITALIZED"
        );
        assert_eq!(
            DiagnosticCode::DescriptionMissingPeriod.as_str(),
            "DESCRIPTION_MISSING_PERIOD"
        );
    }

    #[test]
    fn diagnostic_serialization() {
        let diag = Diagnostic::new(
            DiagnosticCode::DescriptionMissingPeriod,
            Severity::Error,
            "Column 'revenue' description does not end with a period",
        )
        .with_location(Location::new("models/finance/schema.yml"));

        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("DESCRIPTION_MISSING_PERIOD"));
        assert!(json.contains("error"));
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warn);
        assert!(Severity::Warn > Severity::Info);
    }
}
