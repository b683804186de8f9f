//! Check runs: apply one rule to every description in a set of schema files
//!
//! Each file is processed independently. A file that fails to read or parse
//! contributes a file-level diagnostic and the run continues with the rest.

use desclint_core::{Config, Diagnostic, DiagnosticCode, Location, Report, Severity};
use desclint_rules::Rule;
use desclint_schema::{SchemaDocument, SchemaError};
use std::path::{Path, PathBuf};

/// Result of checking a rule across schema files
#[derive(Debug)]
pub struct LintRun {
    /// The rule that was applied
    pub rule: String,

    /// Number of files processed
    pub files_checked: usize,

    /// Number of descriptions the rule was applied to
    pub descriptions_checked: usize,

    /// Diagnostics produced by the run
    pub diagnostics: Vec<Diagnostic>,
}

impl LintRun {
    /// Check a rule against every file in the list
    pub fn check(rule: &dyn Rule, files: &[PathBuf], config: &Config) -> Self {
        let mut run = Self {
            rule: rule.name().to_string(),
            files_checked: 0,
            descriptions_checked: 0,
            diagnostics: Vec::new(),
        };

        for file in files {
            run.check_file(rule, file, config);
        }

        run
    }

    fn check_file(&mut self, rule: &dyn Rule, path: &Path, config: &Config) {
        self.files_checked += 1;

        let doc = match SchemaDocument::from_file(path) {
            Ok(doc) => doc,
            Err(err) => {
                let code = match err {
                    SchemaError::IoError(..) => DiagnosticCode::FileReadError,
                    SchemaError::ParseError(_) => DiagnosticCode::YamlParseError,
                };
                let severity = config.severity.get_severity(code, Severity::Error);
                self.diagnostics.push(
                    Diagnostic::new(code, severity, err.to_string())
                        .with_location(Location::new(path.display().to_string())),
                );
                return;
            }
        };

        for entry in doc.descriptions() {
            if config.is_model_skipped(&entry.node) {
                continue;
            }

            self.descriptions_checked += 1;

            if rule.check(entry.text) {
                continue;
            }

            let severity = config.severity.get_severity(rule.code(), Severity::Error);
            let message = format!(
                "{} failed rule '{}' ({})",
                entry.owner,
                rule.name(),
                rule.summary()
            );

            let mut diag = Diagnostic::new(rule.code(), severity, message)
                .with_location(Location::new(path.display().to_string()));

            if let Some(fixed) = rule.fix(entry.text) {
                diag = diag.with_comparison(fixed, entry.text);
            }

            self.diagnostics.push(diag);
        }
    }

    /// Check if the run produced any error-severity diagnostics
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Number of error-severity diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity diagnostics
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warn)
            .count()
    }

    /// Convert the run into a stable JSON report
    pub fn into_report(self) -> Report {
        let mut report = Report::from_diagnostics(self.rule, self.diagnostics);
        report.summary.files_checked = self.files_checked;
        report.summary.descriptions_checked = self.descriptions_checked;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desclint_rules::{Capital, Period};

    fn write_schema(dir: &tempfile::TempDir, name: &str, yaml: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, yaml).unwrap();
        path
    }

    const MIXED: &str = "\
version: 2
models:
  - name: orders
    description: the revenue per order.
    columns:
      - name: amount
        description: Order amount
      - name: id
";

    #[test]
    fn violations_become_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_schema(&dir, "schema.yml", MIXED);

        let run = LintRun::check(&Capital, &[file], &Config::default());

        assert_eq!(run.files_checked, 1);
        assert_eq!(run.descriptions_checked, 2);
        assert_eq!(run.diagnostics.len(), 1);
        assert!(run.has_errors());

        let diag = &run.diagnostics[0];
        assert_eq!(diag.code, DiagnosticCode::DescriptionNotCapitalized);
        assert!(diag.message.contains("Model 'orders'"));
        assert_eq!(diag.expected.as_deref(), Some("The revenue per order."));
    }

    #[test]
    fn period_rule_flags_only_the_missing_period() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_schema(&dir, "schema.yml", MIXED);

        let run = LintRun::check(&Period, &[file], &Config::default());
        // "Order amount" is missing its period, the model description is fine
        assert_eq!(run.diagnostics.len(), 1);
        assert!(run.diagnostics[0].message.contains("Column 'orders.amount'"));
    }

    #[test]
    fn malformed_yaml_is_reported_and_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_schema(&dir, "schema.yml", "models: [unclosed");
        let good = write_schema(&dir, "schema.yaml", MIXED);

        let run = LintRun::check(&Capital, &[bad, good], &Config::default());

        assert_eq!(run.files_checked, 2);
        assert!(run
            .diagnostics
            .iter()
            .any(|d| d.code == DiagnosticCode::YamlParseError));
        // The good file was still checked
        assert_eq!(run.descriptions_checked, 2);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let run = LintRun::check(
            &Capital,
            &[PathBuf::from("does/not/exist/schema.yml")],
            &Config::default(),
        );
        assert_eq!(run.diagnostics[0].code, DiagnosticCode::FileReadError);
    }

    #[test]
    fn skipped_models_are_not_checked() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_schema(&dir, "schema.yml", MIXED);

        let mut config = Config::default();
        config.skip_models = vec!["orders".to_string()];

        let run = LintRun::check(&Capital, &[file], &config);
        assert_eq!(run.descriptions_checked, 0);
        assert!(run.diagnostics.is_empty());
    }

    #[test]
    fn severity_override_downgrades_to_warning() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_schema(&dir, "schema.yml", MIXED);

        let mut config = Config::default();
        config
            .severity
            .set_override(DiagnosticCode::DescriptionNotCapitalized, Severity::Warn);

        let run = LintRun::check(&Capital, &[file], &config);
        assert!(!run.has_errors());
        assert_eq!(run.warning_count(), 1);
    }

    #[test]
    fn report_carries_run_counts() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_schema(&dir, "schema.yml", MIXED);

        let report = LintRun::check(&Capital, &[file], &Config::default()).into_report();
        assert_eq!(report.rule, "capital");
        assert_eq!(report.summary.files_checked, 1);
        assert_eq!(report.summary.descriptions_checked, 2);
        assert_eq!(report.summary.errors, 1);
    }
}
