//! Fix runs: rewrite non-conforming descriptions in place
//!
//! Fixing works on the file text rather than the parsed document so that
//! formatting survives; see `desclint_schema::rewrite`.

use desclint_rules::Rule;
use desclint_schema::{fix_file_in_place, SchemaError};
use std::path::PathBuf;

/// Result of applying a fixer across schema files
#[derive(Debug)]
pub struct FixRun {
    /// The rule that was applied
    pub rule: String,

    /// Number of files processed
    pub files_checked: usize,

    /// Files that were rewritten
    pub modified: Vec<PathBuf>,
}

impl FixRun {
    /// Apply a rule's fixer to every file in the list
    pub fn apply(rule: &dyn Rule, files: &[PathBuf]) -> Result<Self, FixError> {
        if !rule.is_fixable() {
            return Err(FixError::NotFixable(rule.name().to_string()));
        }

        let mut run = Self {
            rule: rule.name().to_string(),
            files_checked: 0,
            modified: Vec::new(),
        };

        for file in files {
            run.files_checked += 1;

            let changed = fix_file_in_place(file, |text| {
                rule.fix(text).unwrap_or_else(|| text.to_string())
            })?;

            if changed {
                run.modified.push(file.clone());
            }
        }

        Ok(run)
    }

    /// Check if any file was rewritten
    pub fn modified_any(&self) -> bool {
        !self.modified.is_empty()
    }
}

/// Fix run errors
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("Rule '{0}' does not support --fix")]
    NotFixable(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use desclint_core::Config;
    use desclint_rules::{rule_by_name, Capital, Symbols};
    use desclint_schema::SchemaDocument;
    use pretty_assertions::assert_eq;

    const NEEDS_FIXING: &str = "\
version: 2
models:
  - name: orders
    description: the revenue per order.
    columns:
      - name: amount
        description: \"order amount.\"
";

    #[test]
    fn fixer_rewrites_and_reports_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.yml");
        std::fs::write(&path, NEEDS_FIXING).unwrap();

        let run = FixRun::apply(&Capital, &[path.clone()]).unwrap();
        assert_eq!(run.modified, vec![path.clone()]);
        assert!(run.modified_any());

        let fixed = std::fs::read_to_string(&path).unwrap();
        assert!(fixed.contains("description: The revenue per order."));
        assert!(fixed.contains("description: \"Order amount.\""));

        // The rewritten file now parses and passes the rule
        let doc = SchemaDocument::from_str(&fixed).unwrap();
        assert!(doc.descriptions().iter().all(|e| {
            use desclint_rules::Rule;
            Capital.check(e.text)
        }));
    }

    #[test]
    fn clean_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.yml");
        std::fs::write(&path, "models:\n  - name: a\n    description: Fine.\n").unwrap();

        let run = FixRun::apply(&Capital, &[path.clone()]).unwrap();
        assert!(!run.modified_any());
        assert_eq!(run.files_checked, 1);
    }

    #[test]
    fn report_only_rule_is_rejected() {
        let err = FixRun::apply(&Symbols::default(), &[]).unwrap_err();
        assert!(matches!(err, FixError::NotFixable(name) if name == "symbols"));
    }

    #[test]
    fn period_fix_roundtrip_through_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.yml");
        std::fs::write(
            &path,
            "models:\n  - name: a\n    description: revenue amount\n",
        )
        .unwrap();

        let config = Config::default();
        let rule = rule_by_name("period", &config).unwrap();

        let run = FixRun::apply(rule.as_ref(), &[path.clone()]).unwrap();
        assert!(run.modified_any());
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("description: revenue amount."));
    }
}
