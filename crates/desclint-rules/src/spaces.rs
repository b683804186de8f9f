//! The `spaces` rule: no runs of consecutive spaces inside a line
//!
//! Leading indentation is allowed (multi-line block scalars are indented),
//! so only runs after the first non-whitespace character count.

use crate::Rule;
use desclint_core::DiagnosticCode;
use regex::Regex;

/// Forbids runs of two or more spaces/tabs within a line
pub struct Spaces {
    run: Regex,
}

impl Spaces {
    /// Create the rule with its compiled whitespace-run pattern
    pub fn new() -> Self {
        Self {
            run: Regex::new(r"[ \t]{2,}").unwrap(),
        }
    }

    /// Split a line into its leading indentation and the rest
    fn split_indent(line: &str) -> (&str, &str) {
        let rest = line.trim_start_matches([' ', '\t']);
        let indent = &line[..line.len() - rest.len()];
        (indent, rest)
    }
}

impl Default for Spaces {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Spaces {
    fn name(&self) -> &'static str {
        "spaces"
    }

    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::DescriptionDoubleSpaces
    }

    fn summary(&self) -> &'static str {
        "description contains no double spaces"
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn check(&self, text: &str) -> bool {
        text.split('\n').all(|line| {
            let (_, rest) = Self::split_indent(line);
            !self.run.is_match(rest)
        })
    }

    fn fix(&self, text: &str) -> Option<String> {
        let fixed = text
            .split('\n')
            .map(|line| {
                let (indent, rest) = Self::split_indent(line);
                format!("{}{}", indent, self.run.replace_all(rest, " "))
            })
            .collect::<Vec<_>>()
            .join("\n");

        Some(fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_spaces_pass() {
        assert!(Spaces::new().check("This is a test"));
        assert!(Spaces::new().check(""));
    }

    #[test]
    fn double_spaces_fail() {
        assert!(!Spaces::new().check("This  is   a   test"));
        assert!(!Spaces::new().check("tab\t\tseparated"));
    }

    #[test]
    fn indentation_is_allowed() {
        assert!(Spaces::new().check("First line\n  indented continuation"));
    }

    #[test]
    fn fix_collapses_runs() {
        assert_eq!(Spaces::new().fix("This  is   a   test").unwrap(), "This is a test");
    }

    #[test]
    fn fix_preserves_indentation() {
        let text = "First  line\n  second  line";
        assert_eq!(Spaces::new().fix(text).unwrap(), "First line\n  second line");
    }

    #[test]
    fn fix_preserves_word_sequence() {
        let rule = Spaces::new();
        let text = "a  b\tc   d";
        let fixed = rule.fix(text).unwrap();
        assert_eq!(
            text.split_whitespace().collect::<Vec<_>>(),
            fixed.split_whitespace().collect::<Vec<_>>()
        );
        assert!(rule.check(&fixed));
    }

    #[test]
    fn fix_is_idempotent() {
        let rule = Spaces::new();
        let once = rule.fix("This  is   a   test").unwrap();
        let twice = rule.fix(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn fix_preserves_trailing_newline() {
        assert_eq!(Spaces::new().fix("two  words\n").unwrap(), "two words\n");
    }
}
