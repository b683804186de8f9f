//! The `period` rule: descriptions end with a period
//!
//! Descriptions that contain list items (lines starting with "- ") are
//! exempt: a trailing period after a list entry reads wrong, so the fixer
//! strips one instead of adding it.

use crate::Rule;
use desclint_core::DiagnosticCode;

/// Requires the last non-empty line of a description to end with '.'
pub struct Period;

/// Check if text contains list items (lines starting with "- ")
fn contains_list_items(text: &str) -> bool {
    text.lines().any(|line| line.trim_start().starts_with("- "))
}

/// Quoted-empty placeholders some projects use for "documented later"
fn is_quoted_empty(text: &str) -> bool {
    matches!(text.trim(), "''" | "\"\"")
}

impl Rule for Period {
    fn name(&self) -> &'static str {
        "period"
    }

    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::DescriptionMissingPeriod
    }

    fn summary(&self) -> &'static str {
        "description ends with a period"
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn check(&self, text: &str) -> bool {
        if text.trim().is_empty() || is_quoted_empty(text) {
            return true;
        }

        if contains_list_items(text) {
            return true;
        }

        match text.trim_end().lines().rev().find(|l| !l.trim().is_empty()) {
            Some(last) => last.trim_end().ends_with('.'),
            None => true,
        }
    }

    fn fix(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() || is_quoted_empty(text) {
            return Some(text.to_string());
        }

        let had_trailing_newline = text.ends_with('\n');

        let mut lines: Vec<String> = text
            .trim_end_matches('\n')
            .split('\n')
            .map(|l| l.to_string())
            .collect();

        let Some(last) = lines.last_mut() else {
            return Some(text.to_string());
        };
        let trimmed = last.trim_end().to_string();

        if contains_list_items(text) {
            // List-style descriptions drop the trailing period instead
            if let Some(stripped) = trimmed.strip_suffix('.') {
                *last = stripped.to_string();
            }
        } else if !trimmed.ends_with('.') {
            *last = format!("{}.", trimmed);
        }

        let mut out = lines.join("\n");
        if had_trailing_newline {
            out.push('\n');
        }
        Some(out)
    }
}
