//! The `capital` rule: descriptions start with an uppercase letter
//!
//! The fixer also drops leading whitespace, so a fixed description starts
//! with its first (now uppercase) letter.

use crate::Rule;
use desclint_core::DiagnosticCode;

/// Requires the first alphabetic character of a description to be uppercase
pub struct Capital;

impl Rule for Capital {
    fn name(&self) -> &'static str {
        "capital"
    }

    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::DescriptionNotCapitalized
    }

    fn summary(&self) -> &'static str {
        "description starts with an uppercase letter"
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn check(&self, text: &str) -> bool {
        // Texts with no letters at all (including empty) pass vacuously
        match text.chars().find(|c| c.is_alphabetic()) {
            Some(first) => first.is_uppercase(),
            None => true,
        }
    }

    fn fix(&self, text: &str) -> Option<String> {
        let stripped = text.trim_start();
        if stripped.is_empty() {
            return Some(text.to_string());
        }

        let mut out = String::with_capacity(stripped.len());
        let mut fixed = false;

        for c in stripped.chars() {
            if !fixed && c.is_alphabetic() {
                out.extend(c.to_uppercase());
                fixed = true;
            } else {
                out.push(c);
            }
        }

        Some(out)
    }
}
