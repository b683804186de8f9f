//! The `article` rule: descriptions open with an allowed leading word
//!
//! Project convention wants descriptions phrased like "The total cost per
//! order" rather than "Total cost per order". Report-only: inserting an
//! article automatically would guess at grammar.

use crate::Rule;
use desclint_core::DiagnosticCode;

/// Requires the first word of a description to be an allowed article
pub struct Article {
    allowed: Vec<String>,
}

impl Article {
    /// Create the rule from the allowed leading words (compared lowercased)
    pub fn new(allowed: Vec<String>) -> Self {
        Self {
            allowed: allowed.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

impl Default for Article {
    fn default() -> Self {
        Self::new(
            desclint_core::config::DEFAULT_ALLOWED_ARTICLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl Rule for Article {
    fn name(&self) -> &'static str {
        "article"
    }

    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::DescriptionLeadingArticle
    }

    fn summary(&self) -> &'static str {
        "description starts with an allowed leading article"
    }

    fn check(&self, text: &str) -> bool {
        match text.split_whitespace().next() {
            Some(first) => self.allowed.contains(&first.to_lowercase()),
            None => true,
        }
    }
}
