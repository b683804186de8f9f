//! desclint rules
//!
//! The formatting rules applied to description text. Each rule is a
//! stateless predicate over a description string, optionally paired with a
//! fixer that rewrites non-conforming text into conforming text.
//!
//! Fixers are idempotent: `fix(fix(s)) == fix(s)`, and fixed output always
//! passes `check`.

use desclint_core::DiagnosticCode;

pub mod article;
pub mod capital;
pub mod period;
pub mod registry;
pub mod spaces;
pub mod symbols;

pub use article::Article;
pub use capital::Capital;
pub use period::Period;
pub use registry::{all_rules, rule_by_name, RULE_NAMES};
pub use spaces::Spaces;
pub use symbols::Symbols;

/// A single description formatting rule
pub trait Rule {
    /// Stable rule name, used for hook invocation (`--rule <name>`)
    fn name(&self) -> &'static str;

    /// Diagnostic code reported for violations of this rule
    fn code(&self) -> DiagnosticCode;

    /// One-line statement of what the rule requires
    fn summary(&self) -> &'static str;

    /// Whether the rule supports auto-fixing
    fn is_fixable(&self) -> bool {
        false
    }

    /// Check whether the text conforms to the rule
    fn check(&self, text: &str) -> bool;

    /// Rewrite the text to conform, or None for report-only rules
    fn fix(&self, text: &str) -> Option<String> {
        let _ = text;
        None
    }
}
