//! The `symbols` rule: no markup or currency-style symbol characters
//!
//! Report-only: there is no safe mechanical rewrite for a stray symbol, a
//! human has to decide what was meant.

use crate::Rule;
use desclint_core::DiagnosticCode;

/// Forbids a configurable set of symbol characters in descriptions
pub struct Symbols {
    disallowed: Vec<char>,
}

impl Symbols {
    /// Create the rule from the set of disallowed characters
    pub fn new(disallowed: &str) -> Self {
        Self {
            disallowed: disallowed.chars().collect(),
        }
    }

    /// First disallowed character found in the text, if any
    pub fn first_disallowed(&self, text: &str) -> Option<char> {
        text.chars().find(|c| self.disallowed.contains(c))
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new(desclint_core::config::DEFAULT_DISALLOWED_SYMBOLS)
    }
}

impl Rule for Symbols {
    fn name(&self) -> &'static str {
        "symbols"
    }

    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::DescriptionDisallowedSymbol
    }

    fn summary(&self) -> &'static str {
        "description contains no disallowed symbol characters"
    }

    fn check(&self, text: &str) -> bool {
        self.first_disallowed(text).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes() {
        assert!(Symbols::default().check("Total revenue per region."));
    }

    #[test]
    fn default_symbols_fail() {
        let rule = Symbols::default();
        assert!(!rule.check("Revenue in €."));
        assert!(!rule.check("#deprecated"));
        assert!(!rule.check("a | b"));
        assert_eq!(rule.first_disallowed("see #4"), Some('#'));
    }

    #[test]
    fn custom_symbol_set() {
        let rule = Symbols::new("!?");
        assert!(rule.check("Revenue in €."));
        assert!(!rule.check("Why?"));
    }

    #[test]
    fn symbols_rule_has_no_fixer() {
        let rule = Symbols::default();
        assert!(!rule.is_fixable());
        assert!(rule.fix("Revenue in €.").is_none());
    }
}
