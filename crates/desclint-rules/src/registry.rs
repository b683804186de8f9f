//! Rule registry
//!
//! Maps stable rule names to constructed rules. Hook invocations select a
//! rule by name, so names here are part of the public interface.

use crate::{Article, Capital, Period, Rule, Spaces, Symbols};
use desclint_core::Config;

/// Stable rule names accepted by `--rule`
pub const RULE_NAMES: &[&str] = &["article", "capital", "period", "spaces", "symbols"];

/// Construct a rule by name, applying rule settings from the config
pub fn rule_by_name(name: &str, config: &Config) -> Option<Box<dyn Rule>> {
    match name {
        "article" => Some(Box::new(Article::new(config.article.allowed.clone()))),
        "capital" => Some(Box::new(Capital)),
        "period" => Some(Box::new(Period)),
        "spaces" => Some(Box::new(Spaces::new())),
        "symbols" => Some(Box::new(Symbols::new(&config.symbols.disallowed))),
        _ => None,
    }
}

/// Construct every registered rule
pub fn all_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    RULE_NAMES
        .iter()
        .filter_map(|name| rule_by_name(name, config))
        .collect()
}
