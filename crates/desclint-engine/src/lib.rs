//! desclint engine
//!
//! Runs a single rule across a set of schema files: checking produces
//! diagnostics, fixing rewrites files in place.

pub mod fix;
pub mod lint;

pub use fix::{FixError, FixRun};
pub use lint::LintRun;
