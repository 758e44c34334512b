//! Reporting utilities: formatted terminal output for selections and lists.
//!
//! We keep formatting code in one place so:
//! - the tagging code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;
