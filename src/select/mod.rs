//! Sample selection.
//!
//! Responsibilities:
//!
//! - decide, per sample, whether it enters the current analysis pass
//! - assign categories in the categorizing variant
//! - merge decisions back into a caller-owned table

pub mod tagger;

pub use tagger::*;
