//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - run-period and analysis-channel enums (`Era`, `Channel`, `MemChannel`)
//! - the sample table and its records (`SampleTable`, `SampleRecord`)
//! - tagging outputs (`SampleDecision`, `SampleCategory`, `TagStats`)

pub mod types;

pub use types::*;
