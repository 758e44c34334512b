//! Input/output helpers.
//!
//! - sample-table JSON read/write (`table`)
//! - per-sample decision exports (`decisions`)
//! - MEM job parameter-set files (`params`)

pub mod decisions;
pub mod params;
pub mod table;

pub use decisions::*;
pub use params::*;
pub use table::*;
