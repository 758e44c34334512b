//! Parameter sets for the compiled MEM analysis executables.
//!
//! These are declarative key/value documents: the executables consume them
//! verbatim, nothing in this crate interprets them beyond validation and the
//! smearer constructors.

pub mod params;

pub use params::*;
