//! Built-in analysis data.
//!
//! The per-era, per-channel sample allow-lists are literal domain knowledge
//! (which simulated datasets are validated for a configuration), not computed
//! values. They live here, away from the tagging logic that consumes them.

pub mod allowlist;

pub use allowlist::*;
