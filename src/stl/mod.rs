//! Signal Temporal Logic (STL) public module.
//!
//! - [`core`] shared traits and the bounded Until reduction,
//! - [`monitor`] builder for any bounded operator,
//! - [`naive`] brute-force reference evaluation, and
//! - [`operators`] the incremental Until/Eventually evaluators.

pub mod core;
pub mod monitor;
pub mod naive;
pub mod operators;

pub use operators::eventually_operator::Eventually;
pub use operators::time_sensitive_eventually::TimeSensitiveEventually;
pub use operators::time_sensitive_until::{Side, TimeSensitiveUntil};
pub use operators::until_operator::Until;
