//! Executable bounded temporal operators.
//!
//! Two families share the same window reduction:
//! - lock-step: [`until_operator`] and [`eventually_operator`], fed one sample per side per tick;
//! - asynchronous: [`time_sensitive_until`] and [`time_sensitive_eventually`], fed per side at
//!   independent rates and synchronized by sampling period.

pub mod eventually_operator;
pub mod time_sensitive_eventually;
pub mod time_sensitive_until;
pub mod until_operator;
