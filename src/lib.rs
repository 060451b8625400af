//! # bounded-stl - bounded-window Until/Eventually monitors
//!
//! `bounded_stl` evaluates the temporal-logic formulas `left U[a, b] right` and `F[a, b] right`
//! online, over two boolean signal streams sampled on a nominal period.
//!
//! It includes:
//! - lock-step evaluators ([`stl::Until`], [`stl::Eventually`]) for hosts that push both sides
//!   together once per tick,
//! - time-sensitive evaluators ([`stl::TimeSensitiveUntil`], [`stl::TimeSensitiveEventually`])
//!   for sides that arrive at different rates, with same-period merging, stale-sample rejection
//!   and backfill of missing periods, and
//! - a builder and a serde-loadable [`config::WindowConfig`].
//!
//! All memory is reserved at construction; every update is bounded by the window size.
//! Evaluators are not synchronized internally, the host must serialize calls per instance.
//!
//! ## Simple usage
//!
//! ```
//! use bounded_stl::ring_buffer::Sample;
//! use bounded_stl::stl::TimeSensitiveUntil;
//! use std::time::Duration;
//!
//! let period = Duration::from_millis(1);
//! let mut monitor = TimeSensitiveUntil::new(Duration::ZERO, period * 2, period).unwrap();
//!
//! monitor.update_left(Sample::new(true, Duration::ZERO), false);
//! monitor.update_right(Sample::new(false, Duration::ZERO), true);
//! monitor.update_left(Sample::new(true, period), false);
//! let out = monitor.update_right(Sample::new(true, period), true);
//!
//! assert!(out.value);
//! assert_eq!(out.timestamp, Some(period));
//! ```

pub mod config;
pub mod error;
pub mod ring_buffer;
pub mod stl;
pub mod timing;

pub use error::{MonitorError, Result};
