use std::fmt::Display;
use std::time::Duration;

use crate::config::WindowConfig;
use crate::error::Result;
use crate::ring_buffer::Sample;
use crate::stl::monitor::MonitorBuilder;
use crate::timing::TickWindow;

// Time interval type
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: Duration,
    pub end: Duration,
}

/// Read access to a side's retained values, position `0` being the oldest.
pub trait WindowHistory {
    fn value_at(&self, position: usize) -> bool;
}

/// Bounded Until over two histories.
///
/// True iff there is a tick `i` in `[begin_tick, end_tick]` where `right` holds and `left` has
/// held at every position `0..=i`.
pub fn until_reduction<L, R>(left: &L, right: &R, window: TickWindow) -> bool
where
    L: WindowHistory + ?Sized,
    R: WindowHistory + ?Sized,
{
    for i in 0..=window.end_tick() {
        // cumulative conjunction: once left fails, no later tick can satisfy
        if !left.value_at(i) {
            return false;
        }
        if i >= window.begin_tick() && right.value_at(i) {
            return true;
        }
    }
    false
}

/// Common surface of every bounded evaluator.
pub trait BoundedOperator: Display {
    fn from_config(config: &WindowConfig) -> Result<Self>
    where
        Self: Sized;

    /// The cached verdict.
    fn out(&self) -> Sample;

    fn window(&self) -> TickWindow;

    fn builder() -> MonitorBuilder<Self>
    where
        Self: Sized,
    {
        MonitorBuilder::new()
    }
}

pub(crate) fn format_interval(
    f: &mut std::fmt::Formatter<'_>,
    config: &WindowConfig,
) -> std::fmt::Result {
    write!(f, "[{}, {}]", config.begin.as_micros(), config.end.as_micros())
}
