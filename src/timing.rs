//! Discretization of continuous time into sampling periods.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::{MonitorError, Result};

/// Converts durations and timestamps into tick counts for a fixed sampling period.
///
/// All arithmetic is done in whole microseconds; sub-microsecond parts are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discretizer {
    period_us: u64,
    start_time: Duration,
}

impl Discretizer {
    pub fn new(period: Duration, start_time: Duration) -> Result<Self> {
        let period_us = u64::try_from(period.as_micros()).unwrap_or(u64::MAX);
        if period_us == 0 {
            return Err(MonitorError::ZeroPeriod);
        }
        Ok(Discretizer {
            period_us,
            start_time,
        })
    }

    pub fn period(&self) -> Duration {
        Duration::from_micros(self.period_us)
    }

    pub fn start_time(&self) -> Duration {
        self.start_time
    }

    /// `floor(time / period)`
    pub fn ticks(&self, time: Duration) -> usize {
        usize::try_from(time.as_micros() / u128::from(self.period_us)).unwrap_or(usize::MAX)
    }

    /// `floor((timestamp - start_time) / period)`, or `None` for timestamps before the start time.
    pub fn period_index(&self, timestamp: Duration) -> Option<u64> {
        let elapsed = timestamp.checked_sub(self.start_time)?;
        u64::try_from(elapsed.as_micros() / u128::from(self.period_us)).ok()
    }

    /// Timestamp at which period `index` begins.
    pub fn period_start(&self, index: u64) -> Duration {
        self.start_time + Duration::from_micros(index.saturating_mul(self.period_us))
    }
}

/// Largest `end_tick` a window may have; each side then retains `MAX_WINDOW_TICKS + 1` samples.
pub const MAX_WINDOW_TICKS: usize = 1 << 20;

/// Inclusive tick bounds of an evaluation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickWindow {
    begin_tick: usize,
    end_tick: usize,
}

impl TickWindow {
    pub fn new(begin_tick: usize, end_tick: usize) -> Result<Self> {
        if end_tick <= begin_tick {
            return Err(MonitorError::InvalidWindow {
                begin_tick,
                end_tick,
            });
        }
        if end_tick > MAX_WINDOW_TICKS {
            return Err(MonitorError::WindowTooLarge {
                end_tick,
                max_tick: MAX_WINDOW_TICKS,
            });
        }
        Ok(TickWindow {
            begin_tick,
            end_tick,
        })
    }

    pub fn begin_tick(&self) -> usize {
        self.begin_tick
    }

    pub fn end_tick(&self) -> usize {
        self.end_tick
    }

    /// Number of samples retained per side.
    pub fn capacity(&self) -> usize {
        self.end_tick + 1
    }

    pub fn ticks(&self) -> RangeInclusive<usize> {
        self.begin_tick..=self.end_tick
    }
}
