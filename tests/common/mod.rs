#![allow(dead_code)]

use bounded_stl::ring_buffer::{PeriodHistory, Sample};
use std::time::Duration;

pub const PERIOD_US: u64 = 1000;

pub fn us(micros: u64) -> Duration {
    Duration::from_micros(micros)
}

pub fn period() -> Duration {
    us(PERIOD_US)
}

/// Sample placed at the start of period `index`.
pub fn at_period(value: bool, index: u64) -> Sample {
    Sample::new(value, us(index * PERIOD_US))
}

/// One sample per period, starting at period 0.
pub fn lockstep(values: &[bool]) -> Vec<Sample> {
    values
        .iter()
        .zip(0u64..)
        .map(|(&value, index)| at_period(value, index))
        .collect()
}

/// Slot timestamps in microseconds, oldest first; `None` for unset slots.
pub fn timestamps_us(history: &PeriodHistory) -> Vec<Option<u64>> {
    history
        .iter()
        .map(|s| s.timestamp.map(|t| t.as_micros() as u64))
        .collect()
}

pub fn values(history: &PeriodHistory) -> Vec<bool> {
    history.iter().map(|s| s.value).collect()
}
