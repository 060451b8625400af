use crate::config::WindowConfig;
use crate::error::Result;
use crate::ring_buffer::{PeriodHistory, Sample};
use crate::stl::core::{BoundedOperator, format_interval, until_reduction};
use crate::timing::{Discretizer, TickWindow};
use std::cmp::Ordering;
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Operand of a binary temporal operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Antecedent.
    Left,
    /// Consequent.
    Right,
}

/// Outcome of synchronizing one incoming sample against both histories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    Accepted,
    Stale,
}

/// Bounded Until over two asynchronously updated streams.
///
/// Each side is pushed independently through [`TimeSensitiveUntil::update_left`] and
/// [`TimeSensitiveUntil::update_right`]. Samples are placed by sampling period relative to the
/// configured start time:
///
/// - a sample in the same period as the side's newest slot is OR-merged into it,
/// - a sample older than the newest slot is discarded,
/// - whenever a sample is ahead of the opposite side, the opposite side is padded with `false`
///   samples up to the sample's period,
/// - a sample at least twice as far along as the side's newest slot also pads the opposite side
///   over the skipped periods.
///
/// The left history starts filled with unset `true` samples, the right one with unset `false`.
#[derive(Clone, Debug)]
pub struct TimeSensitiveUntil {
    config: WindowConfig,
    discretizer: Discretizer,
    window: TickWindow,
    left: PeriodHistory,
    right: PeriodHistory,
    out: Sample,
}

impl TimeSensitiveUntil {
    pub fn new(begin: Duration, end: Duration, period: Duration) -> Result<Self> {
        Self::from_config(&WindowConfig::new(begin, end, period))
    }

    pub fn update_left(&mut self, sample: Sample, run_update: bool) -> Sample {
        self.update_side(Side::Left, sample, run_update)
    }

    pub fn update_right(&mut self, sample: Sample, run_update: bool) -> Sample {
        self.update_side(Side::Right, sample, run_update)
    }

    pub fn update_side(&mut self, side: Side, sample: Sample, run_update: bool) -> Sample {
        trace!(?side, value = sample.value, timestamp = ?sample.timestamp, "time-sensitive update");

        let Some(timestamp) = sample.timestamp else {
            debug!(?side, "ignoring sample without timestamp");
            return self.out;
        };

        let admission = match side {
            Side::Left => synchronize(
                side,
                &mut self.left,
                &mut self.right,
                &self.discretizer,
                sample,
                timestamp,
            ),
            Side::Right => synchronize(
                side,
                &mut self.right,
                &mut self.left,
                &self.discretizer,
                sample,
                timestamp,
            ),
        };
        if admission == Admission::Stale {
            return self.out;
        }

        if self.out.timestamp.is_none_or(|t| timestamp > t) {
            self.out.timestamp = Some(timestamp);
        }

        if run_update {
            self.evaluate();
        }
        self.out
    }

    /// Recomputes the verdict from the current histories.
    pub fn evaluate(&mut self) -> Sample {
        self.out.value = until_reduction(&self.left, &self.right, self.window);
        self.out
    }

    pub fn out(&self) -> Sample {
        self.out
    }

    pub fn discretizer(&self) -> &Discretizer {
        &self.discretizer
    }

    pub fn history(&self, side: Side) -> &PeriodHistory {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

fn synchronize(
    side: Side,
    own: &mut PeriodHistory,
    opposite: &mut PeriodHistory,
    discretizer: &Discretizer,
    sample: Sample,
    timestamp: Duration,
) -> Admission {
    let Some(index_new) = discretizer.period_index(timestamp) else {
        debug!(?side, ?timestamp, "discarding sample older than start time");
        return Admission::Stale;
    };

    if !own.newest().is_set() {
        own.append(sample);
        return Admission::Accepted;
    }

    let index_last = own.newest_period(discretizer).unwrap_or(0);
    let index_opposite = opposite.newest_period(discretizer).unwrap_or(0);
    debug!(?side, index_new, index_last, index_opposite, "period indexes");

    if index_opposite < index_new {
        let filled = opposite.backfill(discretizer, index_opposite + 1, index_new);
        debug!(?side, filled, "opposite side behind, backfilled");
    }

    match index_new.cmp(&index_last) {
        Ordering::Equal => own.merge_newest(sample.value),
        Ordering::Less => {
            debug!(?side, index_new, index_last, "discarding stale sample");
            return Admission::Stale;
        }
        Ordering::Greater => {
            if index_new >= index_last.saturating_mul(2) {
                // own-side gap is padded on the opposite history
                let filled = opposite.backfill(discretizer, index_last + 1, index_new - 1);
                if filled > 0 {
                    debug!(?side, filled, "own side skipped periods, backfilled opposite");
                }
            }
            own.append(sample);
        }
    }
    Admission::Accepted
}

impl BoundedOperator for TimeSensitiveUntil {
    fn from_config(config: &WindowConfig) -> Result<Self> {
        let (discretizer, window) = config
            .discretize()
            .inspect_err(|e| warn!(error = %e, "rejecting time-sensitive until operator"))?;
        trace!(
            begin_tick = window.begin_tick(),
            end_tick = window.end_tick(),
            capacity = window.capacity(),
            "time-sensitive until operator created"
        );
        Ok(TimeSensitiveUntil {
            config: *config,
            discretizer,
            window,
            left: PeriodHistory::new(window.capacity(), true),
            right: PeriodHistory::new(window.capacity(), false),
            out: Sample::new(false, discretizer.start_time()),
        })
    }

    fn out(&self) -> Sample {
        self.out
    }

    fn window(&self) -> TickWindow {
        self.window
    }
}

impl Display for TimeSensitiveUntil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(left) U")?;
        format_interval(f, &self.config)?;
        write!(f, " (right)")
    }
}
