use crate::config::WindowConfig;
use crate::error::Result;
use crate::ring_buffer::{Sample, TickHistory};
use crate::stl::core::{BoundedOperator, format_interval, until_reduction};
use crate::timing::TickWindow;
use std::fmt::Display;
use std::time::Duration;
use tracing::{trace, warn};

/// Lock-step bounded Until.
///
/// The caller pushes exactly one sample per side per tick through [`Until::update`]; both
/// histories are addressed by raw tick position. Histories start filled with unset `true`
/// samples on both sides.
#[derive(Clone, Debug)]
pub struct Until {
    config: WindowConfig,
    window: TickWindow,
    left: TickHistory,
    right: TickHistory,
    out: Sample,
}

impl Until {
    pub fn new(begin: Duration, end: Duration, period: Duration) -> Result<Self> {
        Self::from_config(&WindowConfig::new(begin, end, period))
    }

    /// Pushes one tick of both sides and recomputes the verdict.
    ///
    /// The verdict carries the timestamp of `new_right`.
    pub fn update(&mut self, new_left: Sample, new_right: Sample) -> Sample {
        self.left.insert(new_left);
        self.right.insert(new_right);

        let value = until_reduction(&self.left, &self.right, self.window);
        self.out = Sample {
            value,
            timestamp: new_right.timestamp,
        };
        trace!(
            left = new_left.value,
            right = new_right.value,
            timestamp = ?new_right.timestamp,
            verdict = value,
            "until update"
        );
        self.out
    }

    pub fn out(&self) -> Sample {
        self.out
    }

    pub fn left_history(&self) -> &TickHistory {
        &self.left
    }

    pub fn right_history(&self) -> &TickHistory {
        &self.right
    }
}

impl BoundedOperator for Until {
    fn from_config(config: &WindowConfig) -> Result<Self> {
        let (_, window) = config
            .discretize()
            .inspect_err(|e| warn!(error = %e, "rejecting until operator"))?;
        trace!(
            begin_tick = window.begin_tick(),
            end_tick = window.end_tick(),
            capacity = window.capacity(),
            "until operator created"
        );
        Ok(Until {
            config: *config,
            window,
            left: TickHistory::new(window.capacity(), true),
            right: TickHistory::new(window.capacity(), true),
            out: Sample::unset(false),
        })
    }

    fn out(&self) -> Sample {
        self.out
    }

    fn window(&self) -> TickWindow {
        self.window
    }
}

impl Display for Until {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(left) U")?;
        format_interval(f, &self.config)?;
        write!(f, " (right)")
    }
}
