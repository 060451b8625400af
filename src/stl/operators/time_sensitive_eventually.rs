use crate::config::WindowConfig;
use crate::error::Result;
use crate::ring_buffer::Sample;
use crate::stl::core::{BoundedOperator, format_interval};
use crate::stl::operators::time_sensitive_until::TimeSensitiveUntil;
use crate::timing::TickWindow;
use std::fmt::Display;
use std::time::Duration;

/// Asynchronous bounded Eventually.
///
/// Every consequent sample is preceded by a synthetic `true` antecedent sample at the same
/// timestamp, so the antecedent history tracks the consequent's periods.
#[derive(Clone, Debug)]
pub struct TimeSensitiveEventually {
    until: TimeSensitiveUntil,
    config: WindowConfig,
}

impl TimeSensitiveEventually {
    pub fn new(begin: Duration, end: Duration, period: Duration) -> Result<Self> {
        Self::from_config(&WindowConfig::new(begin, end, period))
    }

    pub fn update(&mut self, new_right: Sample, run_update: bool) -> Sample {
        let always = Sample {
            value: true,
            timestamp: new_right.timestamp,
        };
        self.until.update_left(always, false);
        self.until.update_right(new_right, run_update)
    }

    pub fn out(&self) -> Sample {
        self.until.out()
    }
}

impl BoundedOperator for TimeSensitiveEventually {
    fn from_config(config: &WindowConfig) -> Result<Self> {
        Ok(TimeSensitiveEventually {
            until: TimeSensitiveUntil::from_config(config)?,
            config: *config,
        })
    }

    fn out(&self) -> Sample {
        self.until.out()
    }

    fn window(&self) -> TickWindow {
        self.until.window()
    }
}

impl Display for TimeSensitiveEventually {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F")?;
        format_interval(f, &self.config)?;
        write!(f, " (right)")
    }
}
