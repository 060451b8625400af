use crate::config::WindowConfig;
use crate::error::{MonitorError, Result};
use crate::stl::core::{BoundedOperator, TimeInterval};
use std::marker::PhantomData;
use std::time::Duration;

/// The Builder pattern struct for any [`BoundedOperator`].
///
/// ```
/// use bounded_stl::stl::core::{BoundedOperator, TimeInterval};
/// use bounded_stl::stl::TimeSensitiveUntil;
/// use std::time::Duration;
///
/// let monitor = TimeSensitiveUntil::builder()
///     .interval(TimeInterval {
///         start: Duration::ZERO,
///         end: Duration::from_millis(2),
///     })
///     .period(Duration::from_millis(1))
///     .build()
///     .unwrap();
/// assert_eq!(monitor.window().capacity(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MonitorBuilder<O> {
    interval: Option<TimeInterval>,
    period: Option<Duration>,
    start_time: Duration,
    _phantom: PhantomData<O>,
}

impl<O> Default for MonitorBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> MonitorBuilder<O> {
    pub fn new() -> Self {
        MonitorBuilder {
            interval: None,
            period: None,
            start_time: Duration::ZERO,
            _phantom: PhantomData,
        }
    }

    /// Sets the evaluation window.
    pub fn interval(mut self, interval: TimeInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the nominal sampling period.
    pub fn period(mut self, period: Duration) -> Self {
        self.period = Some(period);
        self
    }

    /// Sets the reference instant for period indexes (defaults to zero).
    pub fn start_time(mut self, start_time: Duration) -> Self {
        self.start_time = start_time;
        self
    }

    /// Takes every parameter from a loaded configuration.
    pub fn config(self, config: WindowConfig) -> Self {
        self.interval(TimeInterval {
            start: config.begin,
            end: config.end,
        })
        .period(config.period)
        .start_time(config.start_time)
    }

    pub fn build(self) -> Result<O>
    where
        O: BoundedOperator,
    {
        let interval = self
            .interval
            .ok_or(MonitorError::MissingParameter("interval"))?;
        let period = self.period.ok_or(MonitorError::MissingParameter("period"))?;
        let config =
            WindowConfig::new(interval.start, interval.end, period).with_start_time(self.start_time);
        O::from_config(&config)
    }
}
