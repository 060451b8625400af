//! Monitor window configuration.
//!
//! A [`WindowConfig`] can be built in code or deserialized from any serde format. On the wire
//! all durations are integer microseconds:
//!
//! ```
//! use bounded_stl::config::WindowConfig;
//! use std::time::Duration;
//!
//! let config: WindowConfig =
//!     serde_json::from_str(r#"{ "begin_us": 0, "end_us": 2000, "period_us": 1000 }"#).unwrap();
//! assert_eq!(config.end, Duration::from_micros(2000));
//! assert_eq!(config.start_time, Duration::ZERO);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timing::{Discretizer, TickWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(rename = "begin_us", with = "micros")]
    pub begin: Duration,
    #[serde(rename = "end_us", with = "micros")]
    pub end: Duration,
    /// Nominal sampling interval of both streams.
    #[serde(rename = "period_us", with = "micros")]
    pub period: Duration,
    /// Reference instant for period indexes.
    #[serde(rename = "start_time_us", with = "micros", default)]
    pub start_time: Duration,
}

impl WindowConfig {
    pub fn new(begin: Duration, end: Duration, period: Duration) -> Self {
        WindowConfig {
            begin,
            end,
            period,
            start_time: Duration::ZERO,
        }
    }

    pub fn with_start_time(mut self, start_time: Duration) -> Self {
        self.start_time = start_time;
        self
    }

    /// Validates the configuration and derives the tick bounds.
    pub fn discretize(&self) -> Result<(Discretizer, TickWindow)> {
        let discretizer = Discretizer::new(self.period, self.start_time)?;
        let window = TickWindow::new(discretizer.ticks(self.begin), discretizer.ticks(self.end))?;
        Ok((discretizer, window))
    }
}

mod micros {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_micros()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_micros)
    }
}
