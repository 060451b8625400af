use std::result;

use thiserror::Error;

/// Reasons a monitor refuses to be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    #[error("Invalid window: end tick ({end_tick}) must be greater than begin tick ({begin_tick})")]
    InvalidWindow { begin_tick: usize, end_tick: usize },

    #[error("Window too large: end tick ({end_tick}) exceeds the maximum of {max_tick} ticks")]
    WindowTooLarge { end_tick: usize, max_tick: usize },

    #[error("Sampling period must be at least one microsecond")]
    ZeroPeriod,

    #[error("Missing monitor parameter: `{0}`")]
    MissingParameter(&'static str),
}

pub type Result<T> = result::Result<T, MonitorError>;
