use crate::config::WindowConfig;
use crate::error::Result;
use crate::ring_buffer::Sample;
use crate::stl::core::{BoundedOperator, format_interval};
use crate::stl::operators::until_operator::Until;
use crate::timing::TickWindow;
use std::fmt::Display;
use std::time::Duration;

/// Lock-step bounded Eventually, i.e. `true U[a, b] right`.
#[derive(Clone, Debug)]
pub struct Eventually {
    until: Until,
    config: WindowConfig,
}

impl Eventually {
    pub fn new(begin: Duration, end: Duration, period: Duration) -> Result<Self> {
        Self::from_config(&WindowConfig::new(begin, end, period))
    }

    pub fn update(&mut self, new_right: Sample) -> Sample {
        let always = Sample {
            value: true,
            timestamp: new_right.timestamp,
        };
        self.until.update(always, new_right)
    }

    pub fn out(&self) -> Sample {
        self.until.out()
    }
}

impl BoundedOperator for Eventually {
    fn from_config(config: &WindowConfig) -> Result<Self> {
        Ok(Eventually {
            until: Until::from_config(config)?,
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

impl Display for Eventually {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F")?;
        format_interval(f, &self.config)?;
        write!(f, " (right)")
    }
}
