//! Simulated host for a time-sensitive Until monitor.
//!
//! Two producer threads sample a boolean condition on the same nominal period but with clock
//! jitter and occasional dropouts. A dispatcher owns the monitor and applies their samples in
//! arrival order, which serializes access to it. Run with `RUST_LOG=debug` to see the
//! synchronization decisions.

use bounded_stl::ring_buffer::Sample;
use bounded_stl::stl::core::{BoundedOperator, TimeInterval};
use bounded_stl::stl::{Side, TimeSensitiveUntil};
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use std::error::Error;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

// --- Configuration Constants ---
const PERIOD: Duration = Duration::from_millis(20);
const TICKS: u32 = 50;
/// Standard deviation of each producer's timestamp jitter, in microseconds
const JITTER_US: f64 = 2_000.0;
/// Probability that a producer misses a period entirely
const DROPOUT: f64 = 0.1;

struct SampleGenerator {
    side: Side,
    probability_true: f64,
    jitter: Normal<f64>,
}

impl SampleGenerator {
    fn new(side: Side, probability_true: f64) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(SampleGenerator {
            side,
            probability_true,
            jitter: Normal::new(0.0, JITTER_US)?,
        })
    }

    fn sample_at<R: Rng>(&self, rng: &mut R, tick: u32) -> Option<Sample> {
        if rng.random_bool(DROPOUT) {
            return None;
        }
        let nominal = (PERIOD * tick).as_micros() as f64;
        let jittered = (nominal + self.jitter.sample(rng)).max(0.0);
        let value = rng.random_bool(self.probability_true);
        Some(Sample::new(value, Duration::from_micros(jittered as u64)))
    }

    fn run(self, tx: mpsc::Sender<(Side, Sample)>) {
        let mut rng = rand::rng();
        for tick in 0..TICKS {
            if let Some(sample) = self.sample_at(&mut rng, tick)
                && tx.send((self.side, sample)).is_err()
            {
                return;
            }
            thread::sleep(PERIOD);
        }
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut monitor = TimeSensitiveUntil::builder()
        .interval(TimeInterval {
            start: Duration::ZERO,
            end: PERIOD * 4,
        })
        .period(PERIOD)
        .build()?;
    info!(formula = %monitor, "monitoring");

    let (tx, rx) = mpsc::channel();
    let producers = [
        SampleGenerator::new(Side::Left, 0.9)?,
        SampleGenerator::new(Side::Right, 0.3)?,
    ]
    .into_iter()
    .map(|generator| {
        let tx = tx.clone();
        thread::spawn(move || generator.run(tx))
    })
    .collect::<Vec<_>>();
    drop(tx);

    for (side, sample) in rx {
        // evaluate on the consequent's cadence
        let out = monitor.update_side(side, sample, side == Side::Right);
        if side == Side::Right {
            info!(
                timestamp_us = out.timestamp.map(|t| t.as_micros() as u64),
                verdict = out.value,
                "verdict"
            );
        }
    }

    for producer in producers {
        producer
            .join()
            .map_err(|_| "producer thread panicked")?;
    }
    Ok(())
}
