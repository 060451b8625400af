#![allow(dead_code)]

use bounded_stl::stl::{Eventually, TimeSensitiveEventually, TimeSensitiveUntil, Until};
use rstest::fixture;

use crate::common::{period, us};

// ---
// Operator fixtures, all with a 1000us period
// ---

/// `U[0, 2000us]`, three slots per side.
#[fixture]
pub fn until_0_2() -> Until {
    Until::new(us(0), us(2000), period()).unwrap()
}

/// `F[0, 3000us]`, four slots.
#[fixture]
pub fn eventually_0_3() -> Eventually {
    Eventually::new(us(0), us(3000), period()).unwrap()
}

/// `U[0, 2000us]`, asynchronous.
#[fixture]
pub fn ts_until_0_2() -> TimeSensitiveUntil {
    TimeSensitiveUntil::new(us(0), us(2000), period()).unwrap()
}

/// `U[0, 4000us]`, asynchronous, five slots per side.
#[fixture]
pub fn ts_until_0_4() -> TimeSensitiveUntil {
    TimeSensitiveUntil::new(us(0), us(4000), period()).unwrap()
}

/// `F[0, 3000us]`, asynchronous.
#[fixture]
pub fn ts_eventually_0_3() -> TimeSensitiveEventually {
    TimeSensitiveEventually::new(us(0), us(3000), period()).unwrap()
}
