//! Brute-force bounded Until/Eventually over plain value sequences.
//!
//! These functions recompute every verdict from scratch. They exist as a reference for the
//! incremental operators and are not meant for production monitoring.

use crate::timing::TickWindow;

/// `left U[begin_tick, end_tick] right` over one window, oldest value first.
///
/// # Panics
///
/// If either slice is shorter than `end_tick + 1`.
pub fn until_naive(left: &[bool], right: &[bool], begin_tick: usize, end_tick: usize) -> bool {
    (begin_tick..=end_tick).any(|i| right[i] && left[..=i].iter().all(|&v| v))
}

/// `F[begin_tick, end_tick] right` over one window, oldest value first.
pub fn eventually_naive(right: &[bool], begin_tick: usize, end_tick: usize) -> bool {
    right[begin_tick..=end_tick].iter().any(|&v| v)
}

/// Replays two lock-step streams and returns the verdict after every tick.
///
/// Each window holds the last `window.capacity()` values, padded on the old end with the
/// side's prefill value until enough values have arrived.
pub fn until_trace(
    left: &[bool],
    right: &[bool],
    window: TickWindow,
    (left_prefill, right_prefill): (bool, bool),
) -> Vec<bool> {
    let capacity = window.capacity();
    let padded = |values: &[bool], prefill: bool, t: usize| -> Vec<bool> {
        let mut retained = vec![prefill; capacity.saturating_sub(t + 1)];
        let first = (t + 1).saturating_sub(capacity);
        retained.extend_from_slice(&values[first..=t]);
        retained
    };

    (0..left.len().min(right.len()))
        .map(|t| {
            until_naive(
                &padded(left, left_prefill, t),
                &padded(right, right_prefill, t),
                window.begin_tick(),
                window.end_tick(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn naive_until() {
        assert!(until_naive(&[true, true, true], &[false, false, true], 0, 2));
        assert!(!until_naive(&[true, false, true], &[false, false, true], 0, 2));
        assert!(!until_naive(&[true, true, true], &[true, false, false], 1, 2));
    }

    #[test]
    fn naive_eventually() {
        assert!(eventually_naive(&[false, true, false], 1, 2));
        assert!(!eventually_naive(&[true, false, false], 1, 2));
    }

    #[test]
    fn trace_pads_with_prefill() {
        let window = TickWindow::new(0, 2).unwrap();
        let verdicts = until_trace(&[true; 4], &[false; 4], window, (true, true));
        assert_eq!(verdicts, vec![true, true, false, false]);
    }

    #[test]
    fn trace_prefill_per_side() {
        let window = TickWindow::new(0, 2).unwrap();
        let verdicts = until_trace(&[true; 3], &[false, false, true], window, (true, false));
        assert_eq!(verdicts, vec![false, false, true]);
    }
}
