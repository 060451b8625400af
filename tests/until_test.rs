mod common;
mod fixtures;

use bounded_stl::ring_buffer::Sample;
use bounded_stl::stl::core::BoundedOperator;
use bounded_stl::stl::naive::until_trace;
use bounded_stl::stl::{Eventually, Until};
use pretty_assertions::assert_eq;
use rstest::rstest;

use common::*;
use fixtures::{eventually_0_3, until_0_2};

fn run_until(until: &mut Until, left: &[bool], right: &[bool]) -> Vec<Sample> {
    lockstep(left)
        .into_iter()
        .zip(lockstep(right))
        .map(|(l, r)| until.update(l, r))
        .collect()
}

#[rstest]
fn until_antecedent_holds_until_consequent(#[from(until_0_2)] mut until: Until) {
    let outputs = run_until(&mut until, &[true, true, true], &[false, false, true]);

    let last = outputs.last().copied().unwrap();
    assert!(last.value);
    assert_eq!(last.timestamp, Some(us(2000)));
    assert_eq!(until.out(), last);
}

#[rstest]
#[case::witness_in_newest(&[true, true, true], &[false, false, true], true)]
#[case::antecedent_breaks_first(&[true, false, true], &[false, false, true], false)]
#[case::witness_before_break(&[true, true, false], &[false, true, false], true)]
#[case::no_witness(&[true, true, true], &[false, false, false], false)]
#[case::oldest_antecedent_false(&[false, true, true], &[true, true, true], false)]
fn until_full_window(
    #[from(until_0_2)] mut until: Until,
    #[case] left: &[bool],
    #[case] right: &[bool],
    #[case] expected: bool,
) {
    let outputs = run_until(&mut until, left, right);
    assert_eq!(outputs.last().map(|s| s.value), Some(expected));
}

#[rstest]
fn until_matches_naive_trace(#[from(until_0_2)] mut until: Until) {
    let left = [true, true, false, true, true, true, true, false];
    let right = [false, false, false, false, true, false, false, true];

    let verdicts: Vec<bool> = run_until(&mut until, &left, &right)
        .iter()
        .map(|s| s.value)
        .collect();
    assert_eq!(verdicts, until_trace(&left, &right, until.window(), (true, true)));
}

#[test]
fn until_window_offset_skips_early_witness() {
    let mut until = Until::new(us(1000), us(3000), period()).unwrap();
    let outputs = run_until(
        &mut until,
        &[true, true, true, true],
        &[true, false, false, false],
    );
    assert!(!outputs.last().unwrap().value);
}

#[rstest]
fn eventually_prefill_counts_as_witness(#[from(eventually_0_3)] mut eventually: Eventually) {
    // right-side slots start out `true`, so the lock-step verdict only drops once they are gone
    let verdicts: Vec<bool> = lockstep(&[false, false, false, true])
        .into_iter()
        .map(|s| eventually.update(s).value)
        .collect();
    assert_eq!(verdicts, vec![true, true, true, true]);

    let verdicts: Vec<bool> = lockstep(&[false, false, false, false])
        .into_iter()
        .map(|s| eventually.update(s).value)
        .collect();
    // the `true` at period 3 is evicted on the fourth update
    assert_eq!(verdicts, vec![true, true, true, false]);
}

#[rstest]
fn eventually_is_until_with_true_antecedent(#[from(eventually_0_3)] mut eventually: Eventually) {
    let mut until = Until::new(us(0), us(3000), period()).unwrap();
    let right = [false, true, false, false, false, false, true, false];

    for sample in lockstep(&right) {
        let expected = until.update(Sample { value: true, ..sample }, sample);
        assert_eq!(eventually.update(sample), expected);
    }
    assert_eq!(eventually.out(), until.out());
}
