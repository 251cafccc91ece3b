//! Determinism tests - the same input always produces identical outputs

use moonsim_core::integrator::step;
use moonsim_core::tests::test_helpers::{run_source, LARGE_SYSTEM, SMALL_SYSTEM};
use moonsim_core::parse_bodies;

#[test]
fn test_repeated_runs_agree() {
    let results: Vec<_> = (0..3)
        .map(|_| run_source(SMALL_SYSTEM).expect("Run failed"))
        .collect();

    for i in 1..results.len() {
        assert_eq!(results[0], results[i], "Run {} should match run 0", i);
    }
}

#[test]
fn test_step_sequences_are_identical() {
    let mut a = parse_bodies(LARGE_SYSTEM).expect("parse");
    let mut b = parse_bodies(LARGE_SYSTEM).expect("parse");

    for n in 0..500 {
        step(&mut a);
        step(&mut b);
        assert_eq!(a, b, "States diverged after {} steps", n + 1);
    }
}
