//! Cycle detection for the moon system
//!
//! The three axes evolve independently, so each axis repeats with its own
//! period and the whole system repeats after the least common multiple of
//! the three.

use crate::engine::{Axis, System};
use crate::integrator::step;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("no cycle found on every axis within {limit} steps")]
    CycleNotFound { limit: u64 },
}

/// Snapshot of every body's (position, velocity) on one axis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AxisFingerprint(Vec<(i64, i64)>);

impl AxisFingerprint {
    pub fn capture(system: &System, axis: Axis) -> Self {
        Self(system.bodies.iter().map(|b| b.axis_state(axis)).collect())
    }
}

/// Per-axis periods and their combined system period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub periods: [u64; 3],
    pub combined: u64,
}

impl CycleReport {
    pub fn from_periods(periods: [u64; 3]) -> Self {
        Self {
            periods,
            combined: lcm3(periods),
        }
    }

    pub fn period(&self, axis: Axis) -> u64 {
        self.periods[axis.index()]
    }
}

/// Tracks previously seen fingerprints for each axis until all three repeat
#[derive(Debug, Default)]
pub struct CycleDetector {
    seen: [HashSet<AxisFingerprint>; 3],
    periods: [Option<u64>; 3],
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state after the step with 0-based index `step_index`.
    ///
    /// An axis whose fingerprint was already seen gets `step_index` as its
    /// period and is not checked again.
    pub fn observe(&mut self, step_index: u64, system: &System) {
        for axis in Axis::ALL {
            let i = axis.index();
            if self.periods[i].is_some() {
                continue;
            }
            let fingerprint = AxisFingerprint::capture(system, axis);
            if !self.seen[i].insert(fingerprint) {
                self.periods[i] = Some(step_index);
                self.seen[i].clear();
            }
        }
    }

    pub fn period(&self, axis: Axis) -> Option<u64> {
        self.periods[axis.index()]
    }

    /// All three periods, once every axis has repeated
    pub fn periods(&self) -> Option<[u64; 3]> {
        match self.periods {
            [Some(x), Some(y), Some(z)] => Some([x, y, z]),
            _ => None,
        }
    }
}

/// Step a fresh copy of `system` until every axis repeats.
///
/// Loops without bound; see [`find_cycle_within`] for a bounded search.
pub fn find_cycle(system: &System) -> CycleReport {
    let mut system = system.clone();
    let mut detector = CycleDetector::new();
    let mut step_index = 0u64;
    loop {
        step(&mut system);
        detector.observe(step_index, &system);
        if let Some(periods) = detector.periods() {
            return CycleReport::from_periods(periods);
        }
        step_index += 1;
    }
}

/// Like [`find_cycle`], but gives up after `limit` steps
pub fn find_cycle_within(system: &System, limit: u64) -> Result<CycleReport, SimulationError> {
    let mut system = system.clone();
    let mut detector = CycleDetector::new();
    for step_index in 0..limit {
        step(&mut system);
        detector.observe(step_index, &system);
        if let Some(periods) = detector.periods() {
            return Ok(CycleReport::from_periods(periods));
        }
    }
    Err(SimulationError::CycleNotFound { limit })
}

/// Greatest common divisor (Euclid)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple; `lcm(0, 0)` is 0
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Least common multiple of exactly three periods
pub fn lcm3(values: [u64; 3]) -> u64 {
    values.into_iter().fold(1, lcm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::I64Vec3;

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm3([18, 28, 44]), 2772);
        assert_eq!(lcm3([1, 1, 1]), 1);
    }

    #[test]
    fn periods_stay_unresolved_until_every_axis_repeats() {
        let mut system = System::from_positions([I64Vec3::new(0, 0, 0), I64Vec3::new(2, 0, 0)]);
        let mut detector = CycleDetector::new();

        step(&mut system);
        detector.observe(0, &system);
        assert_eq!(detector.periods(), None);

        step(&mut system);
        detector.observe(1, &system);
        // y and z never move, x is still swinging
        assert_eq!(detector.period(Axis::Y), Some(1));
        assert_eq!(detector.period(Axis::Z), Some(1));
        assert_eq!(detector.period(Axis::X), None);
        assert_eq!(detector.periods(), None);
    }

    #[test]
    fn resolved_axis_keeps_first_period() {
        let system = System::from_positions([I64Vec3::ZERO]);
        let mut detector = CycleDetector::new();
        for i in 0..5 {
            detector.observe(i, &system);
        }
        assert_eq!(detector.periods(), Some([1, 1, 1]));
    }

    #[test]
    fn bounded_search_reports_limit() {
        let system = System::from_positions([I64Vec3::new(-1, 0, 2), I64Vec3::new(2, -10, -7)]);
        assert_eq!(
            find_cycle_within(&system, 1),
            Err(SimulationError::CycleNotFound { limit: 1 })
        );
    }
}
