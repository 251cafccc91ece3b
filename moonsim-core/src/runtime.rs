use crate::cycle::{find_cycle, find_cycle_within, CycleReport, SimulationError};
use crate::engine::{Body, System};
use crate::integrator::step;
use crate::parser::{parse_bodies, ParseError};
use thiserror::Error;

/// Number of steps simulated before measuring energy
pub const DEFAULT_ENERGY_STEPS: u64 = 1000;

#[derive(Debug, Error)]
pub enum MoonsimError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Knobs for a full run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Steps simulated before the energy is measured
    pub energy_steps: u64,
    /// Give up on cycle detection after this many steps
    pub max_cycle_steps: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            energy_steps: DEFAULT_ENERGY_STEPS,
            max_cycle_steps: None,
        }
    }
}

/// Final result of running both simulations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationResult {
    /// Total energy after the energy simulation
    pub energy: i64,
    pub cycle: CycleReport,
}

/// Main entry point: parse a moon list and run both simulations
pub fn run_program(source: &str) -> Result<SimulationResult, ParseError> {
    let system = parse_bodies(source)?;
    let energy = simulate_energy(&system, DEFAULT_ENERGY_STEPS);
    let cycle = find_cycle(&system);
    Ok(SimulationResult { energy, cycle })
}

/// Like [`run_program`], with a custom step count and cycle bound
pub fn run_program_with(
    source: &str,
    options: &RunOptions,
) -> Result<SimulationResult, MoonsimError> {
    let system = parse_bodies(source)?;
    let energy = simulate_energy(&system, options.energy_steps);
    let cycle = match options.max_cycle_steps {
        Some(limit) => find_cycle_within(&system, limit)?,
        None => find_cycle(&system),
    };
    Ok(SimulationResult { energy, cycle })
}

/// Run `steps` steps on a copy of `system` and return its total energy
pub fn simulate_energy(system: &System, steps: u64) -> i64 {
    let mut system = system.clone();
    for _ in 0..steps {
        step(&mut system);
    }
    system.total_energy()
}

/// A system being stepped one time unit at a time
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub system: System,
    pub current_step: u64,
}

impl SimulationContext {
    pub fn new(system: System) -> Self {
        Self {
            system,
            current_step: 0,
        }
    }

    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        Ok(Self::new(parse_bodies(source)?))
    }
}

/// Advance the context by one step
pub fn step_simulation(ctx: &mut SimulationContext) {
    step(&mut ctx.system);
    ctx.current_step += 1;
}

/// Current state of every body
pub fn body_states(ctx: &SimulationContext) -> &[Body] {
    &ctx.system.bodies
}
