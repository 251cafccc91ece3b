pub mod cycle;
pub mod diagnostics;
pub mod engine;
pub mod integrator;
pub mod parser;
pub mod runtime;

pub use cycle::{
    find_cycle, find_cycle_within, gcd, lcm, lcm3, CycleDetector, CycleReport, SimulationError,
};
pub use diagnostics::{format_read_error, format_runtime_error};
pub use engine::{Axis, Body, System};
pub use parser::{parse_bodies, BodyParser, ParseError};
pub use runtime::{
    body_states, run_program, run_program_with, simulate_energy, step_simulation, MoonsimError,
    RunOptions, SimulationContext, SimulationResult, DEFAULT_ENERGY_STEPS,
};
