use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use moonsim_core::{
    body_states, format_read_error, format_runtime_error, run_program_with, step_simulation,
    RunOptions, SimulationContext, DEFAULT_ENERGY_STEPS,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "moonsim")]
#[command(about = "moonsim - unit-gravity moon simulator and cycle finder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the total energy and the system's repeat period
    Run {
        /// Path to the moon list
        file: PathBuf,
        /// Steps to simulate before measuring energy
        #[arg(long, default_value_t = DEFAULT_ENERGY_STEPS)]
        steps: u64,
        /// Give up on cycle detection after this many steps
        #[arg(long)]
        max_steps: Option<u64>,
    },
    /// Print every body's state after each step
    Trace {
        /// Path to the moon list
        file: PathBuf,
        /// Number of steps to trace
        #[arg(long, default_value_t = 10)]
        steps: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            file,
            steps,
            max_steps,
        } => run_file(
            &file,
            &RunOptions {
                energy_steps: steps,
                max_cycle_steps: max_steps,
            },
        ),
        Commands::Trace { file, steps } => trace_file(&file, steps),
    };

    if let Err(e) = outcome {
        eprintln!("{}", format_runtime_error(&*e));
        std::process::exit(1);
    }
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).map_err(|e| anyhow!(format_read_error(file, &e)))
}

fn run_file(file: &Path, options: &RunOptions) -> Result<()> {
    let source = read_source(file)?;
    let result = run_program_with(&source, options)?;

    println!("Part 1: {}", result.energy);
    println!("Part 2: {}", result.cycle.combined);

    Ok(())
}

fn trace_file(file: &Path, steps: u64) -> Result<()> {
    let source = read_source(file)?;
    let mut ctx = SimulationContext::from_source(&source)?;

    loop {
        println!("After {} steps:", ctx.current_step);
        for body in body_states(&ctx) {
            println!("{}", body);
        }
        println!("Energy: {}", ctx.system.total_energy());
        if ctx.current_step >= steps {
            break;
        }
        println!();
        step_simulation(&mut ctx);
    }

    Ok(())
}
