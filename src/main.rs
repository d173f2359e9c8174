//! Stochastic Production Simulation
//!
//! A minimal agent-based simulation: agents accrue work each discrete
//! timestep, optionally scaled by a configured random variate source.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use production_sim::config::{Config, ScenarioConfig, DEFAULT_TUNING_PATH};
use production_sim::output::StepLog;
use production_sim::{Model, ModelParams};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "production_sim")]
#[command(about = "A stochastic production accumulation simulation")]
struct Args {
    /// Random seed for reproducibility (overrides tuning.toml)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of steps to run per scenario (overrides tuning.toml)
    #[arg(long)]
    steps: Option<u64>,

    /// Path to the tuning file
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    tuning: String,

    /// Directory for per-scenario JSONL step logs (omit to skip logging)
    #[arg(long)]
    step_log: Option<PathBuf>,

    /// Suppress banner and per-scenario summary output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = if args.tuning == DEFAULT_TUNING_PATH {
        Config::load_or_default()
    } else {
        match Config::load(&args.tuning) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    let seed = args.seed.unwrap_or(config.simulation.seed);
    let steps = args.steps.unwrap_or(config.simulation.steps);

    if !args.quiet {
        println!("Stochastic Production Simulation");
        println!("================================");
        println!("Seed: {}", seed);
        println!("Steps per scenario: {}", steps);
        println!("Scenarios: {}", config.scenarios.len());
        println!();
    }

    if let Some(ref dir) = args.step_log {
        fs::create_dir_all(dir).unwrap_or_else(|e| {
            eprintln!("Warning: Could not create step log directory: {}", e);
        });
    }

    for scenario in &config.scenarios {
        run_scenario(scenario, seed, steps, args.step_log.as_deref(), args.quiet);
        if !args.quiet {
            println!();
        }
    }
}

fn run_scenario(
    scenario: &ScenarioConfig,
    seed: u64,
    steps: u64,
    log_dir: Option<&std::path::Path>,
    quiet: bool,
) {
    let variate = match scenario.variate.build() {
        Ok(variate) => variate,
        Err(e) => {
            eprintln!("Warning: Skipping scenario '{}': {}", scenario.name, e);
            return;
        }
    };

    let mut step_log = match log_dir {
        Some(dir) => {
            let path = dir.join(format!("{}.jsonl", scenario.name));
            StepLog::new(&path).unwrap_or_else(|e| {
                eprintln!("Warning: Could not open {}: {}", path.display(), e);
                StepLog::null()
            })
        }
        None => StepLog::null(),
    };

    if !quiet {
        println!(
            "Scenario '{}': {} agent(s), production {}",
            scenario.name, scenario.num_agents, scenario.default_production
        );
    }

    let mut model = Model::new(ModelParams {
        num_agents: scenario.num_agents,
        default_production: scenario.default_production,
        seed,
        variate,
    });

    for _ in 0..steps {
        let record = model.step();
        if let Err(e) = step_log.log(&record) {
            eprintln!("Warning: Could not write step record: {}", e);
        }
    }

    if !quiet {
        println!(
            "Scenario '{}' complete. Ran {} steps, total production {:.0}.",
            scenario.name,
            model.num_steps(),
            model.total_production()
        );
    }
}
