use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;

use cpu_sched_sim::config::SimulatorConfig;
use cpu_sched_sim::report::{self, OverallComparison, ScenarioResults};
use cpu_sched_sim::scenarios::{ScenarioGenerator, ScenarioKind};
use cpu_sched_sim::scheduler::{build_suite, AlgorithmKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Compare CPU scheduling policies on generated workloads.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Round-Robin time quantum (overrides the config)
    #[arg(long)]
    quantum: Option<i64>,

    /// Scenario generator seed (overrides the config)
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Algorithms to compare: fcfs, sjf, rr, priority, srtf, hrrn
    #[arg(long, short = 'a', value_delimiter = ',', num_args = 1..)]
    algorithms: Vec<AlgorithmKind>,

    /// Scenarios to run: standard, short, long, mixed, simultaneous, priority
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    scenarios: Vec<ScenarioKind>,

    /// Print every algorithm's per-process table and timeline
    #[arg(long, short = 'd')]
    details: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = Default::default())]
    output_format: OutputFormat,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Args {
    /// Loads the config file (or defaults) and applies command-line overrides.
    fn resolve_config(&self) -> Result<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::from_path(path)?,
            None => SimulatorConfig::default(),
        };
        if let Some(quantum) = self.quantum {
            config = config.with_quantum(quantum);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if !self.algorithms.is_empty() {
            config = config.with_algorithms(self.algorithms.clone());
        }
        if !self.scenarios.is_empty() {
            config = config.with_scenarios(self.scenarios.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    config: &'a SimulatorConfig,
    scenarios: &'a [ScenarioResults],
    overall: &'a OverallComparison,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.resolve_config()?;
    log::debug!("effective config: {config:?}");

    let suite = build_suite(&config.algorithms, config.quantum)?;
    let mut generator = ScenarioGenerator::new(config.seed);

    let scenarios = generator
        .generate_many(&config.scenarios)
        .into_iter()
        .map(|scenario| {
            let name = scenario.name();
            ScenarioResults::run(scenario, &suite)
                .wrap_err_with(|| format!("failed to simulate scenario '{name}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    let overall = OverallComparison::from_scenarios(&scenarios);

    match args.output_format {
        OutputFormat::Text => print_text(&scenarios, &overall, args.details),
        OutputFormat::Json => {
            let report = JsonReport {
                config: &config,
                scenarios: &scenarios,
                overall: &overall,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn print_text(scenarios: &[ScenarioResults], overall: &OverallComparison, details: bool) {
    for scenario in scenarios {
        println!("\n##### {} #####", scenario.kind.name());
        print!("{}", report::render_processes(&scenario.processes));
        if details {
            for result in &scenario.results {
                println!();
                print!("{}", report::render_result(result));
            }
        }
        println!();
        print!("{}", report::render_comparison(scenario.kind.name(), &scenario.results));
    }
    println!();
    print!("{}", report::render_overall(overall, scenarios));
}
