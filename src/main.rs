use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shift_scheduler::config::{ConfigLoader, SchedulerConfig};
use shift_scheduler::console::ConsoleSession;
use shift_scheduler::demo::sample_roster;
use shift_scheduler::error::SchedulerError;
use shift_scheduler::models::{Roster, ScheduleOutcome};
use shift_scheduler::render::{format_schedule, format_warnings};
use shift_scheduler::scheduling::ScheduleBuilder;

#[derive(Debug, Parser)]
#[command(
    name = "shift-scheduler",
    version,
    about = "Builds a weekly morning/afternoon/evening shift schedule from employee preferences."
)]
struct Cli {
    /// Directory containing scheduler.yaml (default: built-in limits).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible schedules.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Schedule the built-in ten-employee sample roster.
    Demo,
    /// Enter employees and preferences at the prompt.
    Interactive,
    /// Schedule a roster file (.yaml, .yml or .json).
    Run {
        /// Path to the roster file.
        #[arg(long)]
        roster: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match real_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_cancelled(&e) => {
            println!("Exiting.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<SchedulerError>()
        .is_some_and(SchedulerError::is_cancelled)
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(dir) => *ConfigLoader::load(dir)
            .with_context(|| format!("loading configuration from {}", dir.display()))?
            .config(),
        None => SchedulerConfig::default(),
    };

    let roster = match &cli.cmd {
        Command::Demo => sample_roster(),
        Command::Run { roster } => ConfigLoader::load_roster(roster)
            .with_context(|| format!("loading roster from {}", roster.display()))?,
        Command::Interactive => {
            let stdin = io::stdin();
            let mut session = ConsoleSession::new(stdin.lock(), io::stdout());
            match session.gather_roster()? {
                Some(roster) => roster,
                None => {
                    println!("Exiting.");
                    return Ok(());
                }
            }
        }
    };

    let outcome = schedule(&roster, config, cli.seed);
    print_outcome(&outcome, cli.format)
}

fn schedule(roster: &Roster, config: SchedulerConfig, seed: Option<u64>) -> ScheduleOutcome {
    let builder = ScheduleBuilder::new(config);
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            builder.build_seeded(roster, seed)
        }
        None => builder.build_with_entropy(roster),
    }
}

fn print_outcome(outcome: &ScheduleOutcome, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", format_schedule(&outcome.schedule));
            print!("{}", format_warnings(&outcome.warnings));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outcome).context("serializing schedule")?;
            println!("{}", json);
        }
    }
    Ok(())
}
