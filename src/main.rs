use clap::{CommandFactory, Parser};
use colored::Colorize;
use fleet_router::config::SearchConfig;
use fleet_router::error::AppError;
use fleet_router::planner;
use fleet_router::planner::report::PlanOutcome;
use fleet_router::registry::Registry;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SOLUTION_FILE: &str = "solution.txt";

/// Assigns candidate flight legs to a fleet so every flying aircraft returns home and total
/// profit is maximal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the problem file (A/P/C/L records)
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = SearchConfig::from_env();

    match run(&args.input, Path::new(SOLUTION_FILE), &config) {
        Ok(PlanOutcome::Solved(solution)) => {
            println!("{}", solution.table());
            println!(
                "{} Total profit {:.1}. Results in '{}'",
                "Solved.".green().bold(),
                solution.total_profit,
                SOLUTION_FILE
            );
            ExitCode::SUCCESS
        }
        Ok(PlanOutcome::Infeasible) => {
            println!(
                "{} No assignment closes every loop. Results in '{}'",
                "Infeasible.".yellow().bold(),
                SOLUTION_FILE
            );
            ExitCode::SUCCESS
        }
        Ok(PlanOutcome::Aborted) => {
            eprintln!(
                "{} Search budget exhausted before a result; nothing written",
                "Aborted.".red().bold()
            );
            ExitCode::FAILURE
        }
        Err(err @ AppError::Read { .. }) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            eprintln!("{}", Args::command().render_usage());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// Loads the instance, searches, and writes the solution file unless the search was aborted.
fn run(input: &Path, output: &Path, config: &SearchConfig) -> Result<PlanOutcome, AppError> {
    let registry = Registry::load_from_file(input)?;
    info!(
        aircraft = registry.fleet().len(),
        legs = registry.legs().len(),
        max_profit = registry.global_max_profit(),
        "instance loaded from {}",
        input.display()
    );

    let outcome = planner::plan(&registry, config);
    if outcome != PlanOutcome::Aborted {
        std::fs::write(output, outcome.to_string()).map_err(|source| AppError::Write {
            path: output.to_path_buf(),
            source,
        })?;
    }
    Ok(outcome)
}
