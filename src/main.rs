//! Speleo: can this cave be crossed?
//!
//! Usage:
//!   speleo [OPTIONS]
//!
//! The mode and its parameters are read from stdin:
//!   A) type in a map and see which regions are reachable from the top row
//!   B) give an accessibility and a sample size, get the crossing rate
//!   C) give a sample size, get the crossing rate for every accessibility
//!
//! Examples:
//!   echo "B 20 0.6 1000" | speleo
//!   echo "C 20 500" | speleo --seed 42 --json -

use std::io::{self, Write};

use clap::Parser;
use log::info;

use speleo::console::Console;
use speleo::error::SpeleoError;
use speleo::simulator::{run_simulation, SimReport};

/// Estimate the probability that a randomly obstructed cave can be crossed
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also write the report as JSON to PATH ("-" for a timestamped file)
    #[arg(long, value_name = "PATH")]
    json: Option<String>,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), SpeleoError> {
    let args = Args::parse();
    init_logger(args.verbose);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let config = console.read_config()?.with_seed(args.seed);
    info!(
        "mode {}, cave size {}, sample size {}",
        config.mode.exec_mode().as_char(),
        config.cave_size,
        config.sample_size
    );

    let report = run_simulation(&config)?;

    let mut out = console.into_output();
    write!(out, "{}", report.to_text())?;
    out.flush()?;

    if let Some(path) = args.json {
        write_json(&report, &path)?;
    }

    Ok(())
}

fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::new()
        .filter_or("SPELEO_LOG", default_level)
        .write_style("SPELEO_LOG_STYLE");
    env_logger::init_from_env(env);
}

fn write_json(report: &SimReport, path: &str) -> Result<(), SpeleoError> {
    let filename = if path == "-" {
        format!(
            "speleo_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        )
    } else {
        path.to_string()
    };

    std::fs::write(&filename, report.to_json()?)?;
    eprintln!("JSON report saved to: {}", filename);
    Ok(())
}
