//! FLOWTRACE command-line front end
//!
//! Reads a network description, runs Edmonds-Karp between the requested
//! terminals (node `0` and the last node by default) and prints the trace
//! and summary. Any failure prints a diagnostic and exits non-zero.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

mod args;
mod report;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use log::{info, warn};
use thiserror::Error;

use flowtrace_core::{
    default_terminals, parse_file, AlgorithmError, FlowValidator, MaxFlowSolver, NetworkError,
    ParseError, SolverConfig,
};

use crate::args::{Args, ArgsError, USAGE};
use crate::report::RunReport;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(#[from] ArgsError),

    #[error("Error reading config file {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Invalid config file {}: {source}", .path.display())]
    ConfigParse { path: PathBuf, source: serde_json::Error },

    #[error("Error in input file: {0}")]
    Parse(#[from] ParseError),

    #[error("Solver error: {0}")]
    Solver(#[from] AlgorithmError),

    #[error("Validation error: {0}")]
    Validation(#[from] NetworkError),

    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("Error writing JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Solver(AlgorithmError::InternalConsistency(_)) => 70,
            _ => 1,
        }
    }
}

fn load_config(args: &Args) -> Result<SolverConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            SolverConfig::from_json(&text).map_err(|source| CliError::ConfigParse {
                path: path.clone(),
                source,
            })?
        }
        None => SolverConfig::default(),
    };

    if args.quiet {
        config.detailed_logging = false;
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;

    info!("Parsing network from file: {}", args.input.display());
    let mut network = parse_file(&args.input)?;

    let (default_source, default_sink) = default_terminals(&network);
    let source = args.source.unwrap_or(default_source);
    let sink = args.sink.unwrap_or(default_sink);

    info!("Running Edmonds-Karp algorithm...");
    let solver = MaxFlowSolver::new(config);
    let started = Instant::now();
    let result = solver.find_max_flow(&mut network, source, sink)?;
    let elapsed = started.elapsed();

    let conserved = network.is_flow_conserved(source, sink);
    if !conserved {
        warn!("Flow conservation property is violated!");
        eprintln!("WARNING: Flow conservation property is violated!");
    }
    let validation = FlowValidator::new().validate(&network, source, sink, result.max_flow)?;
    for violation in &validation.violations {
        warn!("{}", violation);
    }

    let report = RunReport::new(source, sink, &result, &validation, conserved, elapsed);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let outcome = Args::parse(std::env::args().skip(1))
        .map_err(CliError::from)
        .and_then(run);

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            if let CliError::Usage(_) = err {
                eprintln!("{}", USAGE);
            }
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let internal = AlgorithmError::InternalConsistency(NetworkError::UnknownEdge(3));
        assert_eq!(CliError::Solver(internal).exit_code(), 70);
        assert_eq!(CliError::Usage(ArgsError::MissingInput).exit_code(), 2);

        let overflow = AlgorithmError::FlowOverflow { current: 1, added: i64::MAX };
        assert_eq!(CliError::Solver(overflow).exit_code(), 1);
        assert_eq!(CliError::Validation(NetworkError::TooFewNodes(1)).exit_code(), 1);
    }
}
