use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::check::CheckArgs;

/// Conditional pipe command line interface
///
/// Builds a user, checks it against a set of conditional pipes and reports
/// whether every pipe holds. Exits with 0 when granted, 1 when denied and 2
/// on errors.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Print the decision as JSON
    #[clap(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a user against the selected pipes
    Check(CheckArgs),

    /// Check an active admin with read and write permissions
    Demo,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let decision = match &cli.command {
        Commands::Check(args) => commands::check::execute_check(args),
        Commands::Demo => commands::demo::execute_demo(),
    };

    match decision.and_then(|decision| commands::report(&decision, cli.json).map(|_| decision)) {
        Ok(decision) if decision.granted => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
