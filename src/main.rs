use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use sapper::{
    engine::EngineOptions,
    referee::{handle_command, parse_command, Flow},
    Engine,
};

/// Luzhanqi playing agent speaking the referee protocol on stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "sapper", version, about)]
struct Args {
    /// Weight table for the evaluator: fixed or random
    #[arg(long, default_value = "fixed")]
    weights: String,

    /// Seed for random weights
    #[arg(long)]
    seed: Option<u64>,

    /// Log malformed messages and keep playing instead of exiting
    #[arg(long)]
    lenient: bool,

    /// Log filter, overriding RUST_LOG
    #[arg(long)]
    log: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut options = EngineOptions::default();
    let configured = options
        .set_option("weights", &args.weights)
        .and_then(|_| options.set_option("strictmode", &(!args.lenient).to_string()));
    if let Err(err) = configured {
        error!("{:#}", err);
        return ExitCode::FAILURE;
    }
    options.seed = args.seed;

    let mut engine = Engine::with_options(options);
    let stdin = io::stdin();
    let stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = match line {
            Ok(input) => input,
            Err(err) => {
                error!("failed to read from the referee: {}", err);
                return ExitCode::FAILURE;
            }
        };

        let result = parse_command(&input).and_then(|cmd| match cmd {
            Some(cmd) => handle_command(&cmd, &mut engine, &mut stdout.lock()),
            None => Ok(Flow::Continue),
        });

        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit(code)) => return ExitCode::from(code),
            Err(err) => {
                if engine.options.strict_mode {
                    error!(input = %input.trim(), "{:#}", err);
                    return ExitCode::FAILURE;
                } else {
                    warn!(input = %input.trim(), "{:#}", err);
                }
            }
        }
    }

    ExitCode::SUCCESS
}
