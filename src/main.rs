//! quipcli CLI entry point.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use quipcli::cli::Args;
use quipcli::engine::{Pipeline, PipelineError};
use quipcli::fetch::HttpFetcher;
use quipcli::speech::{GoogleTtsClient, SpeechEmitter, SpeechError};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.verbose) {
        eprintln!("warning: {err:#}");
    }

    let color = !args.no_color && colored::control::SHOULD_COLORIZE.should_colorize();

    match run(&args, color && io::stdout().is_terminal()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let line = err.to_line();
            eprintln!("{}", line.render(color && io::stderr().is_terminal()));
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

fn run(args: &Args, color: bool) -> Result<(), PipelineError> {
    let fetcher = HttpFetcher::new(args.fetch_config())?;
    let mut pipeline = Pipeline::new(fetcher).with_color(color);

    if args.speak {
        let config = args.speech_config();
        let client = GoogleTtsClient::new(&config).map_err(SpeechError::from)?;
        let emitter = SpeechEmitter::new(client, config.language, config.output);
        pipeline = pipeline.with_speech(emitter);
    }

    let mut stdout = io::stdout().lock();
    pipeline.run(args.command.endpoint(), &mut stdout)?;

    Ok(())
}
