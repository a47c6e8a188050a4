use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format;

use self::args::Args;
use self::evaluate::{evaluate, Format};

mod args;
mod evaluate;

fn main() -> ExitCode {
    let args = Args::parse();

    let event_format = format().with_target(false).without_time();

    // Results go to stdout, so logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .event_format(event_format)
        .with_writer(io::stderr)
        .init();

    let output_format = if args.json {
        Format::Json
    } else {
        Format::Notation
    };

    match evaluate(&args.command, output_format) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Could not evaluate command.");
            ExitCode::FAILURE
        }
    }
}
