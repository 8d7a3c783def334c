use std::{io, path::PathBuf, process::ExitCode};

use brackets_core::{Config, UnknownChars};
use clap::Parser;

mod diagnostics;
mod error;
mod files;
mod input;
mod settings;

use error::Error;
use input::{Options, Summary};

/// A validator for bracket sequences, one per input line
#[derive(Parser, Debug)]
#[command(name = "brackets", version, about)]
struct Args {
    /// Files to validate (reads from stdin if none provided)
    #[arg()]
    files: Vec<PathBuf>,

    /// Expect a count header: the first line gives the number of cases
    #[arg(long)]
    counted: bool,

    /// Suppress per-line output; the exit code signals the result
    #[arg(long, short)]
    quiet: bool,

    /// Render a diagnostic on stderr for each invalid line
    #[arg(long)]
    explain: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to treat characters outside the six bracket symbols
    #[arg(long, value_enum)]
    unknown_chars: Option<UnknownChars>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match settings::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    if let Some(policy) = args.unknown_chars {
        config.unknown_chars = policy;
    }

    let options = Options {
        quiet: args.quiet,
        explain: args.explain,
    };

    match run(&args, &config, options) {
        Ok(summary) => ExitCode::from(exit_status(args.quiet, summary)),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args, config: &Config, options: Options) -> Result<Summary, Error> {
    if args.files.is_empty() {
        run_stdin(args, config, options)
    } else if args.counted {
        Err(Error::CountedWithFiles)
    } else {
        files::run(&args.files, config, options)
    }
}

/// Exit status for a completed run: 1 under `--quiet` when any line was
/// invalid, 0 otherwise.
const fn exit_status(quiet: bool, summary: Summary) -> u8 {
    if quiet && summary.invalid > 0 { 1 } else { 0 }
}

fn run_stdin(args: &Args, config: &Config, options: Options) -> Result<Summary, Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.counted {
        input::run_counted(stdin.lock(), &mut out, "stdin", config, options)
    } else {
        input::run_stream(stdin.lock(), &mut out, "stdin", config, options)
    }
}
