//! Command-line front end for `ll1check`.
//!
//! Usage:
//!   ll1check [OPTIONS] `<PROGRAM>`
//!
//! Prints `Yes` and exits with status 0 when `<PROGRAM>` is a valid
//! expression, prints `No` and exits with status 2 otherwise. Invocation
//! errors exit with status 1.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use ll1check::{Outcome, Recognizer, RecognizerOptions};
use log::LevelFilter;

/// Exit status for an accepted program.
const EXIT_ACCEPTED: u8 = 0;
/// Exit status for invocation errors.
const EXIT_USAGE: u8 = 1;
/// Exit status for a rejected program.
const EXIT_REJECTED: u8 = 2;

/// Check an arithmetic expression for syntax errors.
#[derive(Debug, Parser)]
#[command(name = "ll1check", version, about)]
struct Cli {
    /// The program text to check, e.g. "(3+4)*2".
    #[arg(allow_hyphen_values = true)]
    program: String,

    /// Print why the program was rejected on stderr.
    #[arg(long)]
    explain: bool,

    /// Print the productions applied, one per line, before the verdict.
    #[arg(long)]
    trace: bool,

    /// Accept multi-digit numbers that start with 0.
    #[arg(long)]
    allow_leading_zeros: bool,

    /// Reject programs whose parentheses nest deeper than N (unlimited by default).
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> RecognizerOptions {
        RecognizerOptions {
            allow_leading_zeros: self.allow_leading_zeros,
            max_depth: self.max_depth,
            record_derivation: self.trace,
            ..RecognizerOptions::default()
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    let level = match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.format_timestamp(None).init();
}

/// Writes the derivation (empty unless `--trace`) followed by the verdict.
fn write_report(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    for production in &outcome.derivation {
        writeln!(out, "{production}")?;
    }
    writeln!(out, "{}", if outcome.is_accepted() { "Yes" } else { "No" })
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            init_logging(0);
            if let Err(io) = e.print() {
                log::error!("failed to print usage: {io}");
            }
            return ExitCode::from(EXIT_USAGE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };
    init_logging(cli.verbose);

    let outcome = Recognizer::new(&cli.program, cli.options()).run();

    if let Err(e) = write_report(&mut io::stdout().lock(), &outcome) {
        log::error!("failed to write verdict: {e}");
    }

    match outcome.result {
        Ok(()) => ExitCode::from(EXIT_ACCEPTED),
        Err(err) => {
            if cli.explain {
                eprintln!("{err}");
            }
            ExitCode::from(EXIT_REJECTED)
        }
    }
}
