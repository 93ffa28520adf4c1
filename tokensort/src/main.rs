//! # tokensort
//!
//! A CLI tool that sorts or tallies integers, words, or lines.
//!
//! ## Overview
//!
//! tokensort is built on top of tokensortlib. It reads all of standard input
//! (or a file), sorts the tokens in natural order or counts how often each
//! distinct token occurs, and prints the report (or writes it to a file).
//!
//! ## Usage
//!
//! ```bash
//! # Sort words from stdin
//! echo "pear apple fig" | tokensort
//!
//! # Sort numbers
//! tokensort -dataType long -inputFile numbers.txt
//!
//! # Count lines by frequency and save the report
//! tokensort -dataType line -sortingType byCount -inputFile log.txt -outputFile report.txt
//! ```
//!
//! Errors are printed to standard output and the process still exits
//! successfully.

mod args;
mod logging;

use std::io;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use tokensortlib::SortEngine;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tokensort")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Sort or tally integers, words, or lines")
        .after_help(
            "Flags (case-insensitive, each followed by a value):\n  \
             -dataType <long|word|line>        Token kind [default: word]\n  \
             -sortingType <natural|byCount>    Report mode [default: natural]\n  \
             -inputFile <path>                 Read from a file instead of stdin\n  \
             -outputFile <path>                Write to a file instead of stdout",
        )
        .arg(
            Arg::new("args")
                .help("Flag/value pairs, e.g. -dataType long -sortingType byCount")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .action(ArgAction::Append),
        )
}

fn run(raw_args: &[String]) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let options = args::scan_args(raw_args, &mut stdout)?;
    SortEngine::new(options).run(&mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init_logging();

    let matches = build_command().get_matches();
    let raw_args: Vec<String> = matches
        .get_many::<String>("args")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    if let Err(e) = run(&raw_args) {
        tracing::debug!(error = ?e, "run failed");
        println!("{}", e);
    }
    ExitCode::SUCCESS
}
