//! Command-line interface for fasta-dict.
//!
//! ## Usage
//!
//! ```text
//! # Dictionary for a reference, written next to it
//! fasta-dict -o hg38.dict hg38.fa.gz
//!
//! # Add assembly, species and UCSC/NCBI aliases
//! fasta-dict -A -a GRCh38 -s "Homo sapiens" hg38.fa
//!
//! # Read from a pipe; no UR tag unless one is given
//! zcat hg38.fa.gz | fasta-dict -u https://example.org/hg38.fa
//! ```

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::core::config::RunConfig;
use crate::parsing::input::InputSource;
use crate::pipeline;

#[derive(Parser)]
#[command(name = "fasta-dict")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Create a sequence dictionary file from a FASTA file")]
#[command(
    long_about = "fasta-dict reads a FASTA file (plain or gzip-compressed) and writes a SAM-style sequence dictionary.\n\nEach sequence becomes one @SQ line with its name, length and the MD5 of its uppercased bases, plus optional alias, URI, assembly and species tags."
)]
pub struct Cli {
    /// FASTA file, optionally gzip-compressed.
    /// Use '-' (or omit when piping) to read standard input
    pub input: Option<PathBuf>,

    /// Assembly name (AS tag)
    #[arg(short = 'a', long, value_name = "STR")]
    pub assembly: Option<String>,

    /// Add an AN tag by adding/removing 'chr'
    #[arg(short = 'A', long, visible_alias = "alternative-name")]
    pub alias: bool,

    /// Do not print the @HD line
    #[arg(short = 'H', long)]
    pub no_header: bool,

    /// File to write the dictionary to [default: standard output]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Species (SP tag)
    #[arg(short, long, value_name = "STR")]
    pub species: Option<String>,

    /// URI for the UR tag [default: file:///abs/path/to/file.fa]
    #[arg(short, long, value_name = "STR")]
    pub uri: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Where to read from. `None` when no input was named and standard input
    /// is an interactive terminal.
    pub fn input_source(&self) -> Option<InputSource> {
        match &self.input {
            Some(path) => Some(InputSource::from_arg(path)),
            None if io::stdin().is_terminal() => None,
            None => Some(InputSource::Stdin),
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        RunConfig {
            output: cli.output.clone(),
            alias: cli.alias,
            header: !cli.no_header,
            assembly: cli.assembly.clone(),
            species: cli.species.clone(),
            uri: cli.uri.clone(),
        }
    }
}

/// Print the usage text to standard error.
pub fn print_usage() {
    eprint!("{}", Cli::command().render_help());
}

/// Report an argument parsing failure. Help and usage errors go to standard
/// error and fail; `--version` goes to standard output and succeeds.
pub fn report_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayVersion => {
            print!("{}", err.render());
            ExitCode::SUCCESS
        }
        _ => {
            eprint!("{}", err.render());
            ExitCode::FAILURE
        }
    }
}

/// Execute a dictionary run
///
/// # Errors
///
/// Returns an error if the input cannot be read or the dictionary cannot be written.
pub fn run(cli: &Cli, input: &InputSource) -> anyhow::Result<()> {
    let config = RunConfig::from(cli);
    pipeline::run(&config, input)?;
    Ok(())
}
