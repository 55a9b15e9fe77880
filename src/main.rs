use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod output;
mod parsing;
mod pipeline;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return cli::report_parse_error(&err),
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fasta_dict=debug,info")
    } else {
        EnvFilter::new("fasta_dict=warn")
    };

    // Dictionary text goes to stdout, so diagnostics must not
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let Some(input) = cli.input_source() else {
        cli::print_usage();
        return ExitCode::FAILURE;
    };

    match cli::run(&cli, &input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fasta-dict: {err:#}");
            ExitCode::FAILURE
        }
    }
}
