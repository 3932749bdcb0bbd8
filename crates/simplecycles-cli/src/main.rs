use clap::Parser;
use simplecycles_core::SearchOptions;
use tracing_subscriber::EnvFilter;

mod cli;
mod cmd;
mod error;
mod io;
mod load;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::cmd::Timeout;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = dispatch(&cli) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` wins over the verbosity
/// flags when set.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    let timeout = Timeout::start(cli.timeout_ms);

    match &cli.command {
        Command::Enumerate {
            file,
            mode,
            dedup,
            max_cycles,
            count,
        } => {
            let graph = read_graph(file, cli)?;
            let options = SearchOptions::default()
                .mode((*mode).into())
                .dedup((*dedup).into())
                .max_cycles(*max_cycles);
            cmd::enumerate::run(&graph, options, *count, &timeout, cli.format)
        }
        Command::Through {
            file,
            vertex,
            mode,
            dedup,
        } => {
            let graph = read_graph(file, cli)?;
            let options = SearchOptions::default()
                .mode((*mode).into())
                .dedup((*dedup).into());
            cmd::through::run(&graph, vertex, options, &timeout, cli.format)
        }
        Command::Inspect { file } => {
            let graph = read_graph(file, cli)?;
            cmd::inspect::run(&graph, cli.format)
        }
    }
}

fn read_graph(
    file: &PathOrStdin,
    cli: &Cli,
) -> Result<simplecycles_core::EdgeListGraph, CliError> {
    let content = io::read_input(file, cli.max_file_size)?;
    tracing::debug!(
        source = %io::source_label(file),
        bytes = content.len(),
        "input read"
    );
    load::load_graph(&content, cli)
}
