use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use taxdump2json::config::{
    DEFAULT_NAMES_FILENAME, DEFAULT_NODES_FILENAME, DEFAULT_OUTPUT_FILENAME,
};
use taxdump2json::{convert, ConvertConfig};

/// Convert an NCBI taxonomy dump into a compact JSON lookup keyed by tax id.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Names file (names.dmp layout, optionally .gz)
    #[arg(short = 'n', long, default_value = DEFAULT_NAMES_FILENAME)]
    names: PathBuf,

    /// Nodes file (nodes.dmp layout, optionally .gz)
    #[arg(short = 'N', long, default_value = DEFAULT_NODES_FILENAME)]
    nodes: PathBuf,

    /// JSON output file
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_FILENAME)]
    output: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let opts = Options::parse();
    init_logging(opts.verbose, opts.quiet);

    let config = ConvertConfig::new(opts.names, opts.nodes, opts.output);
    convert(&config).with_context(|| {
        format!(
            "converting {} and {} into {}",
            config.names_path.display(),
            config.nodes_path.display(),
            config.output_path.display()
        )
    })?;

    Ok(())
}
