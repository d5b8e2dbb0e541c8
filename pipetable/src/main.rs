//! # pipetable
//!
//! Print sample data sources as aligned, pipe-delimited text tables.
//!
//! ## Usage
//!
//! ```bash
//! # Both sample tables
//! pipetable
//!
//! # Only the department table, left-aligned
//! pipetable department --align left
//!
//! # Rendered tables as JSON
//! pipetable books --output json
//!
//! # Show renderer debug logs on stderr
//! RUST_LOG=pipetablelib=debug pipetable
//! ```

mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use pipetablelib::{
    render_table, Alignment, BookCollection, Department, RenderOptions, RenderedTable,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::{render_output, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("pipetable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render tabular data as aligned, pipe-delimited text")
        .arg(
            Arg::new("dataset")
                .help("Which sample data source to render")
                .value_parser(["department", "books", "all"])
                .default_value("all"),
        )
        .arg(
            Arg::new("align")
                .short('a')
                .long("align")
                .value_parser(["left", "right"])
                .default_value("right")
                .help("Cell alignment within each column"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .default_value("warn")
                .help("Log level for stderr diagnostics (RUST_LOG takes precedence)"),
        )
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Render the named sample data source(s)
fn render_dataset(
    dataset: &str,
    options: &RenderOptions,
) -> Result<Vec<RenderedTable>, anyhow::Error> {
    let tables = match dataset {
        "department" => vec![render_table(&Department::sample(), options)?],
        "books" => vec![render_table(&BookCollection::sample(), options)?],
        "all" => vec![
            render_table(&Department::sample(), options)?,
            render_table(&BookCollection::sample(), options)?,
        ],
        other => return Err(anyhow::anyhow!("Unknown dataset: {}", other)),
    };
    Ok(tables)
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let dataset = matches
        .get_one::<String>("dataset")
        .map(|s| s.as_str())
        .unwrap_or("all");
    let alignment = matches
        .get_one::<String>("align")
        .map(|s| s.parse::<Alignment>())
        .transpose()?
        .unwrap_or_default();
    let mode = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputMode>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?
        .unwrap_or_default();

    let options = RenderOptions::new().alignment(alignment);
    debug!(dataset, %alignment, ?mode, "rendering");

    let tables = render_dataset(dataset, &options)?;
    let output = render_output(&tables, mode)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(|s| s.as_str())
        .unwrap_or("warn");
    setup_logging(level);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
