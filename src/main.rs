#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use stride::{OutputFormat, cli, dispatch, dlog, utils};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = match &cli.input {
        Some(path) => utils::load_packages(path)?,
        None => utils::sample_packages(),
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    dlog!("packages={} format={:?}", packages.len(), format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = dispatch::run_batch_as(&packages, &mut out, format);
    out.flush()?;

    if cli.strict && !report.is_clean() {
        let indexes: Vec<String> = report
            .failures
            .iter()
            .map(|f| format!("#{} ({})", f.index, f.workout_type))
            .collect();
        anyhow::bail!(
            "{} of {} packages failed: {}",
            report.failures.len(),
            packages.len(),
            indexes.join(", ")
        );
    }

    Ok(())
}
