//! Command implementations for the countryref CLI.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use countryref_core::{ReconcileOptions, ReconcileStats, reconcile};
use countryref_ingest::{discover_snapshots, snapshot_file_name};
use countryref_model::SourceId;
use countryref_output::{write_csv, write_json};

use crate::cli::{BuildArgs, OutputFormatArg};

/// What a build run produced, for the summary printer.
pub struct BuildReport {
    pub stats: ReconcileStats,
    pub missing_sources: Vec<SourceId>,
    pub output: Option<PathBuf>,
}

/// Run the full pipeline: discover snapshots, reconcile, serialize.
pub fn run_build(args: &BuildArgs) -> Result<BuildReport> {
    let snapshots = discover_snapshots(&args.data_dir)
        .with_context(|| format!("discover snapshots in {}", args.data_dir.display()))?;
    let missing_sources = snapshots.missing();
    for source in &missing_sources {
        warn!(source = %source, "proceeding without source");
    }

    let raw_values = snapshots.read_all()?;
    let options = ReconcileOptions {
        drop_missing_idc: args.ignore_missing_idc,
    };
    let outcome = reconcile(&raw_values, &options);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            write_records(&outcome.records, file, args.format)?;
            info!(path = %path.display(), records = outcome.records.len(), "table written");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_records(&outcome.records, &mut handle, args.format)?;
            handle.flush().context("flush stdout")?;
        }
    }

    Ok(BuildReport {
        stats: outcome.stats,
        missing_sources,
        output: args.output.clone(),
    })
}

fn write_records<W: Write>(
    records: &[countryref_model::CountryRecord],
    writer: W,
    format: OutputFormatArg,
) -> Result<()> {
    match format {
        OutputFormatArg::Csv => write_csv(records, writer),
        OutputFormatArg::Json => write_json(records, writer),
    }
}

/// Print the known source adapters and their snapshot file names.
pub fn run_sources() -> Result<()> {
    for source in SourceId::ALL {
        println!(
            "{:<12} {:<18} {}",
            source.as_str(),
            snapshot_file_name(source),
            source.display_name()
        );
    }
    Ok(())
}
