use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use crate::stats::StatsReport;

pub mod csv;
pub mod json;
pub mod xlsx;

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
    Xlsx,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Xlsx];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Xlsx => "xlsx",
        }
    }
}

/// Write the summary table to `path` in the chosen format.
pub fn write_report(report: &StatsReport, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => csv::write(report, path),
        OutputFormat::Json => json::write(report, path),
        OutputFormat::Xlsx => xlsx::write(report, path),
    }
}
