use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

use crate::stats::StatsReport;

/// Pretty-printed JSON array of row objects.
pub fn write(report: &StatsReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create {}", path.display()))?;
    serde_json::to_writer_pretty(file, &report.rows)?;
    Ok(())
}
