use std::path::Path;

use anyhow::{Context, Result};

use crate::stats::StatsReport;

/// One CSV record per bucket; the header row comes from the field names of
/// `StatsRow`.
pub fn write(report: &StatsReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("could not create {}", path.display()))?;
    for row in &report.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
