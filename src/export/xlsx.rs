use std::path::Path;

use anyhow::Result;
use rust_xlsxwriter::Workbook;

use crate::stats::StatsReport;

const HEADER: [&str; 5] = [
    "column",
    "items_number",
    "mean_duration",
    "oldest",
    "oldest_name",
];

/// One worksheet named after the tracker, a header row, then one row per
/// bucket. Column widths match the original spreadsheet layout (wider for
/// the timestamp and the oldest item's title).
pub fn write(report: &StatsReport, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&report.tracker)?;

    for (col, name) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }

    for (i, row) in report.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &row.column)?;
        sheet.write_number(r, 1, row.items_number as f64)?;
        sheet.write_string(r, 2, &row.mean_duration)?;
        sheet.write_string(r, 3, &row.oldest.format("%Y-%m-%d %H:%M:%S").to_string())?;
        sheet.write_string(r, 4, &row.oldest_name)?;
    }

    for col in 0..3u16 {
        sheet.set_column_width(col, 18)?;
    }
    sheet.set_column_width(3, 20)?;
    sheet.set_column_width(4, 30)?;

    workbook.save(path)?;
    Ok(())
}
