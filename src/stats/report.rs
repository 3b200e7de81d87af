use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::aggregate::ColumnStats;
use super::duration::human_duration;

/// One exported row per workflow column.
///
/// `mean_duration` is the lossy human-readable rendering; `oldest` is the
/// submission wall-clock with its UTC offset stripped, matching what ends up
/// in the spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRow {
    pub column: String,
    pub items_number: u64,
    pub mean_duration: String,
    pub oldest: NaiveDateTime,
    pub oldest_name: String,
}

/// The finished summary table for one tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub tracker: String,
    pub rows: Vec<StatsRow>,
}

impl ColumnStats {
    /// Second pass over the folded buckets: derive each column's mean
    /// duration and shape the rows for export. Rows come out ordered by
    /// column label.
    pub fn into_report(self, tracker: &str) -> StatsReport {
        let rows = self
            .buckets
            .into_iter()
            .map(|(column, bucket)| StatsRow {
                column,
                items_number: bucket.count,
                mean_duration: human_duration(
                    bucket.total_duration_seconds / bucket.count as f64,
                ),
                oldest: bucket.oldest_submitted_on.naive_local(),
                oldest_name: bucket.oldest_title,
            })
            .collect();

        StatsReport {
            tracker: tracker.to_string(),
            rows,
        }
    }
}
