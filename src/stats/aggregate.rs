use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;

use crate::tuleap::Artifact;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("artifact {artifact_id} carries unparsable timestamp {value:?}: {source}")]
    Timestamp {
        artifact_id: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Aggregated statistics for one workflow column.
///
/// Holds the raw accumulation only: the mean is derived later, in
/// `ColumnStats::into_report`, never during the fold.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBucket {
    pub count: u64,
    pub total_duration_seconds: f64,
    pub oldest_submitted_on: DateTime<FixedOffset>,
    pub oldest_title: String,
}

impl StatusBucket {
    fn first(duration: f64, submitted_on: DateTime<FixedOffset>, title: &str) -> Self {
        Self {
            count: 1,
            total_duration_seconds: duration,
            oldest_submitted_on: submitted_on,
            oldest_title: title.to_string(),
        }
    }

    fn fold(&mut self, duration: f64, submitted_on: DateTime<FixedOffset>, title: &str) {
        self.count += 1;
        self.total_duration_seconds += duration;
        if submitted_on < self.oldest_submitted_on {
            self.oldest_submitted_on = submitted_on;
            self.oldest_title = title.to_string();
        }
    }
}

/// Result of folding one tracker's artifacts: one bucket per distinct
/// status label, plus a count of artifacts with no status at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStats {
    pub buckets: BTreeMap<String, StatusBucket>,
    pub uncategorized: u64,
}

/// Fold a list of artifacts into per-column statistics in a single pass.
///
/// `now` is the caller's reference time; a submission timestamp in the
/// future (clock skew between us and the server) yields a negative duration
/// and is folded in like any other value.
pub fn aggregate(artifacts: &[Artifact], now: DateTime<Utc>) -> Result<ColumnStats, StatsError> {
    let mut stats = ColumnStats::default();

    for artifact in artifacts {
        let Some(status) = artifact.status.as_deref() else {
            stats.uncategorized += 1;
            continue;
        };

        let submitted_on = DateTime::parse_from_rfc3339(&artifact.submitted_on).map_err(
            |source| StatsError::Timestamp {
                artifact_id: artifact.id,
                value: artifact.submitted_on.clone(),
                source,
            },
        )?;
        let duration = now.signed_duration_since(submitted_on).as_seconds_f64();

        match stats.buckets.entry(status.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(StatusBucket::first(duration, submitted_on, &artifact.title));
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().fold(duration, submitted_on, &artifact.title);
            }
        }
    }

    Ok(stats)
}
