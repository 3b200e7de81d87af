pub mod aggregate;
pub mod duration;
pub mod report;

pub use aggregate::{aggregate, ColumnStats, StatsError, StatusBucket};
pub use duration::human_duration;
pub use report::{StatsReport, StatsRow};
