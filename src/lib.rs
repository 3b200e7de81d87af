// tracker-stats library - per-column statistics for tracker artifacts
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod export;
pub mod stats;
pub mod telemetry;
pub mod tuleap;

// Re-export key types for easy access
pub use config::{ApiConfig, TrackerStatsConfig};
pub use export::{write_report, OutputFormat};
pub use stats::{aggregate, human_duration, ColumnStats, StatsReport, StatsRow, StatusBucket};
pub use telemetry::init_telemetry;
pub use tuleap::{Artifact, PageCursor, Project, Tracker, TrackerClient, TrackerError};
