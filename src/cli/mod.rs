use clap::Parser;
use std::path::PathBuf;

use crate::export::OutputFormat;

pub mod prompt;

#[derive(Parser)]
#[command(name = "tracker-stats")]
#[command(about = "Per-column statistics for a Tuleap-style tracker")]
#[command(long_about = "tracker-stats walks you through picking a project and a tracker, \
                       fetches every artifact of that tracker, and exports per-column \
                       statistics (item count, mean time in column, oldest item) to a \
                       CSV, JSON or Excel file.")]
pub struct Cli {
    /// Path to an alternate configuration file
    #[arg(long, value_name = "FILE", help = "Read configuration from FILE instead of tracker-stats.toml")]
    pub config: Option<PathBuf>,

    /// Output file name; skips the interactive filename prompt
    #[arg(long, short = 'o', help = "Output file name (the format's extension is appended)")]
    pub output: Option<String>,

    /// Output format; skips the interactive format menu
    #[arg(long, value_enum, help = "Output format: csv, json or xlsx")]
    pub format: Option<OutputFormat>,
}
