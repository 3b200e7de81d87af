use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

use tracker_stats::cli::{prompt, Cli};
use tracker_stats::config::TrackerStatsConfig;
use tracker_stats::export::{write_report, OutputFormat};
use tracker_stats::stats::aggregate;
use tracker_stats::telemetry::init_telemetry;
use tracker_stats::tuleap::TrackerClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    TrackerStatsConfig::load_env_file()?;
    init_telemetry()?;
    let config = TrackerStatsConfig::load(cli.config.as_deref())?;
    let client = TrackerClient::new(&config.api)?;

    let projects = client.projects().await?;
    let Some(project) = prompt::select_item(&projects, "project")? else {
        return Ok(());
    };

    let trackers = client.project_trackers(project).await?;
    let Some(tracker) = prompt::select_item(&trackers, "tracker")? else {
        return Ok(());
    };

    if !client.has_artifacts(tracker.id).await? {
        println!("No artifact was found");
        return Ok(());
    }

    let stem = match &cli.output {
        Some(name) => prompt::filename_stem(name.trim()),
        None => prompt::prompt_filename("Choose a file name: ")?,
    };
    let format = match cli.format {
        Some(format) => format,
        None => match prompt::select_item(&OutputFormat::ALL, "format")? {
            Some(format) => *format,
            None => return Ok(()),
        },
    };

    let path = PathBuf::from(format!("{}.{}", stem, format.extension()));
    println!("The stats will be saved to {}", path.display());
    println!("Analyzing...");

    let artifacts = client.tracker_artifacts(tracker.id).await?;
    let stats = aggregate(&artifacts, Utc::now())?;
    if stats.uncategorized > 0 {
        tracing::info!(
            count = stats.uncategorized,
            "artifacts without a status were left out of the table"
        );
    }

    let report = stats.into_report(&tracker.label);
    write_report(&report, &path, format)?;
    println!("The results are ready");

    Ok(())
}
