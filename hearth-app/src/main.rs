use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

mod config;
mod plotting;
mod report;
mod telemetry;
mod workflow;

/// Estimate annual household energy use from a survey export.
#[derive(Debug, Parser)]
#[command(name = "hearth", version, about)]
struct Cli {
    /// Survey export, one household per row (CSV)
    input: String,

    /// YAML estimator profile; any value it omits keeps its built-in default
    #[arg(long)]
    profile: Option<String>,

    /// Directory under which a timestamped run directory is created
    #[arg(long, default_value = "./data/runs")]
    output_dir: String,

    /// Also write one CSV row of results per household
    #[arg(long)]
    results_csv: bool,

    /// Skip chart generation
    #[arg(long)]
    no_plots: bool,
}

fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    println!("--- Hearth Household Energy Estimator ---");

    let config = config::load_profile(cli.profile.as_deref())?;

    let output_dir = format!(
        "{}/survey_{}",
        cli.output_dir,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Keep the profile next to the results for traceability
    if let Some(profile) = &cli.profile {
        fs::copy(profile, Path::new(&output_dir).join("profile.yaml"))
            .with_context(|| format!("Failed to copy profile into {}", output_dir))?;
    }

    let options = workflow::RunOptions {
        results_csv: cli.results_csv,
        plots: !cli.no_plots,
    };
    let summary = workflow::run_batch(&cli.input, &config, &output_dir, &options)?;

    println!(
        "\nProcessed {} households ({} skipped). Results are in '{}'",
        summary.households_processed, summary.households_failed, output_dir
    );

    Ok(())
}
