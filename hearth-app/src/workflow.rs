use crate::{plotting, report};
use anyhow::{Context, Result};
use hearth_core::{
    aggregate::{
        cohort_averages, AggregateBreakdown, CohortAverage, ElectricityAggregate,
        TotalEnergyAggregate,
    },
    analysis::{accumulate, assess_household},
    calibrate::Calibrator,
    error::HearthError,
    estimate::Estimator,
    logger::HouseholdLogger,
    survey::{fields::columns, load_survey},
};
use hearth_schemas::profile::EstimatorConfig;
use serde::Serialize;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub struct RunOptions {
    pub results_csv: bool,
    pub plots: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub value: f64,
}

/// What a batch run produced, also written to `summary.json`.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub households_processed: usize,
    pub households_failed: usize,
    pub electricity_kwh: Vec<CategoryTotal>,
    pub total_energy_btu: Vec<CategoryTotal>,
    pub cohorts: Vec<CohortAverage>,
}

/// Runs every household in the survey export through estimation and
/// calibration, then reports and charts the aggregates.
///
/// A household that fails is logged with its row and name and skipped. A
/// missing, unreadable or empty export aborts the run.
pub fn run_batch(
    input: &str,
    config: &EstimatorConfig,
    output_dir: &str,
    options: &RunOptions,
) -> Result<BatchSummary> {
    println!("\n--- [Workflow] Estimating Household Energy Use ---");

    let estimator = Estimator::new(config)?;
    let calibrator = Calibrator::new(&config.calibration);
    let kwh_to_btu = config.fuels.kwh_to_btu;

    let rows = load_survey(input)
        .with_context(|| format!("Failed to load survey export: {}", input))?;

    let mut logger = if options.results_csv {
        let log_path = format!("{}/household_results.csv", output_dir);
        Some(
            HouseholdLogger::new(&log_path)
                .with_context(|| format!("Failed to create results log: {}", log_path))?,
        )
    } else {
        None
    };

    let mut electricity = ElectricityAggregate::new();
    let mut total_energy = TotalEnergyAggregate::new();
    let mut cohorts = Vec::new();
    let mut processed = 0;
    let mut failed = 0;

    for (row, parsed) in rows {
        let name = parsed
            .as_ref()
            .ok()
            .and_then(|survey_row| survey_row.get(columns::NAME))
            .unwrap_or("N/A")
            .to_string();

        let result = parsed.and_then(|survey_row| {
            assess_household(row, survey_row.to_household(), &estimator, &calibrator)
        });

        match result {
            Ok(assessment) => {
                report::print_household(&assessment);
                accumulate(&assessment, kwh_to_btu, &mut electricity, &mut total_energy);
                cohorts.extend(assessment.cohort);
                if let Some(logger) = logger.as_mut() {
                    logger
                        .log_household(&assessment)
                        .map_err(HearthError::LoggingError)?;
                }
                processed += 1;
            }
            Err(err) => {
                error!(row, household = %name, error = %err, "skipping household");
                failed += 1;
            }
        }
    }
    if let Some(logger) = logger {
        logger.finish().map_err(HearthError::LoggingError)?;
    }
    info!(processed, failed, "survey batch complete");

    let summary = BatchSummary {
        households_processed: processed,
        households_failed: failed,
        electricity_kwh: labeled_totals(&electricity),
        total_energy_btu: labeled_totals(&total_energy),
        cohorts: cohort_averages(&cohorts),
    };
    report::print_batch_summary(&summary);

    let summary_path = Path::new(output_dir).join("summary.json");
    let summary_json = serde_json::to_string_pretty(&summary)?;
    fs::write(&summary_path, summary_json)
        .with_context(|| format!("Failed to write summary: {:?}", summary_path))?;

    if options.plots {
        plotting::generate_all_plots(output_dir, &electricity, &total_energy, &summary.cohorts)?;
    }

    Ok(summary)
}

fn labeled_totals<K: Ord + Copy + Display>(aggregate: &AggregateBreakdown<K>) -> Vec<CategoryTotal> {
    aggregate
        .iter()
        .map(|(key, value)| CategoryTotal {
            category: key.to_string(),
            value,
        })
        .collect()
}
