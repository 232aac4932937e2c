//! Console report for each household and for the batch as a whole.

use crate::workflow::BatchSummary;
use hearth_core::{analysis::HouseholdAssessment, calibrate::CalibrationOutcome};

pub fn print_household(assessment: &HouseholdAssessment) {
    let calibrated = &assessment.calibrated;
    println!("\n--- Household {}: {} ---", assessment.row, assessment.name());

    match calibrated.outcome {
        CalibrationOutcome::Scaled | CalibrationOutcome::ZeroEstimate => {
            let reported = calibrated.reported_annual_kwh.unwrap_or_default();
            println!("Reported annual consumption: {:.2} kWh", reported);
            println!("Uncalibrated estimate: {:.2} kWh", assessment.estimate.total_kwh);
            match calibrated.scaling_factor {
                Some(factor) => println!("Scaling factor: {:.4}", factor),
                None => println!("Uncalibrated estimate is zero; calibrated values set to 0."),
            }
        }
        CalibrationOutcome::Skipped => {
            println!("No usable electricity bill figure; scaling skipped.");
        }
    }

    println!("Calibrated Electricity Breakdown (kWh/year):");
    for (category, kwh) in calibrated.breakdown.iter() {
        println!("  - {}: {:.2}", category, kwh);
    }
    println!("Total calibrated electricity: {:.2} kWh", calibrated.total_kwh());
    if let (Some(reported), Some(difference)) = (
        calibrated.reported_annual_kwh,
        assessment.difference_from_reported(),
    ) {
        println!(
            "Reported: {:.2} kWh, difference (calibrated - reported): {:.2} kWh",
            reported, difference
        );
    }

    println!("Fuel Consumption (BTU/year):");
    for (fuel, btu) in assessment.estimate.fuels.iter() {
        println!("  - {}: {:.2}", fuel, btu);
    }
}

pub fn print_batch_summary(summary: &BatchSummary) {
    println!("\n\n--- [Batch Summary] ---");
    println!("========================================");
    println!("Households processed: {}", summary.households_processed);
    println!("Households skipped:   {}", summary.households_failed);
    println!("----------------------------------------");

    println!("\nElectricity by category (kWh/year, all households):");
    for total in &summary.electricity_kwh {
        println!("  - {}: {:.2}", total.category, total.value);
    }

    println!("\nTotal energy by category (million BTU/year, all households):");
    for total in &summary.total_energy_btu {
        println!("  - {}: {:.2}", total.category, total.value / 1_000_000.0);
    }

    if !summary.cohorts.is_empty() {
        println!("\nHomes by year built / moved in:");
        for cohort in &summary.cohorts {
            println!(
                "  - {:<14} {:>3} homes, {:>8.1} sq ft, {:>8.2} million BTU",
                cohort.bucket.label(),
                cohort.households,
                cohort.average_sq_ft,
                cohort.average_btu_millions
            );
        }
    }
    println!("========================================");
}
