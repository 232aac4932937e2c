use hearth_core::{
    aggregate::{cohort_averages, ElectricityAggregate, TotalEnergyAggregate},
    analysis::{accumulate, assess_household},
    calibrate::{CalibrationOutcome, Calibrator},
    error::HearthError,
    estimate::Estimator,
    survey::read_survey,
};
use hearth_schemas::{
    brackets::YearBucket,
    category::{ApplianceCategory, FuelType},
    profile::EstimatorConfig,
};

const SURVEY: &str = "\
_id,Q0_name,Q2_num_adults,Q4_ownership,Q5_year_built,Q6_move_in_year,Q7_sq_ft_home,Q9_num_refrigerators,Q10_refrigerator_size,Q12_refrigerator_age,Q47_num_light_bulbs_total,Q48_num_light_bulbs_4hr_plus,Q49_LED__light_emitting_diode_,Q58_uses_wood_for_fuel,Q62_last_electricity_consumption
1,Asha,2,Own,1985,,\"1,200\",1,Medium (17.6 to 22.5 cubic feet),5 to 9 years old,10,4,Yes,No,300
2,Ravi,1,Rent,,2015,800,1,Small,Less than 2 years old,5,0,No,Yes,
3,Meera,3,Own,1962,,950,1,Large,20 or more years,6,2,Yes,No,\"₹400\",extra
4,,0,Lease,,2021,0,0,,,0,0,,,0
";

#[test]
fn processes_a_mixed_batch() {
    let config = EstimatorConfig::default();
    let estimator = Estimator::new(&config).unwrap();
    let calibrator = Calibrator::new(&config.calibration);

    let rows = read_survey(SURVEY.as_bytes(), "survey.csv").unwrap();
    assert_eq!(rows.len(), 4);

    let mut electricity = ElectricityAggregate::new();
    let mut total_energy = TotalEnergyAggregate::new();
    let mut cohorts = Vec::new();
    let mut failures = Vec::new();

    for (row, parsed) in rows {
        let result = parsed.and_then(|survey_row| {
            assess_household(row, survey_row.to_household(), &estimator, &calibrator)
        });
        match result {
            Ok(assessment) => {
                accumulate(&assessment, config.fuels.kwh_to_btu, &mut electricity, &mut total_energy);
                cohorts.extend(assessment.cohort);
            }
            Err(err) => failures.push(err),
        }
    }

    // The ragged third row fails alone; the rest of the batch completes.
    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0], HearthError::TooManyFields { row: 3, .. }));

    // Asha's estimate is calibrated to 1800 kWh; Ravi has no bill.
    let asha_and_ravi = electricity.iter().map(|(_, kwh)| kwh).sum::<f64>();
    assert!(asha_and_ravi > 1800.0);
    assert!(electricity.get(ApplianceCategory::Refrigerator) > 0.0);
    assert_eq!(total_energy.get(FuelType::Wood.into()), 3_500_000.0);

    // Asha (1980s, owner) and Ravi (2010s, renter) have square footage.
    let averages = cohort_averages(&cohorts);
    let buckets: Vec<_> = averages.iter().map(|a| a.bucket).collect();
    assert_eq!(buckets, vec![YearBucket::Eighties, YearBucket::TwentyTens]);
    assert_eq!(averages[0].average_sq_ft, 1200.0);
}

#[test]
fn zero_bill_is_not_a_calibration_target() {
    let config = EstimatorConfig::default();
    let estimator = Estimator::new(&config).unwrap();
    let calibrator = Calibrator::new(&config.calibration);

    let rows = read_survey(SURVEY.as_bytes(), "survey.csv").unwrap();
    let (row, parsed) = rows.into_iter().last().unwrap();
    let assessment =
        assess_household(row, parsed.unwrap().to_household(), &estimator, &calibrator).unwrap();

    assert_eq!(assessment.name(), "N/A");
    assert_eq!(assessment.calibrated.outcome, CalibrationOutcome::Skipped);
    assert_eq!(
        assessment.calibrated.breakdown.get(ApplianceCategory::OtherUse),
        Some(200.0)
    );
    assert!(assessment.cohort.is_none());
}

#[test]
fn substituted_profile_changes_the_estimate() {
    let mut config = EstimatorConfig::default();
    config.usage.other_use_default_kwh = 500.0;
    let estimator = Estimator::new(&config).unwrap();

    let rows = read_survey(SURVEY.as_bytes(), "survey.csv").unwrap();
    let (_, parsed) = rows.into_iter().last().unwrap();
    let estimate = estimator.estimate(&parsed.unwrap().to_household());
    assert_eq!(estimate.electricity.get(ApplianceCategory::OtherUse), Some(500.0));
    assert_eq!(estimate.total_kwh, 500.0);
}
