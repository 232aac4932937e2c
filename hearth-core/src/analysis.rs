use crate::{
    aggregate::{CohortSample, ElectricityAggregate, TotalEnergyAggregate},
    calibrate::{CalibratedBreakdown, Calibrator},
    error::HearthError,
    estimate::{Estimate, Estimator},
    numeric::round2,
};
use hearth_schemas::{brackets::YearBucket, category::EnergyCategory, household::HouseholdRecord};

const SQ_FT_LABEL: &str = "Square footage";

/// Everything computed for one household.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseholdAssessment {
    /// 1-based position of the household in the survey export.
    pub row: usize,
    pub household: HouseholdRecord,
    pub estimate: Estimate,
    pub calibrated: CalibratedBreakdown,
    /// Calibrated electricity in BTU plus every fuel.
    pub total_btu: f64,
    pub cohort: Option<CohortSample>,
}

impl HouseholdAssessment {
    pub fn name(&self) -> &str {
        self.household.respondent.display_name()
    }

    /// Calibrated total minus the annualized bill, when a bill was usable.
    pub fn difference_from_reported(&self) -> Option<f64> {
        self.calibrated
            .reported_annual_kwh
            .map(|reported| round2(self.calibrated.total_kwh() - reported))
    }

    pub fn fuel_btu_total(&self) -> f64 {
        round2(self.estimate.fuels.total())
    }
}

/// Estimates, calibrates and totals one household.
///
/// # Errors
///
/// Returns `HearthError::NonFiniteEstimate` if any electricity or fuel figure,
/// or the home's square footage, came out as NaN or infinity.
pub fn assess_household(
    row: usize,
    household: HouseholdRecord,
    estimator: &Estimator<'_>,
    calibrator: &Calibrator<'_>,
) -> Result<HouseholdAssessment, HearthError> {
    let estimate = estimator.estimate(&household);
    ensure_finite(
        estimate
            .electricity
            .iter()
            .map(|(category, kwh)| (category.label(), kwh))
            .chain(estimate.fuels.iter().map(|(fuel, btu)| (fuel.label(), btu)))
            .chain([(SQ_FT_LABEL, household.home.sq_ft_home)]),
    )?;

    let calibrated = calibrator.calibrate(&estimate.electricity, household.bill.last_bill_kwh);
    let kwh_to_btu = estimator.config().fuels.kwh_to_btu;
    let total_btu = calibrated.breakdown.total() * kwh_to_btu + estimate.fuels.total();

    let cohort = household
        .home
        .relevant_year()
        .and_then(YearBucket::from_survey)
        .filter(|_| household.home.sq_ft_home > 0.0)
        .map(|bucket| CohortSample {
            bucket,
            total_btu,
            sq_ft: household.home.sq_ft_home,
        });

    Ok(HouseholdAssessment {
        row,
        household,
        estimate,
        calibrated,
        total_btu,
        cohort,
    })
}

fn ensure_finite<'a>(values: impl Iterator<Item = (&'a str, f64)>) -> Result<(), HearthError> {
    for (category, value) in values {
        if !value.is_finite() {
            return Err(HearthError::NonFiniteEstimate {
                category: category.to_string(),
                value,
            });
        }
    }
    Ok(())
}

/// Folds one household into the batch aggregates: calibrated kWh into the
/// electricity aggregate, and the same kWh converted to BTU plus every fuel
/// into the total-energy aggregate.
pub fn accumulate(
    assessment: &HouseholdAssessment,
    kwh_to_btu: f64,
    electricity: &mut ElectricityAggregate,
    total_energy: &mut TotalEnergyAggregate,
) {
    electricity.absorb(&assessment.calibrated.breakdown, 1.0, |category| category);
    total_energy.absorb(&assessment.calibrated.breakdown, kwh_to_btu, EnergyCategory::from);
    total_energy.absorb(&assessment.estimate.fuels, 1.0, EnergyCategory::from);
}
