//! Bottom-up annual consumption model.
//!
//! Every electricity category follows the same shape: a presence gate, a
//! wattage looked up from the appliance profile, a duration from the usage
//! profile, an optional bracket factor, annualization, and rounding to two
//! decimals before the value lands in the breakdown. Fuels are estimated
//! independently in BTU.

mod electricity;
mod fuel;

use crate::{error::HearthError, numeric::round2};
use hearth_schemas::{
    breakdown::{ElectricityBreakdown, FuelBreakdown},
    household::HouseholdRecord,
    profile::EstimatorConfig,
};

pub(crate) const DAYS_PER_YEAR: f64 = 365.0;
pub(crate) const WEEKS_PER_YEAR: f64 = 52.0;

/// kWh per year for a load drawing `watts` for `hours_per_day`.
pub(crate) fn daily_kwh(watts: f64, hours_per_day: f64) -> f64 {
    watts * hours_per_day * DAYS_PER_YEAR / 1000.0
}

/// kWh per year for a load drawing `watts` for `hours_per_week`.
pub(crate) fn weekly_kwh(watts: f64, hours_per_week: f64) -> f64 {
    watts * hours_per_week * WEEKS_PER_YEAR / 1000.0
}

/// One household's uncalibrated estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub electricity: ElectricityBreakdown,
    /// Sum of the rounded electricity entries, rounded again.
    pub total_kwh: f64,
    pub fuels: FuelBreakdown,
}

/// Applies an `EstimatorConfig` to household records.
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'a> {
    config: &'a EstimatorConfig,
}

impl<'a> Estimator<'a> {
    /// Creates an estimator after checking that every configured number is
    /// finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `HearthError::ConfigError` naming the first offending value.
    pub fn new(config: &'a EstimatorConfig) -> Result<Self, HearthError> {
        validate_config(config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        self.config
    }

    /// Electricity and fuel breakdowns for one household. Never fails:
    /// missing answers have already been coerced to defaults.
    pub fn estimate(&self, household: &HouseholdRecord) -> Estimate {
        let electricity = self.estimate_electricity(household);
        let total_kwh = round2(electricity.total());
        Estimate {
            electricity,
            total_kwh,
            fuels: self.calculate_btu_equivalents(household),
        }
    }
}

pub fn validate_config(config: &EstimatorConfig) -> Result<(), HearthError> {
    for (name, value) in config.named_values() {
        if !value.is_finite() || value < 0.0 {
            return Err(HearthError::ConfigError(format!(
                "'{}' must be a finite, non-negative number (got {})",
                name, value
            )));
        }
    }
    if config.calibration.bill_periods_per_year <= 0.0 {
        return Err(HearthError::ConfigError(
            "'calibration.bill_periods_per_year' must be positive".to_string(),
        ));
    }
    Ok(())
}
