//! Proportional calibration of an electricity estimate against a bill.
//!
//! One global factor rescales every category so the calibrated sum matches
//! the annualized bill figure. Relative proportions between categories are
//! preserved.

use crate::numeric::round2;
use hearth_schemas::{breakdown::ElectricityBreakdown, profile::CalibrationSettings};
use serde::Serialize;
use tracing::debug;

/// How a calibration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalibrationOutcome {
    /// Every value was multiplied by `scaling_factor`.
    Scaled,
    /// A bill was reported but the estimate summed to zero, so every value
    /// was forced to zero.
    ZeroEstimate,
    /// No usable bill figure. The estimate is passed through unchanged.
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalibratedBreakdown {
    pub breakdown: ElectricityBreakdown,
    /// The bill figure after annualization, when one was usable.
    pub reported_annual_kwh: Option<f64>,
    pub scaling_factor: Option<f64>,
    pub outcome: CalibrationOutcome,
}

impl CalibratedBreakdown {
    pub fn total_kwh(&self) -> f64 {
        round2(self.breakdown.total())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Calibrator<'a> {
    settings: &'a CalibrationSettings,
}

impl<'a> Calibrator<'a> {
    pub fn new(settings: &'a CalibrationSettings) -> Self {
        Self { settings }
    }

    /// Annual kWh for a reported bill-period figure. Missing, zero, negative
    /// and non-finite figures are not usable.
    pub fn annualize(&self, reported_kwh: Option<f64>) -> Option<f64> {
        reported_kwh
            .filter(|kwh| kwh.is_finite() && *kwh > 0.0)
            .map(|kwh| kwh * self.settings.bill_periods_per_year)
    }

    /// Rescales `uncalibrated` to match the reported bill. The input is never
    /// modified; the returned breakdown always has the same keys.
    pub fn calibrate(
        &self,
        uncalibrated: &ElectricityBreakdown,
        reported_kwh: Option<f64>,
    ) -> CalibratedBreakdown {
        let Some(reported_annual_kwh) = self.annualize(reported_kwh) else {
            return CalibratedBreakdown {
                breakdown: uncalibrated.clone(),
                reported_annual_kwh: None,
                scaling_factor: None,
                outcome: CalibrationOutcome::Skipped,
            };
        };

        let total = uncalibrated.total();
        if total <= 0.0 {
            debug!(reported_annual_kwh, "estimate sums to zero, zeroing calibrated values");
            return CalibratedBreakdown {
                breakdown: uncalibrated.map_values(|_| 0.0),
                reported_annual_kwh: Some(reported_annual_kwh),
                scaling_factor: None,
                outcome: CalibrationOutcome::ZeroEstimate,
            };
        }

        let factor = reported_annual_kwh / total;
        debug!(reported_annual_kwh, total, factor, "calibrating estimate");
        CalibratedBreakdown {
            breakdown: uncalibrated.map_values(|kwh| round2((kwh * factor).max(0.0))),
            reported_annual_kwh: Some(reported_annual_kwh),
            scaling_factor: Some(factor),
            outcome: CalibrationOutcome::Scaled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_schemas::category::ApplianceCategory;
    use proptest::prelude::*;

    fn sample() -> ElectricityBreakdown {
        [
            (ApplianceCategory::Refrigerator, 722.7),
            (ApplianceCategory::Lighting, 131.4),
            (ApplianceCategory::OtherUse, 200.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn scales_to_annualized_bill() {
        let settings = CalibrationSettings::default();
        let calibrated = Calibrator::new(&settings).calibrate(&sample(), Some(300.0));
        assert_eq!(calibrated.outcome, CalibrationOutcome::Scaled);
        assert_eq!(calibrated.reported_annual_kwh, Some(1800.0));
        assert!((calibrated.total_kwh() - 1800.0).abs() < 0.05);
        assert_eq!(calibrated.breakdown.len(), 3);
    }

    #[test]
    fn missing_or_unusable_bill_passes_through() {
        let settings = CalibrationSettings::default();
        let calibrator = Calibrator::new(&settings);
        for reported in [None, Some(0.0), Some(-10.0), Some(f64::NAN)] {
            let calibrated = calibrator.calibrate(&sample(), reported);
            assert_eq!(calibrated.outcome, CalibrationOutcome::Skipped);
            assert_eq!(calibrated.breakdown, sample());
            assert_eq!(calibrated.scaling_factor, None);
        }
    }

    #[test]
    fn zero_estimate_with_bill_zeroes_everything() {
        let settings = CalibrationSettings::default();
        let uncalibrated: ElectricityBreakdown =
            [(ApplianceCategory::Lighting, 0.0), (ApplianceCategory::OtherUse, 0.0)]
                .into_iter()
                .collect();
        let calibrated = Calibrator::new(&settings).calibrate(&uncalibrated, Some(500.0));
        assert_eq!(calibrated.outcome, CalibrationOutcome::ZeroEstimate);
        assert_eq!(calibrated.breakdown.len(), 2);
        assert!(calibrated.breakdown.iter().all(|(_, kwh)| kwh == 0.0));
    }

    #[test]
    fn bill_periods_come_from_settings() {
        let settings = CalibrationSettings {
            bill_periods_per_year: 12.0,
        };
        let calibrated = Calibrator::new(&settings).calibrate(&sample(), Some(100.0));
        assert_eq!(calibrated.reported_annual_kwh, Some(1200.0));
    }

    fn breakdown_strategy() -> impl Strategy<Value = ElectricityBreakdown> {
        prop::collection::vec(1.0f64..5_000.0, ApplianceCategory::ALL.len()).prop_map(|values| {
            ApplianceCategory::ALL
                .iter()
                .copied()
                .zip(values)
                .map(|(category, kwh)| (category, round2(kwh)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn total_matches_annualized_bill(
            uncalibrated in breakdown_strategy(),
            reported in 10.0f64..2_000.0,
        ) {
            let settings = CalibrationSettings::default();
            let calibrated = Calibrator::new(&settings).calibrate(&uncalibrated, Some(reported));
            let tolerance = 0.006 * uncalibrated.len() as f64;
            prop_assert!((calibrated.breakdown.total() - reported * 6.0).abs() <= tolerance);
        }

        #[test]
        fn proportions_are_preserved(
            uncalibrated in breakdown_strategy(),
            reported in 100.0f64..2_000.0,
        ) {
            let settings = CalibrationSettings::default();
            let calibrated = Calibrator::new(&settings).calibrate(&uncalibrated, Some(reported));
            let factor = calibrated.scaling_factor.unwrap_or_default();
            for (category, kwh) in uncalibrated.iter() {
                let scaled = calibrated.breakdown.get(category).unwrap_or_default();
                prop_assert!((scaled - kwh * factor).abs() <= 0.006);
            }
        }

        #[test]
        fn calibrated_values_are_non_negative(
            uncalibrated in breakdown_strategy(),
            reported in prop::option::of(-100.0f64..2_000.0),
        ) {
            let settings = CalibrationSettings::default();
            let calibrated = Calibrator::new(&settings).calibrate(&uncalibrated, reported);
            prop_assert!(calibrated.breakdown.iter().all(|(_, kwh)| kwh >= 0.0));
        }

        #[test]
        fn recalibrating_is_nearly_identity(
            uncalibrated in breakdown_strategy(),
            reported in 100.0f64..2_000.0,
        ) {
            let settings = CalibrationSettings::default();
            let calibrator = Calibrator::new(&settings);
            let once = calibrator.calibrate(&uncalibrated, Some(reported));
            let twice = calibrator.calibrate(&once.breakdown, Some(reported));
            let factor = twice.scaling_factor.unwrap_or_default();
            prop_assert!((factor - 1.0).abs() < 1e-3);
        }
    }
}
