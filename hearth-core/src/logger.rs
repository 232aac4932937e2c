use crate::{analysis::HouseholdAssessment, numeric::round2};
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct LogEntry<'a> {
    row: usize,
    record_id: &'a str,
    name: &'a str,
    reported_annual_kwh: Option<f64>,
    scaling_factor: Option<f64>,
    uncalibrated_kwh: f64,
    calibrated_kwh: f64,
    fuel_btu: f64,
    total_btu: f64,
    year_bucket: Option<&'static str>,
    sq_ft_home: f64,
    electricity_json: String,
    fuels_json: String,
}

/// Writes one CSV row per assessed household, flushed as it goes so a
/// partially processed batch still leaves usable results behind.
pub struct HouseholdLogger<W: Write = fs::File> {
    writer: Writer<W>,
}

impl HouseholdLogger<fs::File> {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }
}

impl<W: Write> HouseholdLogger<W> {
    pub fn from_writer(output: W) -> Self {
        Self {
            writer: Writer::from_writer(output),
        }
    }

    pub fn log_household(&mut self, assessment: &HouseholdAssessment) -> Result<(), anyhow::Error> {
        let electricity_json = serde_json::to_string(&assessment.calibrated.breakdown)?;
        let fuels_json = serde_json::to_string(&assessment.estimate.fuels)?;
        let respondent = &assessment.household.respondent;

        let entry = LogEntry {
            row: assessment.row,
            record_id: respondent.record_id.as_deref().unwrap_or_default(),
            name: respondent.display_name(),
            reported_annual_kwh: assessment.calibrated.reported_annual_kwh,
            scaling_factor: assessment.calibrated.scaling_factor,
            uncalibrated_kwh: assessment.estimate.total_kwh,
            calibrated_kwh: assessment.calibrated.total_kwh(),
            fuel_btu: assessment.fuel_btu_total(),
            total_btu: round2(assessment.total_btu),
            year_bucket: assessment.cohort.map(|c| c.bucket.label()),
            sq_ft_home: assessment.household.home.sq_ft_home,
            electricity_json,
            fuels_json,
        };

        self.writer.serialize(entry)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Closes the log, surfacing any error from the final flush.
    pub fn finish(self) -> Result<W, anyhow::Error> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush results log: {}", e.error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::assess_household, calibrate::Calibrator, estimate::Estimator};
    use hearth_schemas::{household::HouseholdRecord, profile::EstimatorConfig};

    #[test]
    fn writes_header_and_one_row_per_household() {
        let config = EstimatorConfig::default();
        let estimator = Estimator::new(&config).unwrap();
        let calibrator = Calibrator::new(&config.calibration);

        let mut household = HouseholdRecord::default();
        household.respondent.name = Some("Ravi".to_string());
        household.bill.last_bill_kwh = Some(100.0);
        let assessment = assess_household(4, household, &estimator, &calibrator).unwrap();

        let mut logger = HouseholdLogger::from_writer(Vec::new());
        logger.log_household(&assessment).unwrap();
        let output = String::from_utf8(logger.finish().unwrap()).unwrap();

        let mut lines = output.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("row,record_id,name,reported_annual_kwh"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("4,,Ravi,600.0,3.0,200.0,600.0,"));
        assert!(row.contains("Other Use"));
        assert!(lines.next().is_none());
    }
}
