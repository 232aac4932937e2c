use super::Estimator;
use crate::numeric::round2;
use hearth_schemas::{
    breakdown::FuelBreakdown,
    category::FuelType,
    household::{FuelAnswers, HouseholdRecord},
};

impl Estimator<'_> {
    /// Annual BTU per fuel type. Unlike the electricity breakdown every fuel
    /// is always present, with zero meaning "not used".
    pub fn calculate_btu_equivalents(&self, household: &HouseholdRecord) -> FuelBreakdown {
        let fuels = &household.fuels;
        FuelType::ALL
            .iter()
            .map(|&fuel| (fuel, round2(self.fuel_btu(fuel, fuels))))
            .collect()
    }

    fn fuel_btu(&self, fuel: FuelType, answers: &FuelAnswers) -> f64 {
        let table = &self.config.fuels;
        match fuel {
            FuelType::NaturalGas if answers.pays_all_natural_gas => {
                table.natural_gas_typical_annual_scm * table.natural_gas_btu_per_scm
            }
            FuelType::FuelOil
                if answers.receives_fuel_oil
                    && answers.fuel_oil_tank_litres > 0.0
                    && answers.fuel_oil_deliveries > 0.0 =>
            {
                answers.fuel_oil_tank_litres * answers.fuel_oil_deliveries * table.fuel_oil_btu_per_litre
            }
            FuelType::LpgPropane if answers.lpg_cylinders > 0.0 => {
                answers.lpg_cylinders * table.lpg_cylinder_kg * table.lpg_btu_per_kg
            }
            FuelType::Wood if answers.uses_wood => {
                let kg = if answers.wood_kg > 0.0 {
                    answers.wood_kg
                } else {
                    table.wood_typical_annual_kg
                };
                kg * table.wood_btu_per_kg
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_schemas::profile::EstimatorConfig;

    fn btu(household: &HouseholdRecord) -> FuelBreakdown {
        let config = EstimatorConfig::default();
        Estimator::new(&config).unwrap().calculate_btu_equivalents(household)
    }

    #[test]
    fn unused_fuels_are_zero_not_absent() {
        let breakdown = btu(&HouseholdRecord::default());
        assert_eq!(breakdown.len(), FuelType::ALL.len());
        assert!(breakdown.iter().all(|(_, value)| value == 0.0));
    }

    #[test]
    fn natural_gas_uses_typical_volume() {
        let mut household = HouseholdRecord::default();
        household.fuels.pays_all_natural_gas = true;
        assert_eq!(btu(&household).get(FuelType::NaturalGas), Some(5_250_000.0));
    }

    #[test]
    fn fuel_oil_needs_both_quantities() {
        let mut household = HouseholdRecord::default();
        household.fuels.receives_fuel_oil = true;
        household.fuels.fuel_oil_tank_litres = 200.0;
        assert_eq!(btu(&household).get(FuelType::FuelOil), Some(0.0));

        household.fuels.fuel_oil_deliveries = 3.0;
        assert_eq!(btu(&household).get(FuelType::FuelOil), Some(22_800_000.0));

        household.fuels.receives_fuel_oil = false;
        assert_eq!(btu(&household).get(FuelType::FuelOil), Some(0.0));
    }

    #[test]
    fn lpg_counts_standard_cylinders() {
        let mut household = HouseholdRecord::default();
        household.fuels.lpg_cylinders = 12.0;
        // 12 * 14.2 kg * 47,500 BTU/kg
        assert_eq!(btu(&household).get(FuelType::LpgPropane), Some(8_094_000.0));
    }

    #[test]
    fn wood_falls_back_to_typical_amount() {
        let mut household = HouseholdRecord::default();
        household.fuels.wood_kg = 1_000.0;
        assert_eq!(btu(&household).get(FuelType::Wood), Some(0.0));

        household.fuels.uses_wood = true;
        assert_eq!(btu(&household).get(FuelType::Wood), Some(7_000_000.0));

        household.fuels.wood_kg = 0.0;
        assert_eq!(btu(&household).get(FuelType::Wood), Some(3_500_000.0));
    }
}
