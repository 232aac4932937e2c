use crate::brackets::{ApplianceAge, BulbTechnology, Ownership, RefrigeratorSize, TvSize, TvType};
use serde::{Deserialize, Serialize};

/// One survey respondent's answers, already parsed into typed values.
///
/// Counts and quantities that were missing or unparseable arrive as `0.0`;
/// yes/no answers arrive as `false`. The estimator never sees raw text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HouseholdRecord {
    pub respondent: Respondent,
    pub home: HomeCharacteristics,
    pub refrigerators: RefrigeratorAnswers,
    pub cooling: CoolingAnswers,
    pub lighting: LightingAnswers,
    pub televisions: TelevisionAnswers,
    pub water_heater: WaterHeaterAnswers,
    pub laundry: LaundryAnswers,
    pub computing: ComputingAnswers,
    pub kitchen: KitchenAnswers,
    pub fuels: FuelAnswers,
    pub bill: BillAnswers,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Respondent {
    pub record_id: Option<String>,
    pub name: Option<String>,
    pub num_adults: f64,
}

impl Respondent {
    /// Name used in logs and reports.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HomeCharacteristics {
    pub ownership: Ownership,
    pub year_built: Option<String>,
    pub move_in_year: Option<String>,
    pub sq_ft_home: f64,
}

impl HomeCharacteristics {
    /// Owners report the construction year, renters the move-in year.
    pub fn relevant_year(&self) -> Option<&str> {
        match self.ownership {
            Ownership::Owner => self.year_built.as_deref(),
            Ownership::Renter => self.move_in_year.as_deref(),
            Ownership::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RefrigeratorAnswers {
    pub count: f64,
    pub size: RefrigeratorSize,
    pub age: ApplianceAge,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoolingAnswers {
    pub has_ac: bool,
    pub uses_central_ac: bool,
    pub central_ac_age: ApplianceAge,
    pub num_ceiling_fans: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightingAnswers {
    pub bulbs_total: f64,
    pub bulbs_four_hours_plus: f64,
    pub has_led: bool,
    pub has_incandescent: bool,
}

impl LightingAnswers {
    pub fn technology(&self) -> BulbTechnology {
        BulbTechnology::from_presence(self.has_led, self.has_incandescent)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TelevisionAnswers {
    pub count: f64,
    pub size: TvSize,
    pub tv_type: TvType,
    pub daily_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WaterHeaterAnswers {
    pub has_water_heater: bool,
    pub electric: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LaundryAnswers {
    pub has_washer: bool,
    pub washer_loads_per_week: f64,
    pub has_dryer: bool,
    pub dryer_electric: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComputingAnswers {
    pub desktops: f64,
    pub laptops: f64,
    pub has_wireless_router: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KitchenAnswers {
    pub toaster: bool,
    pub coffee_maker: bool,
    pub blender: bool,
    pub rice_cooker: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelAnswers {
    /// The household itself pays for all natural gas used in the home.
    pub pays_all_natural_gas: bool,
    pub receives_fuel_oil: bool,
    pub fuel_oil_tank_litres: f64,
    pub fuel_oil_deliveries: f64,
    pub uses_wood: bool,
    pub wood_kg: f64,
    pub lpg_cylinders: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BillAnswers {
    /// Consumption on the most recent (bimonthly) electricity bill, in kWh.
    pub last_bill_kwh: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relevant_year_follows_ownership() {
        let mut home = HomeCharacteristics {
            ownership: Ownership::Owner,
            year_built: Some("1985".to_string()),
            move_in_year: Some("2015".to_string()),
            sq_ft_home: 900.0,
        };
        assert_eq!(home.relevant_year(), Some("1985"));
        home.ownership = Ownership::Renter;
        assert_eq!(home.relevant_year(), Some("2015"));
        home.ownership = Ownership::Unknown;
        assert_eq!(home.relevant_year(), None);
    }

    #[test]
    fn missing_name_displays_placeholder() {
        assert_eq!(Respondent::default().display_name(), "N/A");
    }
}
