//! Field mapping from a raw survey row to a typed `HouseholdRecord`.
//!
//! This is the only place that reads answers by column name. Missing
//! columns and blank cells behave like missing answers.

use crate::numeric::{coerce_number, number_or};
use hearth_schemas::{
    brackets::{is_yes, ApplianceAge, Ownership, RefrigeratorSize, TvSize, TvType},
    household::{
        BillAnswers, ComputingAnswers, CoolingAnswers, FuelAnswers, HomeCharacteristics,
        HouseholdRecord, KitchenAnswers, LaundryAnswers, LightingAnswers, RefrigeratorAnswers,
        Respondent, TelevisionAnswers, WaterHeaterAnswers,
    },
};
use std::collections::HashMap;

/// Survey column names.
pub mod columns {
    pub const RECORD_ID: &str = "_id";
    pub const NAME: &str = "Q0_name";
    pub const NUM_ADULTS: &str = "Q2_num_adults";
    pub const OWNERSHIP: &str = "Q4_ownership";
    pub const YEAR_BUILT: &str = "Q5_year_built";
    pub const MOVE_IN_YEAR: &str = "Q6_move_in_year";
    pub const SQ_FT_HOME: &str = "Q7_sq_ft_home";
    pub const NUM_REFRIGERATORS: &str = "Q9_num_refrigerators";
    pub const REFRIGERATOR_SIZE: &str = "Q10_refrigerator_size";
    pub const REFRIGERATOR_AGE: &str = "Q12_refrigerator_age";
    pub const TOASTER: &str = "Q18_Toaster";
    pub const COFFEE_MAKER: &str = "Q18_Coffee_maker";
    pub const RICE_COOKER: &str = "Q18_Rice_cooker";
    pub const BLENDER: &str = "Q18_Blender_or_juicer";
    pub const HAS_CLOTHES_WASHER: &str = "Q19_has_clothes_washer";
    pub const CLOTHES_WASHER_USAGE: &str = "Q20_clothes_washer_usage";
    pub const HAS_CLOTHES_DRYER: &str = "Q22_has_clothes_dryer";
    pub const CLOTHES_DRYER_FUEL: &str = "Q24_clothes_dryer_fuel";
    pub const NUM_TELEVISIONS: &str = "Q26_num_televisions";
    pub const TV_SIZE: &str = "Q27_tv_size";
    pub const TV_TYPE: &str = "Q28_tv_type";
    pub const TV_DAILY_HOURS: &str = "Q29_tv_daily_hours";
    pub const NUM_DESKTOPS: &str = "Q30_num_desktop_computers";
    pub const NUM_LAPTOPS: &str = "Q30_num_laptop_computers";
    pub const HAS_WIRELESS_ROUTER: &str = "Q32_has_wireless_router";
    pub const HAS_AC: &str = "Q37_has_ac";
    pub const USES_CENTRAL_AC: &str = "Q38_uses_central_ac";
    pub const CENTRAL_AC_AGE: &str = "Q40_central_ac_age";
    pub const NUM_CEILING_FANS: &str = "Q42_num_ceiling_fans";
    pub const HAS_WATER_HEATER: &str = "Q43_has_water_heater";
    pub const WATER_HEATER_FUEL: &str = "Q46_water_heater_fuel";
    pub const NUM_BULBS_TOTAL: &str = "Q47_num_light_bulbs_total";
    pub const NUM_BULBS_4HR_PLUS: &str = "Q48_num_light_bulbs_4hr_plus";
    pub const INCANDESCENT: &str = "Q49_Incandescent";
    pub const LED: &str = "Q49_LED__light_emitting_diode_";
    pub const NATURAL_GAS_RESPONSIBILITY: &str = "Q51_natural_gas_payment_responsibility";
    pub const RECEIVES_FUEL_OIL: &str = "Q56_receives_fuel_oil_deliveries";
    pub const FUEL_OIL_TANK_SIZE: &str = "Q57_fuel_oil_tank_size";
    pub const FUEL_OIL_DELIVERIES: &str = "Q57_fuel_oil_num_deliveries_past_year";
    pub const USES_WOOD: &str = "Q58_uses_wood_for_fuel";
    pub const WOOD_AMOUNT: &str = "Q59_wood_pellets_total_amount_past_year";
    pub const LPG_CYLINDERS: &str = "Q60_num_lpg_propane_cylinders_year";
    pub const LAST_BILL_CONSUMPTION: &str = "Q62_last_electricity_consumption";
}

const HOUSEHOLD_PAYS_ALL_GAS: &str =
    "household is responsible for paying for all natural gas used in this home";

/// One raw survey row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyRow {
    fields: HashMap<String, String>,
}

impl SurveyRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// The trimmed answer, or `None` when the column is absent or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn text(&self, column: &str) -> &str {
        self.get(column).unwrap_or_default()
    }

    fn yes(&self, column: &str) -> bool {
        is_yes(self.text(column))
    }

    fn number(&self, column: &str) -> f64 {
        number_or(self.get(column), 0.0)
    }

    fn equals(&self, column: &str, expected: &str) -> bool {
        self.text(column).to_lowercase() == expected
    }

    pub fn to_household(&self) -> HouseholdRecord {
        use self::columns::*;

        HouseholdRecord {
            respondent: Respondent {
                record_id: self.get(RECORD_ID).map(str::to_string),
                name: self.get(NAME).map(str::to_string),
                num_adults: self.number(NUM_ADULTS),
            },
            home: HomeCharacteristics {
                ownership: Ownership::from_survey(self.text(OWNERSHIP)),
                year_built: self.get(YEAR_BUILT).map(str::to_string),
                move_in_year: self.get(MOVE_IN_YEAR).map(str::to_string),
                sq_ft_home: self.number(SQ_FT_HOME),
            },
            refrigerators: RefrigeratorAnswers {
                count: self.number(NUM_REFRIGERATORS),
                size: RefrigeratorSize::from_survey(self.text(REFRIGERATOR_SIZE)),
                age: ApplianceAge::from_survey(self.text(REFRIGERATOR_AGE)),
            },
            cooling: CoolingAnswers {
                has_ac: self.yes(HAS_AC),
                uses_central_ac: self.yes(USES_CENTRAL_AC),
                central_ac_age: ApplianceAge::from_survey(self.text(CENTRAL_AC_AGE)),
                num_ceiling_fans: self.number(NUM_CEILING_FANS),
            },
            lighting: LightingAnswers {
                bulbs_total: self.number(NUM_BULBS_TOTAL),
                bulbs_four_hours_plus: self.number(NUM_BULBS_4HR_PLUS),
                has_led: self.yes(LED),
                has_incandescent: self.yes(INCANDESCENT),
            },
            televisions: TelevisionAnswers {
                count: self.number(NUM_TELEVISIONS),
                size: TvSize::from_survey(self.text(TV_SIZE)),
                tv_type: TvType::from_survey(self.text(TV_TYPE)),
                daily_hours: self.number(TV_DAILY_HOURS),
            },
            water_heater: WaterHeaterAnswers {
                has_water_heater: self.yes(HAS_WATER_HEATER),
                electric: self.equals(WATER_HEATER_FUEL, "electricity"),
            },
            laundry: LaundryAnswers {
                has_washer: self.yes(HAS_CLOTHES_WASHER),
                washer_loads_per_week: self.number(CLOTHES_WASHER_USAGE),
                has_dryer: self.yes(HAS_CLOTHES_DRYER),
                dryer_electric: self.equals(CLOTHES_DRYER_FUEL, "electricity"),
            },
            computing: ComputingAnswers {
                desktops: self.number(NUM_DESKTOPS),
                laptops: self.number(NUM_LAPTOPS),
                has_wireless_router: self.yes(HAS_WIRELESS_ROUTER),
            },
            kitchen: KitchenAnswers {
                toaster: self.yes(TOASTER),
                coffee_maker: self.yes(COFFEE_MAKER),
                blender: self.yes(BLENDER),
                rice_cooker: self.yes(RICE_COOKER),
            },
            fuels: FuelAnswers {
                pays_all_natural_gas: self.equals(NATURAL_GAS_RESPONSIBILITY, HOUSEHOLD_PAYS_ALL_GAS),
                receives_fuel_oil: self.yes(RECEIVES_FUEL_OIL),
                fuel_oil_tank_litres: self.number(FUEL_OIL_TANK_SIZE),
                fuel_oil_deliveries: self.number(FUEL_OIL_DELIVERIES),
                uses_wood: self.yes(USES_WOOD),
                wood_kg: self.number(WOOD_AMOUNT),
                lpg_cylinders: self.number(LPG_CYLINDERS),
            },
            bill: BillAnswers {
                last_bill_kwh: coerce_number(self.get(LAST_BILL_CONSUMPTION)),
            },
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SurveyRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
