use serde::{Deserialize, Serialize};
use std::fmt;

/// Electricity end-use categories, declared in the order the estimator
/// evaluates them. `Ord` follows declaration order, so ordered maps keyed by
/// this enum list categories the way reports expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApplianceCategory {
    #[serde(rename = "Refrigerator")]
    Refrigerator,
    #[serde(rename = "Air Conditioning")]
    AirConditioning,
    #[serde(rename = "Ceiling Fans")]
    CeilingFans,
    #[serde(rename = "Lighting")]
    Lighting,
    #[serde(rename = "Televisions")]
    Televisions,
    #[serde(rename = "Water Heater (Electric)")]
    WaterHeater,
    #[serde(rename = "Clothes Washer")]
    ClothesWasher,
    #[serde(rename = "Clothes Dryer (Electric)")]
    ClothesDryer,
    #[serde(rename = "Computers & Connectivity")]
    Computing,
    #[serde(rename = "Coffee maker")]
    CoffeeMaker,
    #[serde(rename = "Other Small Kitchen Appliances")]
    SmallKitchen,
    #[serde(rename = "Other Use")]
    OtherUse,
}

impl ApplianceCategory {
    pub const ALL: [ApplianceCategory; 12] = [
        ApplianceCategory::Refrigerator,
        ApplianceCategory::AirConditioning,
        ApplianceCategory::CeilingFans,
        ApplianceCategory::Lighting,
        ApplianceCategory::Televisions,
        ApplianceCategory::WaterHeater,
        ApplianceCategory::ClothesWasher,
        ApplianceCategory::ClothesDryer,
        ApplianceCategory::Computing,
        ApplianceCategory::CoffeeMaker,
        ApplianceCategory::SmallKitchen,
        ApplianceCategory::OtherUse,
    ];

    /// The label used in reports and charts.
    pub fn label(self) -> &'static str {
        match self {
            ApplianceCategory::Refrigerator => "Refrigerator",
            ApplianceCategory::AirConditioning => "Air Conditioning",
            ApplianceCategory::CeilingFans => "Ceiling Fans",
            ApplianceCategory::Lighting => "Lighting",
            ApplianceCategory::Televisions => "Televisions",
            ApplianceCategory::WaterHeater => "Water Heater (Electric)",
            ApplianceCategory::ClothesWasher => "Clothes Washer",
            ApplianceCategory::ClothesDryer => "Clothes Dryer (Electric)",
            ApplianceCategory::Computing => "Computers & Connectivity",
            ApplianceCategory::CoffeeMaker => "Coffee maker",
            ApplianceCategory::SmallKitchen => "Other Small Kitchen Appliances",
            ApplianceCategory::OtherUse => "Other Use",
        }
    }
}

impl fmt::Display for ApplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-electric fuels reported in BTU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "Natural Gas")]
    NaturalGas,
    #[serde(rename = "Fuel Oil")]
    FuelOil,
    #[serde(rename = "LPG/Propane")]
    LpgPropane,
    #[serde(rename = "Wood")]
    Wood,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::NaturalGas,
        FuelType::FuelOil,
        FuelType::LpgPropane,
        FuelType::Wood,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FuelType::NaturalGas => "Natural Gas",
            FuelType::FuelOil => "Fuel Oil",
            FuelType::LpgPropane => "LPG/Propane",
            FuelType::Wood => "Wood",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Key of the combined total-energy aggregate: electricity end uses and
/// fuels share one BTU-denominated map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnergyCategory {
    Appliance(ApplianceCategory),
    Fuel(FuelType),
}

impl EnergyCategory {
    pub fn label(self) -> &'static str {
        match self {
            EnergyCategory::Appliance(category) => category.label(),
            EnergyCategory::Fuel(fuel) => fuel.label(),
        }
    }
}

impl fmt::Display for EnergyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<ApplianceCategory> for EnergyCategory {
    fn from(category: ApplianceCategory) -> Self {
        EnergyCategory::Appliance(category)
    }
}

impl From<FuelType> for EnergyCategory {
    fn from(fuel: FuelType) -> Self {
        EnergyCategory::Fuel(fuel)
    }
}
