//! Static configuration tables for the estimator.
//!
//! `Default` reproduces the built-in typical values. Every struct is
//! `#[serde(default)]`, so a profile file only needs the values it changes.

use crate::brackets::{ApplianceAge, BulbTechnology, RefrigeratorSize, TvSize, TvType};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Default bracket multipliers for one appliance kind, youngest first.
pub trait AgeBaseline {
    const FACTORS: [f64; 6];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefrigeratorAging;

impl AgeBaseline for RefrigeratorAging {
    const FACTORS: [f64; 6] = [1.0, 1.05, 1.10, 1.25, 1.35, 1.50];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirConditionerAging;

impl AgeBaseline for AirConditionerAging {
    const FACTORS: [f64; 6] = [1.0, 1.03, 1.08, 1.15, 1.25, 1.40];
}

/// Multipliers for the six age brackets. `Unknown` ages cost 1.0.
///
/// The baseline type picks the defaults for brackets a profile leaves out,
/// so a partial override of one appliance never borrows another's table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(serialize = "", deserialize = "B: AgeBaseline"))]
pub struct AgeFactors<B> {
    pub less_than_2: f64,
    pub from_2_to_4: f64,
    pub from_5_to_9: f64,
    pub from_10_to_14: f64,
    pub from_15_to_19: f64,
    pub twenty_or_more: f64,
    #[serde(skip)]
    baseline: PhantomData<B>,
}

pub type RefrigeratorAgeFactors = AgeFactors<RefrigeratorAging>;
pub type AirConditionerAgeFactors = AgeFactors<AirConditionerAging>;

impl<B> AgeFactors<B> {
    pub fn factor(&self, age: ApplianceAge) -> f64 {
        match age {
            ApplianceAge::LessThan2 => self.less_than_2,
            ApplianceAge::From2To4 => self.from_2_to_4,
            ApplianceAge::From5To9 => self.from_5_to_9,
            ApplianceAge::From10To14 => self.from_10_to_14,
            ApplianceAge::From15To19 => self.from_15_to_19,
            ApplianceAge::TwentyOrMore => self.twenty_or_more,
            ApplianceAge::Unknown => 1.0,
        }
    }

    fn values(&self) -> [f64; 6] {
        [
            self.less_than_2,
            self.from_2_to_4,
            self.from_5_to_9,
            self.from_10_to_14,
            self.from_15_to_19,
            self.twenty_or_more,
        ]
    }
}

impl<B: AgeBaseline> Default for AgeFactors<B> {
    fn default() -> Self {
        let [less_than_2, from_2_to_4, from_5_to_9, from_10_to_14, from_15_to_19, twenty_or_more] =
            B::FACTORS;
        Self {
            less_than_2,
            from_2_to_4,
            from_5_to_9,
            from_10_to_14,
            from_15_to_19,
            twenty_or_more,
            baseline: PhantomData,
        }
    }
}

/// Refrigerator wattage per size tier. Unrecognized sizes use `medium_w`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefrigeratorPower {
    pub half_compact_w: f64,
    pub small_w: f64,
    pub medium_w: f64,
    pub large_w: f64,
    pub extra_large_w: f64,
    pub age_factors: RefrigeratorAgeFactors,
}

impl RefrigeratorPower {
    pub fn watts(&self, size: RefrigeratorSize) -> f64 {
        match size {
            RefrigeratorSize::HalfCompact => self.half_compact_w,
            RefrigeratorSize::Small => self.small_w,
            RefrigeratorSize::Medium | RefrigeratorSize::Unknown => self.medium_w,
            RefrigeratorSize::Large => self.large_w,
            RefrigeratorSize::ExtraLarge => self.extra_large_w,
        }
    }
}

impl Default for RefrigeratorPower {
    fn default() -> Self {
        Self {
            half_compact_w: 40.0,
            small_w: 50.0,
            medium_w: 75.0,
            large_w: 100.0,
            extra_large_w: 150.0,
            age_factors: RefrigeratorAgeFactors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirConditionerPower {
    pub watts: f64,
    pub age_factors: AirConditionerAgeFactors,
}

impl Default for AirConditionerPower {
    fn default() -> Self {
        Self {
            watts: 1500.0,
            age_factors: AirConditionerAgeFactors::default(),
        }
    }
}

/// Average wattage per bulb for each technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingPower {
    pub led_w: f64,
    pub cfl_w: f64,
    pub incandescent_w: f64,
}

impl LightingPower {
    pub fn watts(&self, technology: BulbTechnology) -> f64 {
        match technology {
            BulbTechnology::Led => self.led_w,
            BulbTechnology::Cfl => self.cfl_w,
            BulbTechnology::Incandescent => self.incandescent_w,
        }
    }
}

impl Default for LightingPower {
    fn default() -> Self {
        Self {
            led_w: 10.0,
            cfl_w: 15.0,
            incandescent_w: 60.0,
        }
    }
}

/// Television wattage. Display technology sets the base; the size table only
/// contributes a ratio against the 27-39 inch entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelevisionPower {
    pub crt_w: f64,
    pub lcd_w: f64,
    pub led_w: f64,
    pub plasma_w: f64,
    pub oled_w: f64,
    pub less_than_27_in_w: f64,
    pub from_27_to_39_in_w: f64,
    pub from_40_to_59_in_w: f64,
    pub sixty_or_larger_in_w: f64,
}

impl TelevisionPower {
    pub fn type_watts(&self, tv_type: TvType) -> f64 {
        match tv_type {
            TvType::Crt => self.crt_w,
            TvType::Lcd => self.lcd_w,
            TvType::Led | TvType::Unknown => self.led_w,
            TvType::Plasma => self.plasma_w,
            TvType::Oled => self.oled_w,
        }
    }

    /// Ratio of the size's typical wattage to the 27-39 inch baseline.
    /// Unknown sizes, and a zero baseline, leave the type wattage unchanged.
    pub fn size_factor(&self, size: TvSize) -> f64 {
        let size_w = match size {
            TvSize::LessThan27 => self.less_than_27_in_w,
            TvSize::From27To39 => self.from_27_to_39_in_w,
            TvSize::From40To59 => self.from_40_to_59_in_w,
            TvSize::SixtyOrLarger => self.sixty_or_larger_in_w,
            TvSize::Unknown => return 1.0,
        };
        if self.from_27_to_39_in_w > 0.0 {
            size_w / self.from_27_to_39_in_w
        } else {
            1.0
        }
    }
}

impl Default for TelevisionPower {
    fn default() -> Self {
        Self {
            crt_w: 100.0,
            lcd_w: 80.0,
            led_w: 60.0,
            plasma_w: 200.0,
            oled_w: 70.0,
            less_than_27_in_w: 50.0,
            from_27_to_39_in_w: 75.0,
            from_40_to_59_in_w: 120.0,
            sixty_or_larger_in_w: 180.0,
        }
    }
}

/// Typical power draw (watts) per appliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplianceProfile {
    pub refrigerator: RefrigeratorPower,
    pub air_conditioner: AirConditionerPower,
    pub ceiling_fan_w: f64,
    pub lighting: LightingPower,
    pub television: TelevisionPower,
    pub water_heater_w: f64,
    pub clothes_washer_w: f64,
    pub clothes_dryer_w: f64,
    pub desktop_w: f64,
    pub laptop_w: f64,
    pub wireless_router_w: f64,
    pub toaster_w: f64,
    pub blender_w: f64,
    pub rice_cooker_w: f64,
}

impl Default for ApplianceProfile {
    fn default() -> Self {
        Self {
            refrigerator: RefrigeratorPower::default(),
            air_conditioner: AirConditionerPower::default(),
            ceiling_fan_w: 75.0,
            lighting: LightingPower::default(),
            television: TelevisionPower::default(),
            water_heater_w: 2000.0,
            clothes_washer_w: 500.0,
            clothes_dryer_w: 3000.0,
            desktop_w: 100.0,
            laptop_w: 50.0,
            wireless_router_w: 10.0,
            toaster_w: 1000.0,
            blender_w: 500.0,
            rice_cooker_w: 700.0,
        }
    }
}

/// Typical operating durations, usage multipliers and flat annual figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageProfile {
    pub refrigerator_daily_hours: f64,
    pub ac_daily_hours: f64,
    pub ceiling_fan_daily_hours: f64,
    pub lighting_long_use_daily_hours: f64,
    pub lighting_other_daily_hours: f64,
    pub tv_daily_hours_factor: f64,
    pub water_heater_daily_hours: f64,
    pub clothes_washer_cycle_hours: f64,
    pub clothes_washer_weekly_use_factor: f64,
    pub clothes_dryer_weekly_hours: f64,
    pub desktop_daily_hours: f64,
    pub laptop_daily_hours: f64,
    pub wireless_router_daily_hours: f64,
    pub small_appliance_daily_hours_factor: f64,
    pub toaster_duty_cycle: f64,
    pub blender_duty_cycle: f64,
    pub rice_cooker_duty_cycle: f64,
    pub coffee_maker_annual_kwh: f64,
    pub other_use_per_adult_kwh: f64,
    pub other_use_default_kwh: f64,
}

impl Default for UsageProfile {
    fn default() -> Self {
        Self {
            refrigerator_daily_hours: 24.0,
            ac_daily_hours: 8.0,
            ceiling_fan_daily_hours: 12.0,
            lighting_long_use_daily_hours: 6.0,
            lighting_other_daily_hours: 2.0,
            tv_daily_hours_factor: 1.0,
            water_heater_daily_hours: 1.0,
            clothes_washer_cycle_hours: 1.0,
            clothes_washer_weekly_use_factor: 1.0,
            clothes_dryer_weekly_hours: 1.5,
            desktop_daily_hours: 6.0,
            laptop_daily_hours: 8.0,
            wireless_router_daily_hours: 24.0,
            small_appliance_daily_hours_factor: 1.0,
            toaster_duty_cycle: 0.1,
            blender_duty_cycle: 0.05,
            rice_cooker_duty_cycle: 0.5,
            coffee_maker_annual_kwh: 60.0,
            other_use_per_adult_kwh: 100.0,
            other_use_default_kwh: 200.0,
        }
    }
}

/// BTU content per fuel unit and typical quantities for fuels reported as
/// present but unquantified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelConversionTable {
    pub lpg_btu_per_kg: f64,
    pub lpg_cylinder_kg: f64,
    pub fuel_oil_btu_per_litre: f64,
    pub natural_gas_btu_per_scm: f64,
    pub natural_gas_typical_annual_scm: f64,
    pub wood_btu_per_kg: f64,
    pub wood_typical_annual_kg: f64,
    pub kwh_to_btu: f64,
}

impl Default for FuelConversionTable {
    fn default() -> Self {
        Self {
            lpg_btu_per_kg: 47_500.0,
            lpg_cylinder_kg: 14.2,
            fuel_oil_btu_per_litre: 38_000.0,
            natural_gas_btu_per_scm: 35_000.0,
            natural_gas_typical_annual_scm: 150.0,
            wood_btu_per_kg: 7_000.0,
            wood_typical_annual_kg: 500.0,
            kwh_to_btu: 3412.14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationSettings {
    /// Multiplier turning the reported bill-period consumption into an
    /// annual figure. Bills cover two months, hence 6.
    pub bill_periods_per_year: f64,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            bill_periods_per_year: 6.0,
        }
    }
}

/// Everything the estimator and calibrator read, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub appliances: ApplianceProfile,
    pub usage: UsageProfile,
    pub fuels: FuelConversionTable,
    pub calibration: CalibrationSettings,
}

impl EstimatorConfig {
    /// Every configured number paired with its path, for validation.
    pub fn named_values(&self) -> Vec<(String, f64)> {
        let a = &self.appliances;
        let u = &self.usage;
        let f = &self.fuels;
        let mut values = vec![
            ("appliances.refrigerator.half_compact_w", a.refrigerator.half_compact_w),
            ("appliances.refrigerator.small_w", a.refrigerator.small_w),
            ("appliances.refrigerator.medium_w", a.refrigerator.medium_w),
            ("appliances.refrigerator.large_w", a.refrigerator.large_w),
            ("appliances.refrigerator.extra_large_w", a.refrigerator.extra_large_w),
            ("appliances.air_conditioner.watts", a.air_conditioner.watts),
            ("appliances.ceiling_fan_w", a.ceiling_fan_w),
            ("appliances.lighting.led_w", a.lighting.led_w),
            ("appliances.lighting.cfl_w", a.lighting.cfl_w),
            ("appliances.lighting.incandescent_w", a.lighting.incandescent_w),
            ("appliances.television.crt_w", a.television.crt_w),
            ("appliances.television.lcd_w", a.television.lcd_w),
            ("appliances.television.led_w", a.television.led_w),
            ("appliances.television.plasma_w", a.television.plasma_w),
            ("appliances.television.oled_w", a.television.oled_w),
            ("appliances.television.less_than_27_in_w", a.television.less_than_27_in_w),
            ("appliances.television.from_27_to_39_in_w", a.television.from_27_to_39_in_w),
            ("appliances.television.from_40_to_59_in_w", a.television.from_40_to_59_in_w),
            ("appliances.television.sixty_or_larger_in_w", a.television.sixty_or_larger_in_w),
            ("appliances.water_heater_w", a.water_heater_w),
            ("appliances.clothes_washer_w", a.clothes_washer_w),
            ("appliances.clothes_dryer_w", a.clothes_dryer_w),
            ("appliances.desktop_w", a.desktop_w),
            ("appliances.laptop_w", a.laptop_w),
            ("appliances.wireless_router_w", a.wireless_router_w),
            ("appliances.toaster_w", a.toaster_w),
            ("appliances.blender_w", a.blender_w),
            ("appliances.rice_cooker_w", a.rice_cooker_w),
            ("usage.refrigerator_daily_hours", u.refrigerator_daily_hours),
            ("usage.ac_daily_hours", u.ac_daily_hours),
            ("usage.ceiling_fan_daily_hours", u.ceiling_fan_daily_hours),
            ("usage.lighting_long_use_daily_hours", u.lighting_long_use_daily_hours),
            ("usage.lighting_other_daily_hours", u.lighting_other_daily_hours),
            ("usage.tv_daily_hours_factor", u.tv_daily_hours_factor),
            ("usage.water_heater_daily_hours", u.water_heater_daily_hours),
            ("usage.clothes_washer_cycle_hours", u.clothes_washer_cycle_hours),
            ("usage.clothes_washer_weekly_use_factor", u.clothes_washer_weekly_use_factor),
            ("usage.clothes_dryer_weekly_hours", u.clothes_dryer_weekly_hours),
            ("usage.desktop_daily_hours", u.desktop_daily_hours),
            ("usage.laptop_daily_hours", u.laptop_daily_hours),
            ("usage.wireless_router_daily_hours", u.wireless_router_daily_hours),
            ("usage.small_appliance_daily_hours_factor", u.small_appliance_daily_hours_factor),
            ("usage.toaster_duty_cycle", u.toaster_duty_cycle),
            ("usage.blender_duty_cycle", u.blender_duty_cycle),
            ("usage.rice_cooker_duty_cycle", u.rice_cooker_duty_cycle),
            ("usage.coffee_maker_annual_kwh", u.coffee_maker_annual_kwh),
            ("usage.other_use_per_adult_kwh", u.other_use_per_adult_kwh),
            ("usage.other_use_default_kwh", u.other_use_default_kwh),
            ("fuels.lpg_btu_per_kg", f.lpg_btu_per_kg),
            ("fuels.lpg_cylinder_kg", f.lpg_cylinder_kg),
            ("fuels.fuel_oil_btu_per_litre", f.fuel_oil_btu_per_litre),
            ("fuels.natural_gas_btu_per_scm", f.natural_gas_btu_per_scm),
            ("fuels.natural_gas_typical_annual_scm", f.natural_gas_typical_annual_scm),
            ("fuels.wood_btu_per_kg", f.wood_btu_per_kg),
            ("fuels.wood_typical_annual_kg", f.wood_typical_annual_kg),
            ("fuels.kwh_to_btu", f.kwh_to_btu),
            ("calibration.bill_periods_per_year", self.calibration.bill_periods_per_year),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect::<Vec<_>>();

        for (prefix, factors) in [
            ("appliances.refrigerator.age_factors", a.refrigerator.age_factors.values()),
            ("appliances.air_conditioner.age_factors", a.air_conditioner.age_factors.values()),
        ] {
            for (i, value) in factors.into_iter().enumerate() {
                values.push((format!("{}[{}]", prefix, i), value));
            }
        }
        values
    }
}
