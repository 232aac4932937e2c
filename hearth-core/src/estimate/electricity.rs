use super::{daily_kwh, weekly_kwh, Estimator, DAYS_PER_YEAR};
use crate::numeric::round2;
use hearth_schemas::{
    breakdown::ElectricityBreakdown, category::ApplianceCategory, household::HouseholdRecord,
    profile::EstimatorConfig,
};

/// A category rule returns `None` when its presence gate is closed.
type CategoryRule = fn(&EstimatorConfig, &HouseholdRecord) -> Option<f64>;

const RULES: [(ApplianceCategory, CategoryRule); 12] = [
    (ApplianceCategory::Refrigerator, refrigerator_kwh),
    (ApplianceCategory::AirConditioning, air_conditioning_kwh),
    (ApplianceCategory::CeilingFans, ceiling_fan_kwh),
    (ApplianceCategory::Lighting, lighting_kwh),
    (ApplianceCategory::Televisions, television_kwh),
    (ApplianceCategory::WaterHeater, water_heater_kwh),
    (ApplianceCategory::ClothesWasher, clothes_washer_kwh),
    (ApplianceCategory::ClothesDryer, clothes_dryer_kwh),
    (ApplianceCategory::Computing, computing_kwh),
    (ApplianceCategory::CoffeeMaker, coffee_maker_kwh),
    (ApplianceCategory::SmallKitchen, small_kitchen_kwh),
    (ApplianceCategory::OtherUse, other_use_kwh),
];

impl Estimator<'_> {
    /// Uncalibrated kWh per year for every category whose gate is open.
    pub fn estimate_electricity(&self, household: &HouseholdRecord) -> ElectricityBreakdown {
        RULES
            .iter()
            .filter_map(|(category, rule)| {
                rule(self.config, household).map(|kwh| (*category, kwh))
            })
            .collect()
    }
}

fn refrigerator_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let answers = &household.refrigerators;
    if answers.count <= 0.0 {
        return None;
    }
    let fridge = &config.appliances.refrigerator;
    let base = daily_kwh(fridge.watts(answers.size), config.usage.refrigerator_daily_hours);
    let aged = base * fridge.age_factors.factor(answers.age);
    Some(round2(aged * answers.count))
}

fn air_conditioning_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let cooling = &household.cooling;
    if !(cooling.has_ac && cooling.uses_central_ac) {
        return None;
    }
    let ac = &config.appliances.air_conditioner;
    let base = daily_kwh(ac.watts, config.usage.ac_daily_hours);
    Some(round2(base * ac.age_factors.factor(cooling.central_ac_age)))
}

fn ceiling_fan_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let fans = household.cooling.num_ceiling_fans;
    if fans <= 0.0 {
        return None;
    }
    let per_fan = daily_kwh(config.appliances.ceiling_fan_w, config.usage.ceiling_fan_daily_hours);
    Some(round2(per_fan * fans))
}

fn lighting_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let lighting = &household.lighting;
    if lighting.bulbs_total <= 0.0 {
        return None;
    }
    let usage = &config.usage;
    let bulb_w = config.appliances.lighting.watts(lighting.technology());

    let mut kwh = 0.0;
    if lighting.bulbs_four_hours_plus > 0.0 {
        let per_bulb = daily_kwh(bulb_w, usage.lighting_long_use_daily_hours);
        kwh += round2(per_bulb * lighting.bulbs_four_hours_plus);
    }
    let remaining = lighting.bulbs_total - lighting.bulbs_four_hours_plus;
    if remaining > 0.0 {
        let per_bulb = daily_kwh(bulb_w, usage.lighting_other_daily_hours);
        kwh += round2(per_bulb * remaining);
    }
    Some(round2(kwh))
}

fn television_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let tv = &household.televisions;
    if tv.count <= 0.0 || tv.daily_hours <= 0.0 {
        return None;
    }
    let table = &config.appliances.television;
    let watts = table.type_watts(tv.tv_type) * table.size_factor(tv.size);
    let hours = tv.daily_hours * config.usage.tv_daily_hours_factor;
    Some(round2(daily_kwh(watts, hours) * tv.count))
}

fn water_heater_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let heater = &household.water_heater;
    if !(heater.has_water_heater && heater.electric) {
        return None;
    }
    Some(round2(daily_kwh(
        config.appliances.water_heater_w,
        config.usage.water_heater_daily_hours,
    )))
}

fn clothes_washer_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let laundry = &household.laundry;
    if !laundry.has_washer || laundry.washer_loads_per_week <= 0.0 {
        return None;
    }
    let usage = &config.usage;
    let loads = laundry.washer_loads_per_week * usage.clothes_washer_weekly_use_factor;
    Some(round2(weekly_kwh(
        config.appliances.clothes_washer_w,
        usage.clothes_washer_cycle_hours * loads,
    )))
}

fn clothes_dryer_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let laundry = &household.laundry;
    if !(laundry.has_dryer && laundry.dryer_electric) {
        return None;
    }
    Some(round2(weekly_kwh(
        config.appliances.clothes_dryer_w,
        config.usage.clothes_dryer_weekly_hours,
    )))
}

fn computing_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let computing = &household.computing;
    let appliances = &config.appliances;
    let usage = &config.usage;

    let mut kwh = 0.0;
    if computing.desktops > 0.0 {
        kwh += round2(daily_kwh(appliances.desktop_w, usage.desktop_daily_hours) * computing.desktops);
    }
    if computing.laptops > 0.0 {
        kwh += round2(daily_kwh(appliances.laptop_w, usage.laptop_daily_hours) * computing.laptops);
    }
    if computing.has_wireless_router {
        kwh += round2(daily_kwh(appliances.wireless_router_w, usage.wireless_router_daily_hours));
    }
    (kwh > 0.0).then(|| round2(kwh))
}

fn coffee_maker_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    household
        .kitchen
        .coffee_maker
        .then(|| round2(config.usage.coffee_maker_annual_kwh))
}

/// Toaster, blender and rice cooker share one bucket. Each runs at its rated
/// wattage for a fixed fraction of an hour per day.
fn small_kitchen_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let kitchen = &household.kitchen;
    let appliances = &config.appliances;
    let usage = &config.usage;
    let duty = |watts: f64, fraction: f64| {
        round2(watts * fraction * usage.small_appliance_daily_hours_factor * DAYS_PER_YEAR / 1000.0)
    };

    let mut kwh = 0.0;
    if kitchen.toaster {
        kwh += duty(appliances.toaster_w, usage.toaster_duty_cycle);
    }
    if kitchen.blender {
        kwh += duty(appliances.blender_w, usage.blender_duty_cycle);
    }
    if kitchen.rice_cooker {
        kwh += duty(appliances.rice_cooker_w, usage.rice_cooker_duty_cycle);
    }
    (kwh > 0.0).then(|| round2(kwh))
}

/// Always present: a per-adult allowance, or a flat default when no adults
/// were reported.
fn other_use_kwh(config: &EstimatorConfig, household: &HouseholdRecord) -> Option<f64> {
    let usage = &config.usage;
    let adults = household.respondent.num_adults;
    let kwh = if adults > 0.0 {
        usage.other_use_per_adult_kwh * adults
    } else {
        usage.other_use_default_kwh
    };
    Some(round2(kwh))
}
