use anyhow::{Context, Result};
use hearth_core::estimate::validate_config;
use hearth_schemas::{file_formats::ProfileFile, profile::EstimatorConfig};
use std::fs;
use tracing::{info, warn};

const SUPPORTED_SCHEMA_VERSION: &str = "1";

/// Loads the estimator profile, or the built-in tables when no file is given.
pub fn load_profile(path: Option<&str>) -> Result<EstimatorConfig> {
    let Some(path) = path else {
        info!("using built-in estimator profile");
        return Ok(EstimatorConfig::default());
    };

    println!("Loading estimator profile from '{}'...", path);
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile: {}", path))?;
    let config = parse_profile(&content)
        .with_context(|| format!("Failed to load profile from {}", path))?;

    println!("Estimator profile loaded successfully.");
    Ok(config)
}

/// Parses and validates a YAML profile.
pub fn parse_profile(content: &str) -> Result<EstimatorConfig> {
    let file: ProfileFile = serde_yaml::from_str(content).context("Failed to parse YAML")?;
    if file.schema_version != SUPPORTED_SCHEMA_VERSION {
        warn!(
            found = %file.schema_version,
            supported = SUPPORTED_SCHEMA_VERSION,
            "unexpected profile schema version"
        );
    }
    validate_config(&file.profile)?;
    Ok(file.profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_values_keep_defaults() {
        let yaml = r#"
schema_version: "1"
profile:
  appliances:
    refrigerator:
      medium_w: 90.0
  calibration:
    bill_periods_per_year: 12.0
"#;
        let config = parse_profile(yaml).unwrap();
        let defaults = EstimatorConfig::default();
        assert_eq!(config.appliances.refrigerator.medium_w, 90.0);
        assert_eq!(config.appliances.refrigerator.small_w, defaults.appliances.refrigerator.small_w);
        assert_eq!(config.calibration.bill_periods_per_year, 12.0);
        assert_eq!(config.usage, defaults.usage);
        assert_eq!(config.fuels, defaults.fuels);
    }

    #[test]
    fn partial_age_override_keeps_the_appliance_baseline() {
        let yaml = r#"
schema_version: "1"
profile:
  appliances:
    air_conditioner:
      age_factors:
        from_2_to_4: 1.04
"#;
        let config = parse_profile(yaml).unwrap();
        let ac = &config.appliances.air_conditioner.age_factors;
        assert_eq!(ac.from_2_to_4, 1.04);
        assert_eq!(ac.from_10_to_14, 1.15);
        assert_eq!(ac.twenty_or_more, 1.40);
        assert_eq!(config.appliances.refrigerator, EstimatorConfig::default().appliances.refrigerator);
    }

    #[test]
    fn empty_profile_section_is_the_default() {
        let config = parse_profile("schema_version: \"1\"\n").unwrap();
        assert_eq!(config, EstimatorConfig::default());
    }

    #[test]
    fn rejects_invalid_values() {
        let yaml = "schema_version: \"1\"\nprofile:\n  usage:\n    laptop_daily_hours: -2\n";
        let err = parse_profile(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("usage.laptop_daily_hours"));
    }

    #[test]
    fn requires_schema_version() {
        assert!(parse_profile("profile: {}\n").is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_profile(Some("/nonexistent/profile.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read profile"));
    }
}
