use crate::profile::EstimatorConfig;
use serde::Deserialize;

/// On-disk wrapper for an estimator profile (YAML).
#[derive(Debug, Deserialize)]
pub struct ProfileFile {
    pub schema_version: String,
    #[serde(default)]
    pub profile: EstimatorConfig,
}
