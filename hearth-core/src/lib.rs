//! Household energy estimation from survey answers.
//!
//! A survey row is mapped to a typed [`HouseholdRecord`], estimated
//! bottom-up per appliance category and fuel by the [`Estimator`], then
//! rescaled against the household's electricity bill by the [`Calibrator`].
//!
//! [`HouseholdRecord`]: hearth_schemas::household::HouseholdRecord
//! [`Estimator`]: estimate::Estimator
//! [`Calibrator`]: calibrate::Calibrator

pub mod aggregate;
pub mod analysis;
pub mod calibrate;
pub mod error;
pub mod estimate;
pub mod logger;
pub mod numeric;
pub mod survey;
