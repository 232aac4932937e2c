pub mod brackets;
pub mod breakdown;
pub mod category;
pub mod file_formats;
pub mod household;
pub mod profile;
