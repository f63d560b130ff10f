//! Data models
//!
//! Plain records the engine computes over. All entities are read-only inputs
//! per call; the engine keeps no state between calls.

mod food;
mod measure;
mod measurement;
mod nutrition;

pub use food::Food;
pub use measure::{FoodMeasureConversion, HouseholdMeasure, MeasureCatalog, MeasureCategory};
pub use measurement::{age_on, MeasurementRecord, Sex};
pub use nutrition::{
    calories_from_macros, Nutrition, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

pub(crate) use measurement::positive;
