//! Portion resolution module
//!
//! Converts "quantity × measure" of a food into grams and nutrient totals.

pub mod resolver;
pub mod units;

pub use resolver::{resolve_portion, MassResolution, MeasureRef, PortionNutrition};
pub use units::{WeightUnit, G_PER_KG, G_PER_LB, G_PER_MG, G_PER_OZ};
