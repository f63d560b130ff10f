//! Portion resolution
//!
//! Turns "quantity × household measure" of a food into a gram mass and the
//! nutrient totals for that mass. Mass resolution is a strict fallback chain;
//! the outcome records which rung was used so callers can surface
//! low-confidence conversions without re-deriving the chain themselves.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{calories_from_macros, Food, MeasureCatalog, Nutrition};
use crate::portion::units::WeightUnit;

/// How the caller refers to the measure of a portion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureRef {
    /// A direct mass in a standard weight unit
    Weight(WeightUnit),
    /// A household measure id, resolved against the catalog
    Measure(i64),
}

/// Which rung of the mass-resolution chain produced the gram figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassResolution {
    /// Quantity was already a mass (no measure, or a standard weight unit)
    DirectWeight,
    /// A food-specific conversion was registered for the measure
    FoodConversion,
    /// The generic measure's gram equivalent was used
    GenericMeasure,
    /// Nothing matched; the food's default portion size was assumed
    DefaultPortion,
    /// The measure id is not registered at all; mass is zero
    MeasureNotFound,
}

/// A resolved portion: gram mass plus nutrient totals for that mass
///
/// Calories are recomputed from the scaled macros, never copied from the
/// food's stored calorie column. All values are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionNutrition {
    pub grams: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sodium: f64,
    pub resolution: MassResolution,
}

impl PortionNutrition {
    /// True when the mass came from the default-portion assumption and the
    /// caller should render a low-confidence warning.
    pub fn used_fallback(&self) -> bool {
        self.resolution == MassResolution::DefaultPortion
    }

    /// True when the referenced measure does not exist anywhere. The mass is
    /// zero so totals never silently show numbers for an unresolved measure.
    pub fn measure_not_found(&self) -> bool {
        self.resolution == MassResolution::MeasureNotFound
    }

    /// The totals as a [`Nutrition`], for summing into meal or day totals.
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            sodium: self.sodium,
        }
    }

    fn zeroed(resolution: MassResolution) -> Self {
        Self {
            grams: 0.0,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            sodium: 0.0,
            resolution,
        }
    }
}

/// Resolve a portion of a food into grams and nutrient totals.
///
/// Mass resolution tries, in order:
/// 1. no measure / a standard weight unit: the quantity is already a mass
/// 2. a food-specific [`FoodMeasureConversion`](crate::models::FoodMeasureConversion)
/// 3. the generic measure's `grams_equivalent`
/// 4. the food's default portion size (flagged as [`MassResolution::DefaultPortion`])
///
/// A measure id registered nowhere yields a zeroed result tagged
/// [`MassResolution::MeasureNotFound`]. A zero or negative quantity yields a
/// zeroed result without error.
pub fn resolve_portion(
    food: &Food,
    quantity: f64,
    measure: Option<&MeasureRef>,
    catalog: &MeasureCatalog,
) -> PortionNutrition {
    let (grams_per_unit, resolution) = mass_basis(food, measure, catalog);

    if quantity <= 0.0 {
        return PortionNutrition::zeroed(resolution);
    }

    let grams = (grams_per_unit * quantity).max(0.0);
    let multiplier = grams / 100.0;

    let protein = round2(food.protein_per_100g * multiplier);
    let carbs = round2(food.carbs_per_100g * multiplier);
    let fat = round2(food.fat_per_100g * multiplier);
    let fiber = round2(food.fiber_per_100g * multiplier);
    let sodium = round2(food.sodium_per_100g * multiplier);
    // From the rounded macros, so the reported figures stay consistent
    let calories = round2(calories_from_macros(protein, carbs, fat));

    PortionNutrition {
        grams: round2(grams),
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sodium,
        resolution,
    }
}

/// Grams for one unit of the referenced measure, and the rung that produced it.
fn mass_basis(
    food: &Food,
    measure: Option<&MeasureRef>,
    catalog: &MeasureCatalog,
) -> (f64, MassResolution) {
    let measure_id = match measure {
        None => return (1.0, MassResolution::DirectWeight),
        Some(MeasureRef::Weight(unit)) => return (unit.grams(), MassResolution::DirectWeight),
        Some(MeasureRef::Measure(id)) => *id,
    };

    if let Some(conv) = catalog
        .conversion(food.id, measure_id)
        .filter(|c| c.quantity > 0.0)
    {
        return (conv.grams / conv.quantity, MassResolution::FoodConversion);
    }

    match catalog.measure(measure_id) {
        Some(m) => match m.grams_equivalent.filter(|g| *g > 0.0) {
            Some(ge) => (ge, MassResolution::GenericMeasure),
            None => {
                warn!(
                    food = %food.name,
                    measure = %m.name,
                    "no gram equivalent for measure, assuming default portion"
                );
                (food.default_portion_grams(), MassResolution::DefaultPortion)
            }
        },
        None => {
            warn!(food = %food.name, measure_id, "measure not registered, resolving to zero mass");
            (0.0, MassResolution::MeasureNotFound)
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
