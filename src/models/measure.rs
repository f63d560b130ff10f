//! Household measure models
//!
//! Generic household measures ("cup", "slice", "unit") and food-specific
//! gram conversions, plus the in-memory catalog the portion resolver
//! looks them up in. Food-specific conversions always win over the generic
//! measure's gram equivalent.

use serde::{Deserialize, Serialize};

/// Category of a household measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureCategory {
    /// Volume measures (cup, tablespoon)
    Volume,
    /// Weight measures (gram, ounce)
    Weight,
    /// Discrete units (slice, piece, unit)
    Unit,
    /// Anything else (scoop, handful)
    Other,
}

impl MeasureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureCategory::Volume => "volume",
            MeasureCategory::Weight => "weight",
            MeasureCategory::Unit => "unit",
            MeasureCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "volume" => Some(MeasureCategory::Volume),
            "weight" => Some(MeasureCategory::Weight),
            "unit" => Some(MeasureCategory::Unit),
            "other" => Some(MeasureCategory::Other),
            _ => None,
        }
    }
}

/// A generic household measure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdMeasure {
    pub id: i64,
    pub name: String,
    pub category: MeasureCategory,
    /// Grams for one of this measure, when the measure has a meaningful
    /// food-independent mass (e.g. "tablespoon" ~ 15g). Discrete units
    /// usually leave this unset.
    pub grams_equivalent: Option<f64>,
    /// Display ordering in pickers
    pub sort_order: i32,
}

/// A food-specific override for a household measure
///
/// Example: for food "bread", measure "slice", quantity 1, grams 28.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodMeasureConversion {
    pub food_id: i64,
    pub measure_id: i64,
    /// Measure quantity the gram figure refers to
    pub quantity: f64,
    /// Grams for `quantity` of the measure
    pub grams: f64,
}

/// Lookup catalog over the measure tables
///
/// Built per call (or cached by the caller) from the generic measures and the
/// food-specific conversions currently registered.
#[derive(Debug, Clone, Default)]
pub struct MeasureCatalog {
    measures: Vec<HouseholdMeasure>,
    conversions: Vec<FoodMeasureConversion>,
}

impl MeasureCatalog {
    pub fn new(measures: Vec<HouseholdMeasure>, conversions: Vec<FoodMeasureConversion>) -> Self {
        Self {
            measures,
            conversions,
        }
    }

    /// Look up a generic measure by id
    pub fn measure(&self, measure_id: i64) -> Option<&HouseholdMeasure> {
        self.measures.iter().find(|m| m.id == measure_id)
    }

    /// Look up the food-specific conversion for (food, measure)
    pub fn conversion(&self, food_id: i64, measure_id: i64) -> Option<&FoodMeasureConversion> {
        self.conversions
            .iter()
            .find(|c| c.food_id == food_id && c.measure_id == measure_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for c in [
            MeasureCategory::Volume,
            MeasureCategory::Weight,
            MeasureCategory::Unit,
            MeasureCategory::Other,
        ] {
            assert_eq!(MeasureCategory::from_str(c.as_str()), Some(c));
        }
        assert_eq!(MeasureCategory::from_str("portion"), None);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = MeasureCatalog::new(
            vec![HouseholdMeasure {
                id: 7,
                name: "tablespoon".to_string(),
                category: MeasureCategory::Volume,
                grams_equivalent: Some(15.0),
                sort_order: 1,
            }],
            vec![FoodMeasureConversion {
                food_id: 3,
                measure_id: 7,
                quantity: 1.0,
                grams: 12.0,
            }],
        );

        assert!(catalog.measure(7).is_some());
        assert!(catalog.measure(8).is_none());
        assert!(catalog.conversion(3, 7).is_some());
        // Conversion is food-specific: another food misses
        assert!(catalog.conversion(4, 7).is_none());
    }
}
