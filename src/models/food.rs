//! Food model
//!
//! A food with its per-100g nutrient profile, as registered in the practice's
//! food table or imported from a composition database.

use serde::{Deserialize, Serialize};

/// A food with nutrient values per 100 grams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    /// Protein per 100g (g)
    pub protein_per_100g: f64,
    /// Carbohydrates per 100g (g)
    pub carbs_per_100g: f64,
    /// Fat per 100g (g)
    pub fat_per_100g: f64,
    /// Fiber per 100g (g)
    pub fiber_per_100g: f64,
    /// Sodium per 100g (mg)
    pub sodium_per_100g: f64,
    /// Label calories per 100g. Kept for display; portion totals always
    /// recompute calories from the macro columns instead.
    pub calories_per_100g: Option<f64>,
    /// Default grams for one unit of this food when no household measure
    /// resolves (e.g. one banana ~ 120g)
    pub portion_size: Option<f64>,
}

impl Food {
    /// Grams assumed for one unit when neither a food-specific conversion nor
    /// a generic measure applies. Foods without a registered `portion_size`
    /// default to 100g.
    pub fn default_portion_grams(&self) -> f64 {
        self.portion_size.unwrap_or(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(portion_size: Option<f64>) -> Food {
        Food {
            id: 1,
            name: "Oats".to_string(),
            brand: None,
            protein_per_100g: 13.0,
            carbs_per_100g: 67.0,
            fat_per_100g: 7.0,
            fiber_per_100g: 10.0,
            sodium_per_100g: 5.0,
            calories_per_100g: Some(389.0),
            portion_size,
        }
    }

    #[test]
    fn test_default_portion_grams() {
        assert_eq!(food(Some(40.0)).default_portion_grams(), 40.0);
        assert_eq!(food(None).default_portion_grams(), 100.0);
    }
}
