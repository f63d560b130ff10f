//! Shared nutrition data structure
//!
//! Used for resolved portions and for meal/day totals built by callers.

use serde::{Deserialize, Serialize};

/// Calories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Calories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Calories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Recompute calories from macronutrient grams.
///
/// This is the only calorie figure the engine ever reports. Stored label
/// calories can disagree with the label's own macro breakdown, so totals are
/// always rebuilt from protein, carbs and fat.
pub fn calories_from_macros(protein: f64, carbs: f64, fat: f64) -> f64 {
    protein * KCAL_PER_G_PROTEIN + carbs * KCAL_PER_G_CARBS + fat * KCAL_PER_G_FAT
}

/// Nutritional information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
    pub fiber: f64,   // grams
    pub sodium: f64,  // milligrams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sodium: self.sodium * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sodium: self.sodium + other.sodium,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}
