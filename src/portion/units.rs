//! Weight unit constants and recognition
//!
//! Standard mass units a portion can be entered in directly, bypassing the
//! household-measure tables entirely.

use serde::{Deserialize, Serialize};

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// A standard weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Grams,
    Milligrams,
    Kilograms,
    Ounces,
    Pounds,
}

impl WeightUnit {
    /// Conversion factor to grams
    pub fn grams(&self) -> f64 {
        match self {
            WeightUnit::Grams => 1.0,
            WeightUnit::Milligrams => G_PER_MG,
            WeightUnit::Kilograms => G_PER_KG,
            WeightUnit::Ounces => G_PER_OZ,
            WeightUnit::Pounds => G_PER_LB,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Grams => "g",
            WeightUnit::Milligrams => "mg",
            WeightUnit::Kilograms => "kg",
            WeightUnit::Ounces => "oz",
            WeightUnit::Pounds => "lb",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "g" | "gram" | "grams" => Some(WeightUnit::Grams),
            "mg" | "milligram" | "milligrams" => Some(WeightUnit::Milligrams),
            "kg" | "kilogram" | "kilograms" => Some(WeightUnit::Kilograms),
            "oz" | "ounce" | "ounces" => Some(WeightUnit::Ounces),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pounds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(WeightUnit::from_str("g"), Some(WeightUnit::Grams));
        assert_eq!(WeightUnit::from_str("Grams"), Some(WeightUnit::Grams));
        assert_eq!(WeightUnit::from_str("lbs"), Some(WeightUnit::Pounds));
        assert_eq!(WeightUnit::from_str("cup"), None);
    }

    #[test]
    fn test_grams_factors() {
        assert_eq!(WeightUnit::Grams.grams(), 1.0);
        assert_eq!(WeightUnit::Kilograms.grams(), G_PER_KG);
        assert!((WeightUnit::Ounces.grams() - 28.3495).abs() < 1e-9);
    }
}
