//! Body mass index
//!
//! BMI and its WHO classification bands, computed from the same measurement
//! record the other estimators use.

use serde::{Deserialize, Serialize};

use crate::models::{positive, MeasurementRecord};

/// WHO BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    ObesityClass1,
    ObesityClass2,
    ObesityClass3,
}

impl BmiClass {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25.0 {
            BmiClass::Normal
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else if bmi < 35.0 {
            BmiClass::ObesityClass1
        } else if bmi < 40.0 {
            BmiClass::ObesityClass2
        } else {
            BmiClass::ObesityClass3
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::ObesityClass1 => "Obesity class I",
            BmiClass::ObesityClass2 => "Obesity class II",
            BmiClass::ObesityClass3 => "Obesity class III",
        }
    }
}

/// BMI (kg/m²), None when weight or height is missing.
pub fn bmi(m: &MeasurementRecord) -> Option<f64> {
    let weight = positive(m.weight_kg)?;
    let height_m = m.height_m()?;
    Some(weight / (height_m * height_m))
}

/// BMI plus its WHO band.
pub fn classify_bmi(m: &MeasurementRecord) -> Option<(f64, BmiClass)> {
    let value = bmi(m)?;
    Some((value, BmiClass::from_bmi(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn record(weight_kg: f64, height_cm: f64) -> MeasurementRecord {
        let mut m = MeasurementRecord::new(Sex::Female);
        m.weight_kg = Some(weight_kg);
        m.height_cm = Some(height_cm);
        m
    }

    #[test]
    fn test_bmi_value() {
        // 70kg at 1.75m -> 22.86
        let b = bmi(&record(70.0, 175.0)).unwrap();
        assert!((b - 22.857).abs() < 0.01, "bmi = {}", b);
    }

    #[test]
    fn test_bmi_missing_inputs() {
        let mut m = record(70.0, 175.0);
        m.height_cm = None;
        assert!(bmi(&m).is_none());
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(BmiClass::from_bmi(17.0), BmiClass::Underweight);
        assert_eq!(BmiClass::from_bmi(18.5), BmiClass::Normal);
        assert_eq!(BmiClass::from_bmi(24.99), BmiClass::Normal);
        assert_eq!(BmiClass::from_bmi(27.0), BmiClass::Overweight);
        assert_eq!(BmiClass::from_bmi(32.0), BmiClass::ObesityClass1);
        assert_eq!(BmiClass::from_bmi(38.0), BmiClass::ObesityClass2);
        assert_eq!(BmiClass::from_bmi(41.0), BmiClass::ObesityClass3);
    }

    #[test]
    fn test_classify_bmi() {
        let (value, class) = classify_bmi(&record(95.0, 175.0)).unwrap();
        assert!(value > 30.0);
        assert_eq!(class, BmiClass::ObesityClass1);
    }
}
