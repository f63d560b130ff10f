//! Anthropometric measurement record
//!
//! One appointment's worth of skinfold, circumference and bone-width
//! measurements. Every measurement is optional: each estimation formula
//! checks for the fields it needs and yields no result when they are absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Biological sex, selects formula coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// A set of anthropometric measurements taken on one occasion
///
/// Skinfolds are in millimeters; circumferences and bone widths in
/// centimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub sex: Sex,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,

    // Skinfolds (mm)
    pub triceps_mm: Option<f64>,
    pub subscapular_mm: Option<f64>,
    pub suprailiac_mm: Option<f64>,
    pub chest_mm: Option<f64>,
    pub axillary_mm: Option<f64>,
    pub abdominal_mm: Option<f64>,
    pub thigh_mm: Option<f64>,
    pub biceps_mm: Option<f64>,

    // Circumferences (cm)
    pub arm_cm: Option<f64>,
    pub calf_cm: Option<f64>,
    pub wrist_cm: Option<f64>,

    // Bone widths (cm)
    pub humerus_cm: Option<f64>,
    pub femur_cm: Option<f64>,

    /// Date the measurements were taken, if the caller tracks it
    pub measured_on: Option<NaiveDate>,
}

impl MeasurementRecord {
    /// An empty record for the given sex
    pub fn new(sex: Sex) -> Self {
        Self {
            sex,
            age: None,
            weight_kg: None,
            height_cm: None,
            triceps_mm: None,
            subscapular_mm: None,
            suprailiac_mm: None,
            chest_mm: None,
            axillary_mm: None,
            abdominal_mm: None,
            thigh_mm: None,
            biceps_mm: None,
            arm_cm: None,
            calf_cm: None,
            wrist_cm: None,
            humerus_cm: None,
            femur_cm: None,
            measured_on: None,
        }
    }

    /// Height in meters, when present and positive
    pub fn height_m(&self) -> Option<f64> {
        positive(self.height_cm).map(|h| h / 100.0)
    }
}

/// Filter out missing and non-positive measurement values.
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Completed years between a date of birth and a reference date.
///
/// Returns None when `on` precedes `dob`. Callers that store a patient's
/// date of birth use this to fill the `age` input of the estimation formulas.
pub fn age_on(dob: NaiveDate, on: NaiveDate) -> Option<u32> {
    on.years_since(dob)
}
