//! Body frame size classification
//!
//! Classifies skeletal frame from the height-to-wrist ratio, with
//! sex-specific cut points. A larger ratio means a finer wrist for the
//! height, hence a smaller frame.

use serde::{Deserialize, Serialize};

use crate::models::{positive, MeasurementRecord, Sex};

/// Ordinal frame size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSize {
    Small,
    Medium,
    Large,
}

impl FrameSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameSize::Small => "small",
            FrameSize::Medium => "medium",
            FrameSize::Large => "large",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FrameSize::Small => "Small frame",
            FrameSize::Medium => "Medium frame",
            FrameSize::Large => "Large frame",
        }
    }
}

/// Frame classification plus the raw ratio it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSizeResult {
    pub category: FrameSize,
    /// height_cm / wrist_cm
    pub ratio: f64,
}

/// Classify frame size from height and wrist circumference.
///
/// Returns None when either measurement is missing or non-positive.
pub fn compute_frame_size(m: &MeasurementRecord) -> Option<FrameSizeResult> {
    let height = positive(m.height_cm)?;
    let wrist = positive(m.wrist_cm)?;
    let ratio = height / wrist;

    let category = match m.sex {
        Sex::Male => {
            if ratio > 10.9 {
                FrameSize::Small
            } else if ratio > 9.9 {
                FrameSize::Medium
            } else {
                FrameSize::Large
            }
        }
        Sex::Female => {
            if ratio > 11.0 {
                FrameSize::Small
            } else if ratio > 10.1 {
                FrameSize::Medium
            } else {
                FrameSize::Large
            }
        }
    };

    Some(FrameSizeResult { category, ratio })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sex: Sex, height_cm: f64, wrist_cm: f64) -> MeasurementRecord {
        let mut m = MeasurementRecord::new(sex);
        m.height_cm = Some(height_cm);
        m.wrist_cm = Some(wrist_cm);
        m
    }

    #[test]
    fn test_male_thresholds() {
        // 175/15.5 = 11.29 -> small
        let r = compute_frame_size(&record(Sex::Male, 175.0, 15.5)).unwrap();
        assert_eq!(r.category, FrameSize::Small);

        // 175/17 = 10.29 -> medium
        let r = compute_frame_size(&record(Sex::Male, 175.0, 17.0)).unwrap();
        assert_eq!(r.category, FrameSize::Medium);

        // 175/19 = 9.21 -> large
        let r = compute_frame_size(&record(Sex::Male, 175.0, 19.0)).unwrap();
        assert_eq!(r.category, FrameSize::Large);
    }

    #[test]
    fn test_female_thresholds_sit_higher() {
        // Ratio 10.95: small for no one, medium for male, medium for female
        let male = compute_frame_size(&record(Sex::Male, 164.25, 15.0)).unwrap();
        let female = compute_frame_size(&record(Sex::Female, 164.25, 15.0)).unwrap();
        assert!((male.ratio - 10.95).abs() < 0.001);
        assert_eq!(male.category, FrameSize::Small);
        assert_eq!(female.category, FrameSize::Medium);
    }

    #[test]
    fn test_ratio_reported() {
        let r = compute_frame_size(&record(Sex::Male, 170.0, 17.0)).unwrap();
        assert!((r.ratio - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_or_invalid_inputs() {
        let mut m = MeasurementRecord::new(Sex::Male);
        assert!(compute_frame_size(&m).is_none());
        m.height_cm = Some(175.0);
        assert!(compute_frame_size(&m).is_none());
        m.wrist_cm = Some(0.0);
        assert!(compute_frame_size(&m).is_none());
    }
}
