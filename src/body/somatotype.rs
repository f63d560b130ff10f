//! Heath-Carter somatotype
//!
//! Rates physique as endomorphy (relative fatness), mesomorphy
//! (musculoskeletal robustness) and ectomorphy (relative linearity), plus the
//! 2D somatochart coordinates derived from the three components. The result
//! is all-or-nothing: if any required measurement is missing, no component is
//! reported.

use serde::{Deserialize, Serialize};

use crate::models::{positive, MeasurementRecord};

/// Ratio above which the steep ectomorphy regression applies
const ECTO_UPPER_RATIO: f64 = 0.462;
/// Ratio at or below which ectomorphy bottoms out at its floor
const ECTO_LOWER_RATIO: f64 = 0.231;
/// Ectomorphy never drops to zero; the method floors it at 0.1
const ECTO_FLOOR: f64 = 0.1;

/// A complete somatotype rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Somatotype {
    pub endo: f64,
    pub meso: f64,
    pub ecto: f64,
    /// Somatochart abscissa: ecto - endo
    pub x: f64,
    /// Somatochart ordinate: 2*meso - (endo + ecto)
    pub y: f64,
}

/// Compute the Heath-Carter somatotype from a measurement record.
///
/// Needs height, weight, the triceps/subscapular/suprailiac skinfolds, both
/// bone widths and the arm and calf circumferences. Returns None when any of
/// them is missing, never a partially filled rating.
pub fn compute_somatotype(m: &MeasurementRecord) -> Option<Somatotype> {
    let height_cm = positive(m.height_cm)?;
    let weight_kg = positive(m.weight_kg)?;
    let triceps = positive(m.triceps_mm)?;
    let subscapular = positive(m.subscapular_mm)?;
    let suprailiac = positive(m.suprailiac_mm)?;
    let humerus = positive(m.humerus_cm)?;
    let femur = positive(m.femur_cm)?;
    let arm = positive(m.arm_cm)?;
    let calf = positive(m.calf_cm)?;

    let endo = endomorphy(triceps + subscapular + suprailiac);
    // Circumferences are corrected by the fold over them, mm -> cm. The calf
    // correction uses the subscapular fold: no calf fold is captured.
    let corrected_arm = arm - triceps / 10.0;
    let corrected_calf = calf - subscapular / 10.0;
    let meso = mesomorphy(humerus, femur, corrected_arm, corrected_calf, height_cm);
    let ecto = ectomorphy(height_cm, weight_kg);

    Some(Somatotype {
        endo,
        meso,
        ecto,
        x: ecto - endo,
        y: 2.0 * meso - (endo + ecto),
    })
}

/// Cubic regression on the 3-skinfold sum, floored at zero.
fn endomorphy(fold_sum: f64) -> f64 {
    let x = fold_sum;
    (-0.7182 + 0.1451 * x - 0.00068 * x * x + 0.0000014 * x * x * x).max(0.0)
}

fn mesomorphy(
    humerus_cm: f64,
    femur_cm: f64,
    corrected_arm_cm: f64,
    corrected_calf_cm: f64,
    height_cm: f64,
) -> f64 {
    let meso = 0.858 * humerus_cm + 0.601 * femur_cm + 0.188 * corrected_arm_cm
        + 0.161 * corrected_calf_cm
        - 0.131 * height_cm
        + 4.5;
    meso.max(0.0)
}

/// Piecewise-linear in the height/cbrt(weight) ratio, floored at 0.1.
fn ectomorphy(height_cm: f64, weight_kg: f64) -> f64 {
    let ratio = (height_cm / 100.0) / weight_kg.cbrt();
    let raw = if ratio >= ECTO_UPPER_RATIO {
        73.2 * ratio - 28.58
    } else if ratio > ECTO_LOWER_RATIO {
        46.3 * ratio - 17.63
    } else {
        ECTO_FLOOR
    };
    raw.max(ECTO_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn full_record() -> MeasurementRecord {
        let mut m = MeasurementRecord::new(Sex::Male);
        m.height_cm = Some(178.0);
        m.weight_kg = Some(75.0);
        m.triceps_mm = Some(9.0);
        m.subscapular_mm = Some(11.0);
        m.suprailiac_mm = Some(12.0);
        m.humerus_cm = Some(7.0);
        m.femur_cm = Some(9.6);
        m.arm_cm = Some(31.0);
        m.calf_cm = Some(37.0);
        m
    }

    #[test]
    fn test_full_record_produces_plausible_rating() {
        let s = compute_somatotype(&full_record()).unwrap();
        assert!(s.endo > 0.0 && s.endo < 10.0, "endo = {}", s.endo);
        assert!(s.meso > 0.0 && s.meso < 10.0, "meso = {}", s.meso);
        assert!(s.ecto >= ECTO_FLOOR && s.ecto < 10.0, "ecto = {}", s.ecto);
    }

    #[test]
    fn test_partial_record_yields_none() {
        // Endomorphy inputs alone are not enough
        let mut m = full_record();
        m.humerus_cm = None;
        assert!(compute_somatotype(&m).is_none());

        let mut m = full_record();
        m.calf_cm = None;
        assert!(compute_somatotype(&m).is_none());

        let mut m = full_record();
        m.weight_kg = None;
        assert!(compute_somatotype(&m).is_none());
    }

    #[test]
    fn test_endomorphy_floor() {
        // A vanishing fold sum drives the cubic negative; it is floored at 0
        assert_eq!(endomorphy(0.5), 0.0);
        assert!(endomorphy(1.0) >= 0.0);
        // Typical sums rate above zero
        assert!(endomorphy(32.0) > 2.0);
    }

    #[test]
    fn test_ectomorphy_floor_below_lower_ratio() {
        // 100cm, 125kg: ratio = 1.0/5.0 = 0.2 < 0.231 -> exactly the floor
        let e = ectomorphy(100.0, 125.0);
        assert_eq!(e, 0.1);
    }

    #[test]
    fn test_ectomorphy_middle_regime_clamped_to_floor() {
        // Ratio just above 0.231 makes the middle regression negative;
        // the floor still applies
        let ratio = 0.25;
        let weight = 70.0_f64;
        let height_cm = ratio * weight.cbrt() * 100.0;
        let e = ectomorphy(height_cm, weight);
        assert!(e >= 0.1);
    }

    #[test]
    fn test_ectomorphy_increases_with_linearity() {
        // Taller at equal weight -> more ectomorph
        let short = ectomorphy(160.0, 70.0);
        let tall = ectomorphy(190.0, 70.0);
        assert!(tall > short, "{} vs {}", tall, short);
    }

    #[test]
    fn test_coordinates() {
        let s = compute_somatotype(&full_record()).unwrap();
        assert!((s.x - (s.ecto - s.endo)).abs() < 1e-9);
        assert!((s.y - (2.0 * s.meso - (s.endo + s.ecto))).abs() < 1e-9);
    }

    #[test]
    fn test_calf_correction_uses_subscapular_fold() {
        // Raising the subscapular fold lowers mesomorphy through the calf
        // correction (and raises endomorphy through the fold sum)
        let base = compute_somatotype(&full_record()).unwrap();
        let mut m = full_record();
        m.subscapular_mm = Some(21.0);
        let fatter = compute_somatotype(&m).unwrap();
        assert!(fatter.meso < base.meso);
        assert!(fatter.endo > base.endo);
    }
}
