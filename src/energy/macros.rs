//! Macro calculator
//!
//! Splits a daily calorie target into gram targets for protein, carbs and
//! fat. Used standalone: the caller picks a total (usually a goal-adjusted
//! GET) and a percentage split, and gets grams back via the 4/4/9 factors.

use serde::{Deserialize, Serialize};

use crate::energy::activity::{adjust_for_goal, Goal};
use crate::error::{EngineError, EngineResult};
use crate::models::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Tolerance when checking that a split adds up to 100%
const SPLIT_TOLERANCE: f64 = 0.01;

/// Daily macro targets in grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// The calorie total the split was computed from
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Split a calorie total into macro gram targets.
///
/// The percentages must sum to 100 (within a small tolerance) and the total
/// must be positive.
pub fn macro_targets(
    kcal: f64,
    protein_percent: f64,
    carbs_percent: f64,
    fat_percent: f64,
) -> EngineResult<MacroTargets> {
    if kcal <= 0.0 {
        return Err(EngineError::non_positive("kcal", kcal));
    }
    let sum = protein_percent + carbs_percent + fat_percent;
    if (sum - 100.0).abs() > SPLIT_TOLERANCE {
        return Err(EngineError::BadMacroSplit(sum));
    }

    Ok(MacroTargets {
        kcal,
        protein_g: kcal * protein_percent / 100.0 / KCAL_PER_G_PROTEIN,
        carbs_g: kcal * carbs_percent / 100.0 / KCAL_PER_G_CARBS,
        fat_g: kcal * fat_percent / 100.0 / KCAL_PER_G_FAT,
    })
}

/// Goal-adjust a total expenditure and split it in one step.
pub fn goal_macro_targets(
    tdee: f64,
    goal: Goal,
    protein_percent: f64,
    carbs_percent: f64,
    fat_percent: f64,
) -> EngineResult<MacroTargets> {
    macro_targets(
        adjust_for_goal(tdee, goal),
        protein_percent,
        carbs_percent,
        fat_percent,
    )
}
