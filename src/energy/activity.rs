//! Activity levels, exercise energy and goal adjustment
//!
//! The discrete physical-activity multipliers applied to a basal rate, the
//! MET arithmetic for a patient's selected exercises, and the flat calorie
//! adjustment used by the macro calculator.

use serde::{Deserialize, Serialize};

use crate::models::Sex;

/// Physical activity level, selects the PAL multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
    Extreme,
}

impl ActivityLevel {
    /// The PAL multiplier applied to a basal rate to obtain total expenditure
    pub fn pal(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }

    /// The IOM physical-activity coefficient used by the energy-requirement
    /// protocols. The two highest levels share the "very active" coefficient.
    pub fn eer_pa(&self, sex: Sex) -> f64 {
        match (self, sex) {
            (ActivityLevel::Sedentary, _) => 1.0,
            (ActivityLevel::Light, Sex::Male) => 1.11,
            (ActivityLevel::Light, Sex::Female) => 1.12,
            (ActivityLevel::Moderate, Sex::Male) => 1.25,
            (ActivityLevel::Moderate, Sex::Female) => 1.27,
            (ActivityLevel::Intense | ActivityLevel::Extreme, Sex::Male) => 1.48,
            (ActivityLevel::Intense | ActivityLevel::Extreme, Sex::Female) => 1.45,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Intense => "intense",
            ActivityLevel::Extreme => "extreme",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Some(ActivityLevel::Light),
            "moderate" | "moderately_active" => Some(ActivityLevel::Moderate),
            "intense" | "very_active" => Some(ActivityLevel::Intense),
            "extreme" | "extremely_active" => Some(ActivityLevel::Extreme),
            _ => None,
        }
    }
}

/// One selected exercise with its MET cost and weekly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseActivity {
    pub exercise_id: i64,
    /// Metabolic equivalent of the exercise
    pub met: f64,
    /// Minutes per session
    pub minutes: f64,
    /// Sessions per week
    pub days_per_week: u32,
}

/// Calories burned in one session: MET x weight x hours.
pub fn session_kcal(met: f64, weight_kg: f64, minutes: f64) -> f64 {
    met * weight_kg * (minutes / 60.0)
}

/// Average daily calories from a weekly schedule of exercises.
pub fn daily_activity_kcal(activities: &[ExerciseActivity], weight_kg: f64) -> f64 {
    let weekly: f64 = activities
        .iter()
        .map(|a| session_kcal(a.met, weight_kg, a.minutes) * f64::from(a.days_per_week))
        .sum();
    weekly / 7.0
}

/// Prescription goal for the macro calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

/// Flat daily calorie step applied for a lose/gain goal
pub const GOAL_KCAL_STEP: f64 = 500.0;

/// Adjust a total expenditure for the prescription goal.
pub fn adjust_for_goal(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Lose => tdee - GOAL_KCAL_STEP,
        Goal::Maintain => tdee,
        Goal::Gain => tdee + GOAL_KCAL_STEP,
    }
}
