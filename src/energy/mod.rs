//! Energy expenditure estimation
//!
//! Named basal/total expenditure protocols, activity and goal adjustments,
//! the macro calculator and the cross-protocol comparator.

pub mod activity;
pub mod comparison;
pub mod macros;
pub mod protocol;

pub use activity::{
    adjust_for_goal, daily_activity_kcal, session_kcal, ActivityLevel, ExerciseActivity, Goal,
    GOAL_KCAL_STEP,
};
pub use comparison::{compare_protocols, ProtocolComparison, ProtocolComparisonEntry};
pub use macros::{goal_macro_targets, macro_targets, MacroTargets};
pub use protocol::{
    all_protocols, compute_protocol, compute_protocol_full, EnergyInputs, EnergyProtocolResult,
    ProtocolCategory, ProtocolDescriptor, ProtocolId,
};
