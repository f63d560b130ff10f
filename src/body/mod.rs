//! Body composition estimation
//!
//! Density and fat-percentage formulas, frame size, BMI and the Heath-Carter
//! somatotype, all computed from a [`MeasurementRecord`](crate::models::MeasurementRecord).

pub mod density;
pub mod frame;
pub mod indices;
pub mod somatotype;

pub use density::{
    body_fat_percent, compute_body_density, estimate_body_fat, estimate_lean_mass, lean_mass_kg,
    DensityFormula,
};
pub use frame::{compute_frame_size, FrameSize, FrameSizeResult};
pub use indices::{bmi, classify_bmi, BmiClass};
pub use somatotype::{compute_somatotype, Somatotype};
