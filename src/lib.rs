//! Nutritional measurement and energy estimation engine
//!
//! The computational core of a nutrition practice: resolving household
//! portions of foods into gram masses and nutrient totals, estimating body
//! composition from anthropometric measurements, and computing and comparing
//! energy expenditure across the published protocols.
//!
//! Everything here is pure, synchronous computation over small records. The
//! engine holds no state, performs no I/O and persists nothing; callers own
//! the records going in and the results coming out.

pub mod body;
pub mod energy;
pub mod error;
pub mod models;
pub mod portion;

pub use error::{EngineError, EngineResult};
