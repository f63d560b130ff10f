//! Protocol comparison
//!
//! Aggregates a set of protocol results so the practitioner can see how far
//! each basal estimate sits from the mean before committing one to the
//! patient record. The comparator computes; the caller persists.

use serde::Serialize;

use crate::energy::protocol::{EnergyProtocolResult, ProtocolCategory, ProtocolId};

/// One protocol's place in the comparison
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolComparisonEntry {
    pub protocol: ProtocolId,
    pub label: &'static str,
    pub category: ProtocolCategory,
    pub recommended: bool,
    pub athlete_oriented: bool,
    pub bmr: f64,
    /// Deviation from the mean basal rate, percent, rounded
    pub diff_percent: i32,
}

/// Comparison across the evaluated protocols
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolComparison {
    /// Mean basal rate over the protocols that produced one
    pub mean_bmr: f64,
    /// The PAL multiplier the comparison was requested for
    pub activity_factor: f64,
    pub entries: Vec<ProtocolComparisonEntry>,
}

/// Compare protocol results around their mean basal rate.
///
/// Only results with a positive basal rate participate; the energy-requirement
/// category and lean-mass protocols without a lean mass are left out rather
/// than dragged in as zeros. Returns None when nothing qualifies.
pub fn compare_protocols(
    results: &[EnergyProtocolResult],
    activity_factor: f64,
) -> Option<ProtocolComparison> {
    let with_bmr: Vec<(&EnergyProtocolResult, f64)> = results
        .iter()
        .filter_map(|r| r.bmr.filter(|b| *b > 0.0).map(|b| (r, b)))
        .collect();

    if with_bmr.is_empty() {
        return None;
    }

    let mean_bmr = with_bmr.iter().map(|(_, b)| b).sum::<f64>() / with_bmr.len() as f64;

    let entries = with_bmr
        .into_iter()
        .map(|(r, bmr)| {
            let descriptor = r.protocol.descriptor();
            ProtocolComparisonEntry {
                protocol: r.protocol,
                label: descriptor.label,
                category: descriptor.category,
                recommended: descriptor.recommended,
                athlete_oriented: descriptor.athlete_oriented,
                bmr,
                diff_percent: ((bmr - mean_bmr) / mean_bmr * 100.0).round() as i32,
            }
        })
        .collect();

    Some(ProtocolComparison {
        mean_bmr,
        activity_factor,
        entries,
    })
}
