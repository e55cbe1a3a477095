//! Sampling strategy configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Sampling settings section
///
/// Radii are in cells; angles in radians. The defaults reproduce the
/// reference screening setup: probes start 12 cells out from the focal
/// point and step inward 2 cells at a time down to a 2-cell floor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SamplingSection {
    /// Radius of the first probe ring around the focal point
    #[serde(default = "defaults::max_radius")]
    pub max_radius: f32,

    /// Smallest radius the inward fallback may reach
    #[serde(default = "defaults::min_radius")]
    pub min_radius: f32,

    /// Radius decrease per fallback step
    #[serde(default = "defaults::radius_step")]
    pub radius_step: f32,

    /// Sweep-angle advance after an accepted candidate
    #[serde(default = "defaults::sweep_advance")]
    pub sweep_advance: f32,

    /// Sweep-angle advance after a rejected candidate
    #[serde(default = "defaults::fine_step")]
    pub fine_step: f32,

    /// Iteration cap for one angle scan at a fixed radius
    #[serde(default = "defaults::scan_iterations")]
    pub scan_iterations: usize,

    /// Angular bucket width of the visibility boundary map
    #[serde(default = "defaults::boundary_bucket_width")]
    pub boundary_bucket_width: f32,

    /// Angular neighborhood searched for boundary evidence around a
    /// candidate's direction
    #[serde(default = "defaults::boundary_tolerance")]
    pub boundary_tolerance: f32,
}

impl Default for SamplingSection {
    fn default() -> Self {
        Self {
            max_radius: 12.0,
            min_radius: 2.0,
            radius_step: 2.0,
            sweep_advance: 0.2,
            fine_step: 0.01,
            scan_iterations: 360,
            boundary_bucket_width: 0.05,
            boundary_tolerance: 0.15,
        }
    }
}
