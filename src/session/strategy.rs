//! Probe selection: radius/angle sweep with graceful degradation.

use std::f32::consts::{PI, TAU};

use log::{debug, trace};

use crate::config::{GridSection, SamplingSection};
use crate::core::GridPoint;

use super::boundary::VisibilityBoundary;
use super::ledger::LocationLedger;
use super::quadrant::Quadrant;

/// Slack for >= comparisons on radii accumulated by repeated subtraction.
const RADIUS_EPS: f32 = 1e-4;

/// Coarse fallback step: one degree.
const COARSE_STEP: f32 = PI / 180.0;

/// Radius and sweep-angle cursors of the ongoing sweep.
///
/// Owned by the session machine and passed explicitly into selection, so
/// the strategy holds no state of its own between probes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepCursor {
    /// Current sampling radius (cells from the focal point)
    pub radius: f32,
    /// Sweep angle offset from the quadrant's base angle (radians)
    pub sweep_angle: f32,
}

impl SweepCursor {
    /// Cursor at the start of a quadrant run: maximum radius, zero sweep
    pub fn new(max_radius: f32) -> Self {
        Self {
            radius: max_radius,
            sweep_angle: 0.0,
        }
    }
}

/// Pick the next probe coordinate, or `None` when the quadrant is
/// exhausted.
///
/// Three passes, strictly ordered:
///
/// 1. angle sweep at the cursor's current radius, resuming from the
///    cursor's sweep angle;
/// 2. the same sweep at stepwise smaller radii (sweep angle reset per
///    radius) down to the minimum radius;
/// 3. a coarse one-degree full-circle scan over every radius from maximum
///    to minimum, ignoring the sweep cursor.
///
/// A candidate is accepted iff it lies in the quadrant's primary region,
/// its cell is not in the ledger, and it sits beyond the visibility
/// boundary. The whole search is deterministic and bounded; first
/// acceptable candidate wins.
pub fn select_next_probe(
    sampling: &SamplingSection,
    grid: &GridSection,
    quadrant: Quadrant,
    focal: GridPoint,
    ledger: &LocationLedger,
    boundary: &VisibilityBoundary,
    cursor: &mut SweepCursor,
) -> Option<GridPoint> {
    // Pass 1: continue the sweep where the cursor left off.
    if let Some(point) = sweep_at_radius(sampling, grid, quadrant, focal, ledger, boundary, cursor)
    {
        return Some(point);
    }

    // Pass 2: step the radius inward, restarting the sweep each time.
    let mut radius = cursor.radius - sampling.radius_step;
    while radius >= sampling.min_radius - RADIUS_EPS {
        cursor.radius = radius;
        cursor.sweep_angle = 0.0;
        if let Some(point) =
            sweep_at_radius(sampling, grid, quadrant, focal, ledger, boundary, cursor)
        {
            debug!(
                "[Select] {} sweep moved inward to radius {:.1}",
                quadrant.name(),
                radius
            );
            return Some(point);
        }
        radius -= sampling.radius_step;
    }

    // Pass 3: coarse full-circle rescan over all radii, cursor ignored.
    let mut radius = sampling.max_radius;
    while radius >= sampling.min_radius - RADIUS_EPS {
        for deg in 0..360 {
            let angle = deg as f32 * COARSE_STEP;
            if let Some(point) =
                acceptable(grid, quadrant, focal, ledger, boundary, angle, radius)
            {
                debug!(
                    "[Select] {} coarse rescan found ({}, {}) at radius {:.1}",
                    quadrant.name(),
                    point.x,
                    point.y,
                    radius
                );
                cursor.radius = radius;
                cursor.sweep_angle = 0.0;
                return Some(point);
            }
        }
        radius -= sampling.radius_step;
    }

    debug!("[Select] {} exhausted", quadrant.name());
    None
}

/// One bounded angle scan at the cursor's radius.
///
/// Advances the sweep angle by the fine step on every rejected candidate
/// and by the full sweep advance on acceptance, so consecutive accepted
/// probes spread around the arc instead of clustering.
fn sweep_at_radius(
    sampling: &SamplingSection,
    grid: &GridSection,
    quadrant: Quadrant,
    focal: GridPoint,
    ledger: &LocationLedger,
    boundary: &VisibilityBoundary,
    cursor: &mut SweepCursor,
) -> Option<GridPoint> {
    for _ in 0..sampling.scan_iterations {
        let angle = quadrant.base_angle() + cursor.sweep_angle;
        if let Some(point) = acceptable(
            grid,
            quadrant,
            focal,
            ledger,
            boundary,
            angle,
            cursor.radius,
        ) {
            cursor.sweep_angle = (cursor.sweep_angle + sampling.sweep_advance).rem_euclid(TAU);
            trace!(
                "[Select] {} accepted ({}, {}) at radius {:.1}, angle {:.2}",
                quadrant.name(),
                point.x,
                point.y,
                cursor.radius,
                angle
            );
            return Some(point);
        }
        cursor.sweep_angle = (cursor.sweep_angle + sampling.fine_step).rem_euclid(TAU);
    }
    None
}

/// Project, quantize, clamp, and filter one candidate.
#[allow(clippy::too_many_arguments)]
fn acceptable(
    grid: &GridSection,
    quadrant: Quadrant,
    focal: GridPoint,
    ledger: &LocationLedger,
    boundary: &VisibilityBoundary,
    angle: f32,
    radius: f32,
) -> Option<GridPoint> {
    let candidate = focal.point_at(angle, radius).clamp(grid.size);
    if quadrant.contains(candidate, grid.size, grid.quadrant_margin)
        && !ledger.is_tested(candidate)
        && boundary.is_beyond(candidate, focal)
    {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    fn setup() -> (FieldConfig, GridPoint, LocationLedger, VisibilityBoundary) {
        let config = FieldConfig::default();
        let focal = Quadrant::Q1.focal_point(config.grid.size);
        let ledger = LocationLedger::new();
        let boundary = VisibilityBoundary::new(
            config.sampling.boundary_bucket_width,
            config.sampling.boundary_tolerance,
        );
        (config, focal, ledger, boundary)
    }

    #[test]
    fn test_first_selection_is_in_region_and_bounds() {
        let (config, focal, ledger, boundary) = setup();
        let mut cursor = SweepCursor::new(config.sampling.max_radius);

        let point = select_next_probe(
            &config.sampling,
            &config.grid,
            Quadrant::Q1,
            focal,
            &ledger,
            &boundary,
            &mut cursor,
        )
        .expect("fresh quadrant must yield a probe");

        assert!(point.in_bounds(config.grid.size));
        assert!(Quadrant::Q1.contains(point, config.grid.size, config.grid.quadrant_margin));
    }

    #[test]
    fn test_never_returns_ledgered_point() {
        let (config, focal, mut ledger, boundary) = setup();
        let mut cursor = SweepCursor::new(config.sampling.max_radius);

        let mut previous = Vec::new();
        loop {
            let selected = select_next_probe(
                &config.sampling,
                &config.grid,
                Quadrant::Q1,
                focal,
                &ledger,
                &boundary,
                &mut cursor,
            );
            match selected {
                Some(point) => {
                    assert!(
                        !previous.contains(&point),
                        "repeated probe at ({}, {})",
                        point.x,
                        point.y
                    );
                    previous.push(point);
                    ledger.mark_tested(point);
                }
                None => break,
            }
        }
        assert!(!previous.is_empty());
    }

    #[test]
    fn test_sweep_descends_before_coarse_rescan() {
        // Under all-timeouts the cursor radius is non-increasing while the
        // sweep passes run; an outward jump can only come from the coarse
        // rescan, which fires only after the sweep has descended past the
        // innermost ring that can still reach the test region.
        let (config, focal, mut ledger, boundary) = setup();
        let mut cursor = SweepCursor::new(config.sampling.max_radius);
        let mut last_radius = cursor.radius;
        let mut min_radius_seen = cursor.radius;
        // Closest the Q1 region gets to its focal point, plus one step
        let region_floor = GridPoint::new(4, 4).distance(&GridPoint::new(8, 8))
            + config.sampling.radius_step;

        while let Some(point) = select_next_probe(
            &config.sampling,
            &config.grid,
            Quadrant::Q1,
            focal,
            &ledger,
            &boundary,
            &mut cursor,
        ) {
            if cursor.radius > last_radius + RADIUS_EPS {
                assert!(
                    min_radius_seen <= region_floor,
                    "outward jump to {:.1} before the sweep bottomed out (min seen {:.1})",
                    cursor.radius,
                    min_radius_seen
                );
            }
            last_radius = cursor.radius;
            min_radius_seen = min_radius_seen.min(cursor.radius);
            ledger.mark_tested(point);
        }
    }

    #[test]
    fn test_boundary_starves_inner_radii() {
        // If every direction's extent is already at max radius, smaller
        // radii cannot qualify and the quadrant exhausts quickly.
        let (config, focal, mut ledger, mut boundary) = setup();
        let mut cursor = SweepCursor::new(config.sampling.max_radius);

        let mut selections = 0;
        while let Some(point) = select_next_probe(
            &config.sampling,
            &config.grid,
            Quadrant::Q1,
            focal,
            &ledger,
            &boundary,
            &mut cursor,
        ) {
            // Everything selected sits on the outermost ring: inner radii
            // cannot exceed the evidence already recorded out there
            assert!(
                focal.distance(&point) >= config.sampling.max_radius - config.sampling.radius_step,
                "inner probe at ({}, {}) despite full outer boundary",
                point.x,
                point.y
            );
            ledger.mark_tested(point);
            boundary.record_seen(point, focal);
            selections += 1;
            assert!(selections < 10_000, "search not converging");
        }
        assert!(selections > 0);
    }

    #[test]
    fn test_exhaustion_when_region_fully_ledgered() {
        let (config, focal, mut ledger, boundary) = setup();
        // Ledger every cell of the grid
        for x in 0..config.grid.size as i32 {
            for y in 0..config.grid.size as i32 {
                ledger.mark_tested(GridPoint::new(x, y));
            }
        }
        let mut cursor = SweepCursor::new(config.sampling.max_radius);
        let selected = select_next_probe(
            &config.sampling,
            &config.grid,
            Quadrant::Q1,
            focal,
            &ledger,
            &boundary,
            &mut cursor,
        );
        assert_eq!(selected, None);
    }

    #[test]
    fn test_deterministic_given_same_inputs() {
        let (config, focal, ledger, boundary) = setup();

        let mut cursor_a = SweepCursor::new(config.sampling.max_radius);
        let mut cursor_b = SweepCursor::new(config.sampling.max_radius);

        let a = select_next_probe(
            &config.sampling,
            &config.grid,
            Quadrant::Q2,
            focal,
            &ledger,
            &boundary,
            &mut cursor_a,
        );
        let b = select_next_probe(
            &config.sampling,
            &config.grid,
            Quadrant::Q2,
            focal,
            &ledger,
            &boundary,
            &mut cursor_b,
        );
        assert_eq!(a, b);
        assert_eq!(cursor_a, cursor_b);
    }
}
