//! Visibility boundary model: farthest-seen distance per angular bucket.

use std::collections::HashMap;
use std::f32::consts::TAU;

use log::trace;

use crate::core::GridPoint;

/// Per-direction record of the farthest point found visible.
///
/// Directions around the focal point are discretized into angular buckets.
/// Each acknowledged probe extends its bucket's stored distance under a
/// farthest-seen-wins policy; only "seen" responses carry evidence, so
/// timeouts never move the boundary. Candidate selection then steers
/// sampling outward of the boundary: once a direction's visible extent is
/// known there is no value in re-confirming territory inside it.
#[derive(Clone, Debug)]
pub struct VisibilityBoundary {
    /// Angular bucket width (radians)
    bucket_width: f32,
    /// Buckets per full turn, for index wraparound at +-pi
    buckets_per_turn: i32,
    /// Half-width of the evidence neighborhood, in buckets
    tolerance_buckets: i32,
    /// Farthest seen distance per bucket index
    farthest_seen: HashMap<i32, f32>,
}

impl VisibilityBoundary {
    /// Create an empty boundary model.
    ///
    /// `tolerance` is the angular neighborhood (radians) searched for
    /// evidence around a candidate's direction.
    pub fn new(bucket_width: f32, tolerance: f32) -> Self {
        let buckets_per_turn = (TAU / bucket_width).round().max(1.0) as i32;
        let tolerance_buckets = (tolerance / bucket_width).round() as i32;
        Self {
            bucket_width,
            buckets_per_turn,
            tolerance_buckets,
            farthest_seen: HashMap::new(),
        }
    }

    /// Bucket index for an angle, wrapped to one turn
    fn bucket_of(&self, angle: f32) -> i32 {
        let idx = (angle / self.bucket_width).round() as i32;
        idx.rem_euclid(self.buckets_per_turn)
    }

    /// Extend the boundary with an acknowledged probe.
    ///
    /// Stores the probe's distance in its angle bucket unless the bucket
    /// already holds a larger one (monotonic max per bucket).
    pub fn record_seen(&mut self, point: GridPoint, focal: GridPoint) {
        let bucket = self.bucket_of(focal.angle_to(&point));
        let distance = focal.distance(&point);
        let entry = self.farthest_seen.entry(bucket).or_insert(distance);
        if distance > *entry {
            *entry = distance;
        }
        trace!(
            "[Boundary] bucket {} now extends to {:.2} cells",
            bucket, *entry
        );
    }

    /// Does `point` lie beyond the known-visible extent in its direction?
    ///
    /// Scans buckets within the tolerance of the point's bucket. With no
    /// evidence in that neighborhood the point always qualifies; otherwise
    /// it must be strictly farther out than the nearest (minimum) stored
    /// distance among those buckets.
    pub fn is_beyond(&self, point: GridPoint, focal: GridPoint) -> bool {
        if self.farthest_seen.is_empty() {
            return true;
        }

        let center = self.bucket_of(focal.angle_to(&point));
        let mut nearest: Option<f32> = None;
        for offset in -self.tolerance_buckets..=self.tolerance_buckets {
            let bucket = (center + offset).rem_euclid(self.buckets_per_turn);
            if let Some(&stored) = self.farthest_seen.get(&bucket) {
                nearest = Some(match nearest {
                    Some(d) => d.min(stored),
                    None => stored,
                });
            }
        }

        match nearest {
            Some(nearest) => focal.distance(&point) > nearest,
            None => true,
        }
    }

    /// Number of buckets holding evidence
    pub fn bucket_count(&self) -> usize {
        self.farthest_seen.len()
    }

    /// Farthest stored distance for the bucket containing `angle`, if any
    pub fn extent_at(&self, angle: f32) -> Option<f32> {
        self.farthest_seen.get(&self.bucket_of(angle)).copied()
    }

    /// Reset to empty (called at quadrant start)
    pub fn clear(&mut self) {
        self.farthest_seen.clear();
    }
}
