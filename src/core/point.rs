//! Grid point type and pure geometry helpers.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A quantized cell on the screening grid (integer cell indices).
///
/// All probe placement works on whole cells: candidate positions are
/// projected in polar coordinates around the focal point, then rounded to
/// the nearest cell before anything downstream sees them. Because the same
/// rounded cell is both the ledger key and the presented coordinate, the
/// two can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridPoint {
    /// Create a new grid point
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clip both axes independently into `[0, grid_size - 1]`.
    #[inline]
    pub fn clamp(&self, grid_size: usize) -> GridPoint {
        let max = grid_size as i32 - 1;
        GridPoint::new(self.x.clamp(0, max), self.y.clamp(0, max))
    }

    /// Is this point inside a `grid_size` x `grid_size` grid?
    #[inline]
    pub fn in_bounds(&self, grid_size: usize) -> bool {
        let max = grid_size as i32 - 1;
        self.x >= 0 && self.x <= max && self.y >= 0 && self.y <= max
    }

    /// Angle from this point to another (radians, CCW from +X, range `(-pi, pi]`)
    #[inline]
    pub fn angle_to(&self, other: &GridPoint) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        dy.atan2(dx)
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &GridPoint) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Project a point at a given angle and distance from this point,
    /// rounded to the nearest cell.
    #[inline]
    pub fn point_at(&self, angle: f32, distance: f32) -> GridPoint {
        GridPoint::new(
            (self.x as f32 + distance * angle.cos()).round() as i32,
            (self.y as f32 + distance * angle.sin()).round() as i32,
        )
    }
}

impl Add for GridPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridPoint::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_clamp_clips_both_axes() {
        assert_eq!(GridPoint::new(-3, 25).clamp(20), GridPoint::new(0, 19));
        assert_eq!(GridPoint::new(7, 7).clamp(20), GridPoint::new(7, 7));
    }

    #[test]
    fn test_distance() {
        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(3, 4);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_to() {
        let origin = GridPoint::new(0, 0);
        let east = GridPoint::new(1, 0);
        let north = GridPoint::new(0, 1);

        assert!((origin.angle_to(&east) - 0.0).abs() < 1e-6);
        assert!((origin.angle_to(&north) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_point_at_rounds_to_cell() {
        let focal = GridPoint::new(4, 4);
        let p = focal.point_at(0.0, 3.0);
        assert_eq!(p, GridPoint::new(7, 4));

        // 45 degrees at distance sqrt(2) lands one cell diagonally
        let d = std::f32::consts::FRAC_PI_4;
        let p = focal.point_at(d, std::f32::consts::SQRT_2);
        assert_eq!(p, GridPoint::new(5, 5));
    }

    #[test]
    fn test_point_at_round_trip() {
        let focal = GridPoint::new(10, 10);
        let p = focal.point_at(1.1, 6.0);
        // Quantization error stays under one cell diagonal
        assert!((focal.distance(&p) - 6.0).abs() < std::f32::consts::SQRT_2);
    }
}
