//! Quadrant constants and primary-region membership.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::core::GridPoint;

/// Reference grid side the built-in constants were tuned on. Focal and
/// initial-probe positions scale proportionally for other grid sizes.
const REFERENCE_GRID: f32 = 20.0;

/// One of the four quadrant tests.
///
/// Each test fixes the focal marker in one quadrant and samples the
/// diagonally opposite quadrant, so the probe sweeps the far periphery of
/// the user's fixation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Focal top-left, sampling bottom-right
    Q1,
    /// Focal top-right, sampling bottom-left
    Q2,
    /// Focal bottom-right, sampling top-left
    Q3,
    /// Focal bottom-left, sampling top-right
    Q4,
}

impl Quadrant {
    /// All quadrants in test order
    pub const ALL: [Quadrant; 4] = [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];

    /// Build from a 1-based operator index; `None` outside 1..=4
    pub fn from_index(index: u8) -> Option<Quadrant> {
        match index {
            1 => Some(Quadrant::Q1),
            2 => Some(Quadrant::Q2),
            3 => Some(Quadrant::Q3),
            4 => Some(Quadrant::Q4),
            _ => None,
        }
    }

    /// 1-based index of this quadrant
    pub fn index(self) -> u8 {
        match self {
            Quadrant::Q1 => 1,
            Quadrant::Q2 => 2,
            Quadrant::Q3 => 3,
            Quadrant::Q4 => 4,
        }
    }

    /// Base direction of the angle sweep, one cardinal direction per
    /// quadrant: `(index - 1) * pi/2`
    pub fn base_angle(self) -> f32 {
        (self.index() - 1) as f32 * FRAC_PI_2
    }

    /// Focal marker position for this test, scaled to `grid_size`
    pub fn focal_point(self, grid_size: usize) -> GridPoint {
        let (x, y) = match self {
            Quadrant::Q1 => (4, 4),
            Quadrant::Q2 => (15, 5),
            Quadrant::Q3 => (15, 15),
            Quadrant::Q4 => (5, 15),
        };
        scaled(x, y, grid_size)
    }

    /// Initial probe position for this test, scaled to `grid_size`
    pub fn initial_probe(self, grid_size: usize) -> GridPoint {
        let (x, y) = match self {
            Quadrant::Q1 => (15, 15),
            Quadrant::Q2 => (5, 15),
            Quadrant::Q3 => (5, 5),
            Quadrant::Q4 => (15, 5),
        };
        scaled(x, y, grid_size)
    }

    /// Is `point` inside this test's primary sampling region?
    ///
    /// The region is the quadrant diagonally opposite the focal point,
    /// widened by `margin` cells past the grid midlines.
    pub fn contains(self, point: GridPoint, grid_size: usize, margin: i32) -> bool {
        let mid = (grid_size / 2) as i32;
        match self {
            Quadrant::Q1 => point.x >= mid - margin && point.y >= mid - margin,
            Quadrant::Q2 => point.x <= mid + margin && point.y >= mid - margin,
            Quadrant::Q3 => point.x <= mid + margin && point.y <= mid + margin,
            Quadrant::Q4 => point.x >= mid - margin && point.y <= mid + margin,
        }
    }

    /// Quadrant name for logging
    pub fn name(self) -> &'static str {
        match self {
            Quadrant::Q1 => "Q1",
            Quadrant::Q2 => "Q2",
            Quadrant::Q3 => "Q3",
            Quadrant::Q4 => "Q4",
        }
    }
}

fn scaled(x: i32, y: i32, grid_size: usize) -> GridPoint {
    let s = grid_size as f32 / REFERENCE_GRID;
    GridPoint::new(
        (x as f32 * s).round() as i32,
        (y as f32 * s).round() as i32,
    )
    .clamp(grid_size)
}
