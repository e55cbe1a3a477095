//! Grid configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Grid settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Grid size in cells per side (coordinates run 0..size-1)
    #[serde(default = "defaults::grid_size")]
    pub size: usize,

    /// Margin (cells) added around the primary test quadrant when checking
    /// candidate membership, so sampling can spill slightly past the
    /// midlines
    #[serde(default = "defaults::quadrant_margin")]
    pub quadrant_margin: i32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            size: 20,
            quadrant_margin: 2,
        }
    }
}

impl GridSection {
    /// Grid midline coordinate used for quadrant membership checks
    #[inline]
    pub fn midline(&self) -> i32 {
        (self.size / 2) as i32
    }
}
