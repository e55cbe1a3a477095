//! Default value functions for serde deserialization.

pub fn grid_size() -> usize {
    20
}

pub fn quadrant_margin() -> i32 {
    2
}

pub fn response_window_ms() -> u64 {
    5000
}

pub fn max_radius() -> f32 {
    12.0
}

pub fn min_radius() -> f32 {
    2.0
}

pub fn radius_step() -> f32 {
    2.0
}

pub fn sweep_advance() -> f32 {
    0.2
}

pub fn fine_step() -> f32 {
    0.01
}

pub fn scan_iterations() -> usize {
    360
}

pub fn boundary_bucket_width() -> f32 {
    0.05
}

pub fn boundary_tolerance() -> f32 {
    0.15
}
