//! Core types for the screening engine.
//!
//! - [`GridPoint`]: quantized cell indices with the polar-projection,
//!   clamping, and angle/distance helpers the sampling engine is built on
//! - [`Sample`] / [`SampleLog`]: recorded probe outcomes in test order
//! - [`SessionSummary`]: seen/unseen counts for the results display
//!
//! Grid convention: cell (0, 0) is the top-left corner of the rendered
//! grid, X grows rightward, Y grows downward, angles are measured CCW from
//! +X via `atan2`.

mod point;
mod sample;

pub use point::GridPoint;
pub use sample::{Sample, SampleLog, SessionSummary};
