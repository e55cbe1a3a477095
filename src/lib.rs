//! # DrishtiField
//!
//! Adaptive sampling engine for a self-administered visual-field
//! (perimetry) screening test.
//!
//! ## Overview
//!
//! A screening run presents a fixed focal marker and a blinking probe
//! marker on a 2-D grid and records whether the user perceives each probe
//! before a response deadline. This crate is the engine behind that: given
//! each response or timeout it decides where to place the next probe,
//! avoids re-testing locations, infers the visible boundary around the
//! focal point to steer sampling outward, and signals when a quadrant is
//! exhausted.
//!
//! Rendering, input plumbing, and timers are the caller's concern; the
//! engine is a passive, single-threaded state machine driven entirely
//! through [`SessionMachine`].
//!
//! ## Quick Start
//!
//! ```rust
//! use drishti_field::{ProbeStep, Quadrant, SessionMachine};
//! use std::time::Duration;
//!
//! let mut session = SessionMachine::with_defaults();
//! let first_probe = session.start_quadrant(Quadrant::Q1);
//!
//! // The user pressed the acknowledge key in time:
//! match session.acknowledge() {
//!     ProbeStep::Probe(next) => println!("next probe at ({}, {})", next.x, next.y),
//!     ProbeStep::Complete => println!("quadrant exhausted"),
//!     ProbeStep::None => unreachable!("session is running"),
//! }
//!
//! // No response: the scheduler keeps reporting elapsed time until the
//! // 5-second window runs out, which records the probe as unseen.
//! let _ = session.tick(Duration::from_millis(100));
//!
//! let summary = session.summary();
//! println!("{} tested, {} blind spots", summary.total, summary.unseen);
//! # let _ = first_probe;
//! ```
//!
//! ## Coordinate System
//!
//! Grid cells are integer coordinates in `[0, grid_size - 1]` on both
//! axes, (0, 0) top-left, X rightward, Y downward. Angles are radians CCW
//! from +X as produced by `atan2`.

#![warn(missing_docs)]

// Core types
pub mod core;

// Unified configuration
pub mod config;

// Session engine: ledger, boundary model, selection, state machine
pub mod session;

// Error types
pub mod error;

// Re-export commonly used types
pub use self::core::{GridPoint, Sample, SampleLog, SessionSummary};

pub use config::{ConfigLoadError, FieldConfig, GridSection, SamplingSection, SessionSection};

pub use session::{
    select_next_probe, CompletionOutcome, LocationLedger, ProbeStep, Quadrant, SessionMachine,
    SessionStatus, SweepCursor, VisibilityBoundary,
};

pub use error::{DrishtiError, Result};
