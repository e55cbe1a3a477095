//! The adaptive sampling engine.
//!
//! One [`SessionMachine`] runs one quadrant test at a time. After every
//! response or timeout it updates the [`LocationLedger`] and
//! [`VisibilityBoundary`] for the just-tested point, then asks the
//! selection strategy for the next probe; when the strategy finds nothing,
//! the quadrant is exhausted and the run completes.

mod boundary;
mod ledger;
mod machine;
mod quadrant;
mod strategy;

pub use boundary::VisibilityBoundary;
pub use ledger::LocationLedger;
pub use machine::{CompletionOutcome, ProbeStep, SessionMachine, SessionStatus};
pub use quadrant::Quadrant;
pub use strategy::{select_next_probe, SweepCursor};
