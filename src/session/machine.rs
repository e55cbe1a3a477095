//! Session state machine: owns all per-run state and orchestrates
//! responses.

use std::time::Duration;

use log::{debug, info};

use crate::config::FieldConfig;
use crate::core::{GridPoint, Sample, SampleLog, SessionSummary};

use super::boundary::VisibilityBoundary;
use super::ledger::LocationLedger;
use super::quadrant::Quadrant;
use super::strategy::{select_next_probe, SweepCursor};

/// Session state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// No quadrant test active
    Idle,

    /// Awaiting a response to the current probe
    Running,

    /// Quadrant test ended
    Completed {
        /// How the test ended
        outcome: CompletionOutcome,
    },
}

impl SessionStatus {
    /// Is a quadrant test in progress?
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Running)
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "Idle",
            SessionStatus::Running => "Running",
            SessionStatus::Completed { .. } => "Completed",
        }
    }
}

/// How a quadrant test ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The selection strategy found no further valid candidate
    Exhausted,

    /// The operator stopped the test
    Stopped,
}

/// Result of feeding one event into the machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeStep {
    /// Nothing happened (not running, or the deadline has not elapsed)
    None,

    /// A new probe was armed at this coordinate
    Probe(GridPoint),

    /// The quadrant test is exhausted
    Complete,
}

/// The adaptive sampling engine for one quadrant test at a time.
///
/// Exclusively owns the ledger, boundary model, sample log, and sweep
/// cursors; the presentation layer drives it with `start_quadrant`,
/// `acknowledge`, and `tick`, and reads the focal/probe points and log
/// back for rendering. Single-threaded and passive: time only advances
/// when the caller reports it.
#[derive(Clone, Debug)]
pub struct SessionMachine {
    config: FieldConfig,
    status: SessionStatus,
    quadrant: Option<Quadrant>,
    focal: GridPoint,
    probe: GridPoint,
    cursor: SweepCursor,
    time_remaining: Duration,
    ledger: LocationLedger,
    boundary: VisibilityBoundary,
    log: SampleLog,
}

impl SessionMachine {
    /// Create an idle machine with the given configuration
    pub fn new(config: FieldConfig) -> Self {
        let boundary = VisibilityBoundary::new(
            config.sampling.boundary_bucket_width,
            config.sampling.boundary_tolerance,
        );
        let cursor = SweepCursor::new(config.sampling.max_radius);
        Self {
            config,
            status: SessionStatus::Idle,
            quadrant: None,
            focal: GridPoint::default(),
            probe: GridPoint::default(),
            cursor,
            time_remaining: Duration::ZERO,
            ledger: LocationLedger::new(),
            boundary,
            log: SampleLog::new(),
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(FieldConfig::default())
    }

    /// Start (or restart) a quadrant test.
    ///
    /// Unconditionally discards all in-flight state: ledger, boundary
    /// model, and sample log are cleared, the sweep cursor returns to the
    /// maximum radius, and the response deadline is re-armed. Returns the
    /// initial probe coordinate.
    pub fn start_quadrant(&mut self, quadrant: Quadrant) -> GridPoint {
        let grid_size = self.config.grid.size;
        self.ledger.clear();
        self.boundary.clear();
        self.log.clear();
        self.cursor = SweepCursor::new(self.config.sampling.max_radius);
        self.focal = quadrant.focal_point(grid_size).clamp(grid_size);
        self.probe = quadrant.initial_probe(grid_size).clamp(grid_size);
        self.quadrant = Some(quadrant);
        self.time_remaining = self.config.session.response_window();
        self.status = SessionStatus::Running;

        info!(
            "[Session] {} started: focal ({}, {}), initial probe ({}, {})",
            quadrant.name(),
            self.focal.x,
            self.focal.y,
            self.probe.x,
            self.probe.y
        );
        self.probe
    }

    /// User acknowledged the current probe before the deadline.
    ///
    /// Records the probe as seen, extends the visibility boundary, and
    /// arms the next probe (or completes the quadrant). Ignored unless
    /// running.
    pub fn acknowledge(&mut self) -> ProbeStep {
        if !self.status.is_active() {
            return ProbeStep::None;
        }
        self.record_response(true)
    }

    /// Advance session time.
    ///
    /// The external scheduler reports elapsed time here; when the response
    /// window runs out the current probe is recorded as unseen and the
    /// next probe is armed. Returns `ProbeStep::None` while the window is
    /// still open.
    pub fn tick(&mut self, elapsed: Duration) -> ProbeStep {
        if !self.status.is_active() {
            return ProbeStep::None;
        }
        self.time_remaining = self.time_remaining.saturating_sub(elapsed);
        if !self.time_remaining.is_zero() {
            return ProbeStep::None;
        }
        debug!(
            "[Session] deadline elapsed at probe ({}, {})",
            self.probe.x, self.probe.y
        );
        self.record_response(false)
    }

    /// Operator stop, distinct from exhaustion
    pub fn stop(&mut self) {
        if self.status.is_active() {
            info!("[Session] stopped by operator");
            self.status = SessionStatus::Completed {
                outcome: CompletionOutcome::Stopped,
            };
        }
    }

    /// Record the outcome for the current probe and select the next one.
    ///
    /// Exactly one response (acknowledgment or timeout) is recorded per
    /// probe: arming the next probe resets the deadline, and both entry
    /// points check `Running` first.
    fn record_response(&mut self, seen: bool) -> ProbeStep {
        let quadrant = match self.quadrant {
            Some(q) => q,
            None => return ProbeStep::None,
        };

        self.log.record(Sample::new(self.probe, seen));
        self.ledger.mark_tested(self.probe);
        if seen {
            self.boundary.record_seen(self.probe, self.focal);
        }

        match select_next_probe(
            &self.config.sampling,
            &self.config.grid,
            quadrant,
            self.focal,
            &self.ledger,
            &self.boundary,
            &mut self.cursor,
        ) {
            Some(next) => {
                self.probe = next;
                self.time_remaining = self.config.session.response_window();
                ProbeStep::Probe(next)
            }
            None => {
                let summary = self.log.summary();
                info!(
                    "[Session] {} exhausted: {} tested, {} seen, {} unseen",
                    quadrant.name(),
                    summary.total,
                    summary.seen,
                    summary.unseen
                );
                self.status = SessionStatus::Completed {
                    outcome: CompletionOutcome::Exhausted,
                };
                ProbeStep::Complete
            }
        }
    }

    // Accessors for the presentation layer

    /// Current session state
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Is a quadrant test in progress?
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Quadrant of the current (or last) test
    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// Focal marker position
    pub fn focal_point(&self) -> GridPoint {
        self.focal
    }

    /// Current probe position
    pub fn probe_point(&self) -> GridPoint {
        self.probe
    }

    /// Time left in the current response window
    pub fn time_remaining(&self) -> Duration {
        self.time_remaining
    }

    /// Ordered log of tested points
    pub fn log(&self) -> &SampleLog {
        &self.log
    }

    /// Seen/unseen counts for the results display
    pub fn summary(&self) -> SessionSummary {
        self.log.summary()
    }

    /// Engine configuration
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
