//! Test utilities for driving screening sessions.

#![allow(dead_code)]

use std::time::Duration;

use drishti_field::{GridPoint, ProbeStep, Quadrant, SessionMachine};

/// Full response window used by the default configuration.
pub const WINDOW: Duration = Duration::from_millis(5000);

/// Hard cap on probes per run; generously above anything the bounded
/// search can produce on a 20-cell grid.
pub const MAX_PROBES: usize = 5000;

/// Drive a started session to completion, answering each probe with
/// `responder(probe) -> seen`. Returns the probes in presentation order.
pub fn run_session<F>(machine: &mut SessionMachine, mut responder: F) -> Vec<GridPoint>
where
    F: FnMut(GridPoint) -> bool,
{
    let mut probes = vec![machine.probe_point()];

    for _ in 0..MAX_PROBES {
        let current = machine.probe_point();
        let step = if responder(current) {
            machine.acknowledge()
        } else {
            expire(machine)
        };
        match step {
            ProbeStep::Probe(next) => probes.push(next),
            ProbeStep::Complete => return probes,
            ProbeStep::None => panic!("event ignored while session was running"),
        }
    }
    panic!("session did not complete within {} probes", MAX_PROBES);
}

/// Start a quadrant and drive it to completion in one call.
pub fn run_quadrant<F>(machine: &mut SessionMachine, quadrant: Quadrant, responder: F) -> Vec<GridPoint>
where
    F: FnMut(GridPoint) -> bool,
{
    machine.start_quadrant(quadrant);
    run_session(machine, responder)
}

/// Let the current probe's response window elapse in 100 ms ticks, the way
/// a UI timer would.
pub fn expire(machine: &mut SessionMachine) -> ProbeStep {
    let tick = Duration::from_millis(100);
    let mut remaining = machine.time_remaining();
    loop {
        let step = machine.tick(tick);
        if !matches!(step, ProbeStep::None) {
            return step;
        }
        remaining = remaining.saturating_sub(tick);
        assert!(!remaining.is_zero(), "window elapsed without a timeout event");
    }
}

/// A responder that sees everything within `radius` of the focal point.
pub fn visible_within(focal: GridPoint, radius: f32) -> impl FnMut(GridPoint) -> bool {
    move |probe| focal.distance(&probe) <= radius
}
