//! Simulated screening run against a synthetic visual field.
//!
//! Plays all four quadrant tests with a scripted responder: probes are
//! "seen" when they fall inside the simulated field of view and outside a
//! circular scotoma (blind region), with optional response noise.
//!
//! Usage:
//!   cargo run --example simulated_run
//!   cargo run --example simulated_run -- --scotoma-x 12 --scotoma-y 12 --scotoma-radius 3
//!   RUST_LOG=debug cargo run --example simulated_run -- --miss-rate 0.1

use std::time::Duration;

use clap::Parser;
use rand::prelude::*;

use drishti_field::{FieldConfig, GridPoint, ProbeStep, Quadrant, SessionMachine};

/// Simulated visual-field screening
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: String,

    /// Visible radius around the focal point (cells)
    #[arg(long, default_value_t = 14.0)]
    field_radius: f32,

    /// Scotoma center X (cells)
    #[arg(long, default_value_t = 13)]
    scotoma_x: i32,

    /// Scotoma center Y (cells)
    #[arg(long, default_value_t = 13)]
    scotoma_y: i32,

    /// Scotoma radius (cells); 0 disables it
    #[arg(long, default_value_t = 2.5)]
    scotoma_radius: f32,

    /// Probability of missing a visible probe (response noise)
    #[arg(long, default_value_t = 0.0)]
    miss_rate: f64,

    /// RNG seed for response noise
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

/// Synthetic field model: sees everything within `field_radius` of the
/// focal point except a circular scotoma.
struct SimulatedField {
    field_radius: f32,
    scotoma: GridPoint,
    scotoma_radius: f32,
    miss_rate: f64,
    rng: StdRng,
}

impl SimulatedField {
    fn perceives(&mut self, probe: GridPoint, focal: GridPoint) -> bool {
        if focal.distance(&probe) > self.field_radius {
            return false;
        }
        if self.scotoma_radius > 0.0 && self.scotoma.distance(&probe) <= self.scotoma_radius {
            return false;
        }
        if self.miss_rate > 0.0 && self.rng.gen_bool(self.miss_rate) {
            return false;
        }
        true
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match FieldConfig::load(std::path::Path::new(&args.config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Using default config ({})", e);
            FieldConfig::default()
        }
    };
    let window = config.session.response_window();

    let mut field = SimulatedField {
        field_radius: args.field_radius,
        scotoma: GridPoint::new(args.scotoma_x, args.scotoma_y),
        scotoma_radius: args.scotoma_radius,
        miss_rate: args.miss_rate,
        rng: StdRng::seed_from_u64(args.seed),
    };

    let mut machine = SessionMachine::new(config);

    for quadrant in Quadrant::ALL {
        machine.start_quadrant(quadrant);
        run_to_completion(&mut machine, &mut field, window);

        let summary = machine.summary();
        println!(
            "{}: {} points tested, {} visible, {} blind spots",
            quadrant.name(),
            summary.total,
            summary.seen,
            summary.unseen
        );
        for sample in machine.log().iter().filter(|s| !s.seen) {
            println!("    blind at ({:2}, {:2})", sample.point.x, sample.point.y);
        }
    }
}

fn run_to_completion(machine: &mut SessionMachine, field: &mut SimulatedField, window: Duration) {
    let focal = machine.focal_point();
    loop {
        let probe = machine.probe_point();
        let step = if field.perceives(probe, focal) {
            machine.acknowledge()
        } else {
            machine.tick(window)
        };
        match step {
            ProbeStep::Probe(_) => {}
            ProbeStep::Complete => return,
            ProbeStep::None => unreachable!("session stalled"),
        }
    }
}
