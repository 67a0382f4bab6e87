//! Headless run command

use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Instant;
use swarm_core::SimConfig;
use swarm_particles::ParticleSystem;
use swarm_runtime::{InputFrame, RuntimeSystem};

pub struct RunArgs {
    pub config: Option<String>,
    pub ticks: u64,
    pub seed: Option<u64>,
    pub particles: Option<u32>,
    pub boost_at: Vec<u64>,
    pub add_at: Vec<u64>,
    pub bulk_at: Vec<(u64, u32)>,
    pub format: String,
}

/// End-of-run numbers printed by `swarm run`
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub particles: usize,
    pub pending: usize,
    pub kinetic_energy: f64,
    pub contacts: usize,
    pub degenerate_contacts: usize,
    pub peak_contacts: usize,
    pub elapsed_ms: f64,
}

pub fn run(args: RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            SimConfig::load(path).with_context(|| format!("failed to load config '{}'", path))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(count) = args.particles {
        config.initial_particles = count;
    }

    let summary = simulate(config, args.ticks, &args.boost_at, &args.add_at, &args.bulk_at)?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Ran {} tick(s) in {:.1} ms", summary.ticks, summary.elapsed_ms);
        println!("  Particles:      {} ({} pending)", summary.particles, summary.pending);
        println!("  Kinetic energy: {:.3}", summary.kinetic_energy);
        println!(
            "  Contacts:       {} total, {} peak per tick, {} coincident",
            summary.contacts, summary.peak_contacts, summary.degenerate_contacts
        );
    }
    Ok(())
}

/// Drive a particle system through `ticks` frames, pressing buttons on the listed ticks
///
/// `bulk_at` pairs are `(tick, count)` preset requests; several on one tick are summed.
pub fn simulate(
    config: SimConfig,
    ticks: u64,
    boost_at: &[u64],
    add_at: &[u64],
    bulk_at: &[(u64, u32)],
) -> Result<RunSummary> {
    let mut system = ParticleSystem::new(config)?;
    system.initialize()?;

    let start = Instant::now();
    let mut contacts = 0usize;
    let mut degenerate_contacts = 0usize;
    let mut peak_contacts = 0usize;

    for tick in 1..=ticks {
        let mut frame = InputFrame::idle();
        if boost_at.contains(&tick) {
            frame = frame.with_boost();
        }
        if add_at.contains(&tick) {
            frame = frame.with_add();
        }
        let bulk = bulk_at
            .iter()
            .filter(|(at, _)| *at == tick)
            .fold(0u32, |sum, (_, count)| sum.saturating_add(*count));
        if bulk > 0 {
            frame = frame.with_bulk(bulk);
        }

        system.update(&frame)?;

        let report = system.last_report();
        contacts += report.contacts;
        degenerate_contacts += report.degenerate_contacts;
        peak_contacts = peak_contacts.max(report.contacts);
        if tick % 100 == 0 {
            log::debug!(
                "tick {}: {} particle(s), {} contact(s)",
                tick,
                system.sim.particle_count(),
                report.contacts
            );
        }
    }

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    system.shutdown()?;

    Ok(RunSummary {
        ticks: system.sim.tick_count(),
        particles: system.sim.particle_count(),
        pending: system.sim.pending_spawns(),
        kinetic_energy: system.sim.kinetic_energy(),
        contacts,
        degenerate_contacts,
        peak_contacts,
        elapsed_ms,
    })
}
