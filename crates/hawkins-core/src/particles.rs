//! Rising ember particles.
//!
//! An initial staggered batch is spawned at startup, then one particle per
//! spawn interval for the page's lifetime. Every particle is removed once its
//! animation (plus start offset and a small buffer) has elapsed, so the number
//! of live particles stays bounded.

use crate::config::ParticleConfig;
use crate::constants::{
    PARTICLE_MAX_SIZE_PX, PARTICLE_MIN_SIZE_PX, PARTICLE_REMOVAL_BUFFER_MS, PARTICLE_STAGGER_MS,
};
use crate::timer::Timer;
use crate::SharedRng;
use rand::Rng;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position, percent of the container width.
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_ms: u32,
}

impl ParticleSpec {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig, delay_ms: u32) -> Self {
        let span = config.max_duration_s - config.min_duration_s;
        Self {
            left_pct: rng.gen::<f64>() * 100.0,
            size_px: PARTICLE_MIN_SIZE_PX
                + rng.gen::<f64>() * (PARTICLE_MAX_SIZE_PX - PARTICLE_MIN_SIZE_PX),
            duration_s: config.min_duration_s + rng.gen::<f64>() * span,
            delay_ms,
        }
    }

    /// Time from spawn until the element should be removed.
    pub fn lifetime_ms(&self) -> u32 {
        ((self.duration_s * 1000.0).ceil() as u32)
            .saturating_add(self.delay_ms)
            .saturating_add(PARTICLE_REMOVAL_BUFFER_MS)
    }
}

/// Upper bound on simultaneously live particles for a configuration.
pub fn max_live_particles(config: &ParticleConfig, spawn_rate_ms: u32) -> usize {
    let longest_ms =
        ((config.max_duration_s * 1000.0).ceil() as u32).saturating_add(PARTICLE_REMOVAL_BUFFER_MS);
    config.count as usize + longest_ms.div_ceil(spawn_rate_ms.max(1)) as usize + 1
}

/// Where particles are drawn.
pub trait ParticleLayer {
    type Particle: 'static;

    /// Create the visual for `spec`; `None` if it could not be created.
    fn spawn(&self, spec: &ParticleSpec) -> Option<Self::Particle>;
    fn remove(&self, particle: Self::Particle);
}

pub struct ParticleEmitter<L> {
    layer: Rc<L>,
    timer: Rc<dyn Timer>,
    rng: SharedRng,
    config: ParticleConfig,
    spawn_rate_ms: u32,
}

impl<L: ParticleLayer + 'static> ParticleEmitter<L> {
    pub fn new(
        layer: Rc<L>,
        timer: Rc<dyn Timer>,
        rng: SharedRng,
        config: ParticleConfig,
        spawn_rate_ms: u32,
    ) -> Rc<Self> {
        Rc::new(Self {
            layer,
            timer,
            rng,
            config,
            spawn_rate_ms,
        })
    }

    /// Spawn the initial batch and start the repeating spawner.
    pub fn start(self: &Rc<Self>) {
        for i in 0..self.config.count {
            self.emit(i.saturating_mul(PARTICLE_STAGGER_MS));
        }
        let emitter = Rc::clone(self);
        self.timer
            .every(self.spawn_rate_ms, Box::new(move || emitter.emit(0)));
        log::info!(
            "[particles] {} initial, one every {}ms",
            self.config.count,
            self.spawn_rate_ms
        );
    }

    pub fn emit(&self, delay_ms: u32) {
        let spec = ParticleSpec::roll(&mut *self.rng.borrow_mut(), &self.config, delay_ms);
        let Some(particle) = self.layer.spawn(&spec) else {
            return;
        };
        let layer = Rc::clone(&self.layer);
        self.timer
            .defer(spec.lifetime_ms(), Box::new(move || layer.remove(particle)));
    }
}
