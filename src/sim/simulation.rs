//! Simulation context
//!
//! Owns the body store and the clock so independent simulations can coexist
//! and tests can drive them with synthetic time.

use glam::Vec2;

use super::clock::SimClock;
use super::explosion::explode;
use super::state::{Arena, Body, BodyError, BodyStore, PhysicsParams};
use super::tick::{StepReport, step};
use crate::settings::{ConfigError, Settings};

/// Radius of the ball placed by [`Simulation::demo`]
pub const DEMO_BALL_RADIUS: f32 = 10.0;

/// A complete, self-contained sandbox
#[derive(Debug, Clone)]
pub struct Simulation {
    pub bodies: BodyStore,
    pub arena: Arena,
    pub params: PhysicsParams,
    clock: SimClock,
    /// Fixed steps run since creation
    steps: u64,
}

impl Simulation {
    /// Create an empty simulation
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        Self::with_bodies(settings, BodyStore::new())
    }

    /// Create a simulation from a scripted initial placement.
    ///
    /// Settings are validated first, so hand-built settings get the same
    /// checks as loaded ones.
    pub fn with_bodies(settings: &Settings, bodies: BodyStore) -> Result<Self, ConfigError> {
        settings.validate()?;
        let clock = SimClock::new(settings.physics.dt)?.with_max_substeps(settings.max_substeps);
        log::info!(
            "Simulation created: {} bodies, arena ±{}, dt {:.5}s",
            bodies.len(),
            settings.arena_half_extent,
            settings.physics.dt
        );
        Ok(Self {
            bodies,
            arena: Arena::new(settings.arena_half_extent),
            params: settings.physics,
            clock,
            steps: 0,
        })
    }

    /// The starting scene: one resting ball at the origin
    pub fn demo(settings: &Settings) -> Result<Self, ConfigError> {
        let bodies = Body::new(Vec2::ZERO, DEMO_BALL_RADIUS).into_iter().collect();
        Self::with_bodies(settings, bodies)
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Run exactly one fixed step
    pub fn step(&mut self) -> StepReport {
        run_step(&mut self.bodies, &self.arena, &self.params, &mut self.steps)
    }

    /// Feed `elapsed` seconds of wall time and run as many fixed steps as fit.
    ///
    /// The fractional remainder carries over to the next call. Returns the
    /// number of steps run.
    pub fn tick(&mut self, elapsed: f32) -> u32 {
        let Self {
            bodies,
            arena,
            params,
            clock,
            steps,
        } = self;
        clock.advance(elapsed, || {
            run_step(bodies, arena, params, steps);
        })
    }

    /// Add a body. Velocity defaults to zero via `Vec2::ZERO`.
    pub fn spawn(&mut self, pos: Vec2, radius: f32, vel: Vec2) -> Result<&Body, BodyError> {
        match self.bodies.spawn(pos, radius, vel) {
            Ok(body) => {
                log::debug!("Spawned body at ({:.1}, {:.1}) r={:.1}", pos.x, pos.y, radius);
                Ok(body)
            }
            Err(e) => {
                log::warn!("Spawn rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Explode the body at `index`: push its neighbours away, then remove it.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn explode(&mut self, index: usize) -> Body {
        let removed = explode(
            &mut self.bodies,
            index,
            self.params.explosion_radius,
            self.params.explosion_strength,
        );
        log::debug!(
            "Exploded body {} at ({:.1}, {:.1}), {} remain",
            index,
            removed.pos.x,
            removed.pos.y,
            self.bodies.len()
        );
        removed
    }

    /// Explode the top-most body under `point`, if any
    pub fn explode_at(&mut self, point: Vec2) -> Option<Body> {
        let index = self.bodies.find_at(point)?;
        Some(self.explode(index))
    }
}

/// One fixed step plus its bookkeeping, shared by `step` and `tick`
fn run_step(
    bodies: &mut BodyStore,
    arena: &Arena,
    params: &PhysicsParams,
    steps: &mut u64,
) -> StepReport {
    let report = step(bodies, arena, params);
    *steps += 1;
    log::trace!(
        "step {}: {} wall hits, {} contacts",
        steps,
        report.wall_hits,
        report.pair_contacts
    );
    report
}
