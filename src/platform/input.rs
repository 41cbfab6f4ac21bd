//! Pointer input
//!
//! A press on an existing body explodes it. A press on empty space spawns a
//! randomized body and, while held, keeps spawning at the pointer after a
//! short delay. Release or cancel stops the repeat.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::repeat::{RepeatHandle, RepeatTimer};
use crate::mapper::{CoordinateMapper, SurfaceSize};
use crate::settings::{Settings, SpawnSettings};
use crate::sim::{Body, Simulation};

/// Seeded source of spawn parameters
#[derive(Debug, Clone)]
pub struct SpawnSampler {
    rng: Pcg32,
    ranges: SpawnSettings,
}

impl SpawnSampler {
    pub fn new(seed: u64, ranges: SpawnSettings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            ranges,
        }
    }

    /// Random radius and velocity for a new body
    pub fn sample(&mut self) -> (f32, Vec2) {
        let r = &self.ranges;
        let radius = self.rng.random_range(r.radius_min..=r.radius_max);
        let vel = Vec2::new(
            self.rng.random_range(r.vx_min..=r.vx_max),
            self.rng.random_range(r.vy_min..=r.vy_max),
        );
        (radius, vel)
    }
}

/// What a pointer press did
#[derive(Debug, Clone, PartialEq)]
pub enum PointerAction {
    /// A body under the pointer was exploded and removed
    Exploded(Body),
    /// A new body was appended at this store index
    Spawned(usize),
    /// The spawn was rejected (only possible with bad spawn settings)
    Rejected,
}

/// A press that is still down
#[derive(Debug, Clone, Copy)]
struct Hold {
    repeat: RepeatHandle,
    /// Logical position of the pointer
    point: Vec2,
}

/// Translates pointer events into simulation calls
#[derive(Debug, Clone)]
pub struct PointerController {
    mapper: CoordinateMapper,
    sampler: SpawnSampler,
    repeat: RepeatTimer,
    hold: Option<Hold>,
}

impl PointerController {
    pub fn new(settings: &Settings) -> Self {
        Self {
            mapper: CoordinateMapper::new(settings.arena_half_extent),
            sampler: SpawnSampler::new(settings.seed, settings.spawn),
            repeat: RepeatTimer::new(settings.spawn.hold_delay, settings.spawn.hold_interval),
            hold: None,
        }
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn is_holding(&self) -> bool {
        self.hold.is_some_and(|hold| self.repeat.active_handle() == Some(hold.repeat))
    }

    /// Pointer went down at surface position `px`
    pub fn press(
        &mut self,
        sim: &mut Simulation,
        surface: &impl SurfaceSize,
        px: Vec2,
    ) -> PointerAction {
        let point = self.mapper.from_surface(surface, px);

        if let Some(body) = sim.explode_at(point) {
            self.release();
            return PointerAction::Exploded(body);
        }

        match self.spawn_at(sim, point) {
            Some(index) => {
                let repeat = self.repeat.start();
                self.hold = Some(Hold { repeat, point });
                PointerAction::Spawned(index)
            }
            None => PointerAction::Rejected,
        }
    }

    /// Pointer moved; repeats follow it while held
    pub fn move_to(&mut self, surface: &impl SurfaceSize, px: Vec2) {
        if let Some(hold) = self.hold.as_mut() {
            hold.point = self.mapper.from_surface(surface, px);
        }
    }

    /// Pointer went up. Does nothing when no press is held.
    pub fn release(&mut self) {
        if let Some(hold) = self.hold.take() {
            self.repeat.cancel_handle(hold.repeat);
        }
    }

    /// Pointer left the surface or the gesture was interrupted
    pub fn cancel(&mut self) {
        self.release();
    }

    /// Advance the hold timer and spawn any repeats that came due.
    ///
    /// Returns the number of bodies spawned.
    pub fn update(&mut self, sim: &mut Simulation, elapsed: f32) -> usize {
        let Some(Hold { point, .. }) = self.hold else {
            return 0;
        };
        let fires = self.repeat.advance(elapsed);
        (0..fires)
            .filter_map(|_| self.spawn_at(sim, point))
            .count()
    }

    fn spawn_at(&mut self, sim: &mut Simulation, point: Vec2) -> Option<usize> {
        let (radius, vel) = self.sampler.sample();
        sim.spawn(point, radius, vel).ok()?;
        Some(sim.bodies.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Viewport;

    fn setup() -> (PointerController, Simulation, Viewport) {
        let settings = Settings::default();
        (
            PointerController::new(&settings),
            Simulation::new(&settings).unwrap(),
            Viewport::default(),
        )
    }

    #[test]
    fn test_sampler_respects_ranges() {
        let mut sampler = SpawnSampler::new(3, SpawnSettings::default());
        for _ in 0..500 {
            let (r, v) = sampler.sample();
            assert!((4.0..=15.0).contains(&r));
            assert!((-50.0..=50.0).contains(&v.x));
            assert!((-20.0..=40.0).contains(&v.y));
        }
    }

    #[test]
    fn test_sampler_is_seeded() {
        let mut a = SpawnSampler::new(99, SpawnSettings::default());
        let mut b = SpawnSampler::new(99, SpawnSettings::default());
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn test_press_on_empty_spawns_at_pointer() {
        let (mut input, mut sim, vp) = setup();
        let action = input.press(&mut sim, &vp, Vec2::new(400.0, 300.0));

        assert_eq!(action, PointerAction::Spawned(0));
        let body = sim.bodies.get(0).unwrap();
        assert!(body.pos.length() < 1e-4);
        assert!(input.is_holding());
    }

    #[test]
    fn test_press_on_body_explodes() {
        let (mut input, mut sim, vp) = setup();
        sim.spawn(Vec2::new(50.0, 50.0), 10.0, Vec2::ZERO).unwrap();
        sim.spawn(Vec2::new(60.0, 50.0), 5.0, Vec2::ZERO).unwrap();

        // (50, 50) logical -> (600, 150) surface
        let action = input.press(&mut sim, &vp, Vec2::new(600.0, 150.0));
        match action {
            PointerAction::Exploded(body) => assert_eq!(body.pos, Vec2::new(50.0, 50.0)),
            other => panic!("expected explosion, got {other:?}"),
        }
        assert_eq!(sim.bodies.len(), 1);
        assert!(sim.bodies.get(0).unwrap().vel.x > 0.0);
        assert!(!input.is_holding());
    }

    #[test]
    fn test_hold_repeats_until_release() {
        let (mut input, mut sim, vp) = setup();
        input.press(&mut sim, &vp, Vec2::new(200.0, 200.0));
        assert_eq!(sim.bodies.len(), 1);

        assert_eq!(input.update(&mut sim, 0.25), 0);
        assert_eq!(input.update(&mut sim, 0.2), 1);
        assert_eq!(input.update(&mut sim, 0.3), 3);
        assert_eq!(sim.bodies.len(), 5);

        input.release();
        assert_eq!(input.update(&mut sim, 1.0), 0);
        input.release();
        assert_eq!(sim.bodies.len(), 5);
    }

    #[test]
    fn test_repeats_follow_pointer() {
        let (mut input, mut sim, vp) = setup();
        input.press(&mut sim, &vp, Vec2::new(400.0, 300.0));
        input.move_to(&vp, Vec2::new(600.0, 150.0));
        input.update(&mut sim, 0.45);

        let last = sim.bodies.get(sim.bodies.len() - 1).unwrap();
        assert!((last.pos - Vec2::new(50.0, 50.0)).length() < 1e-3);
    }

    #[test]
    fn test_release_cancels_own_repeat_only() {
        let (mut input, mut sim, vp) = setup();
        input.press(&mut sim, &vp, Vec2::new(200.0, 200.0));
        let first = input.repeat.active_handle().unwrap();
        input.release();
        assert_eq!(input.repeat.active_handle(), None);

        input.press(&mut sim, &vp, Vec2::new(600.0, 400.0));
        let second = input.repeat.active_handle().unwrap();
        assert_ne!(first, second);
        // A stale token from the earlier press leaves this hold running
        assert!(!input.repeat.cancel_handle(first));
        assert!(input.is_holding());
        input.cancel();
        input.cancel();
        assert!(!input.is_holding());
        assert_eq!(input.update(&mut sim, 1.0), 0);
    }

    #[test]
    fn test_move_without_hold_is_ignored() {
        let (mut input, mut sim, vp) = setup();
        input.move_to(&vp, Vec2::new(10.0, 10.0));
        assert_eq!(input.update(&mut sim, 5.0), 0);
        assert!(sim.bodies.is_empty());
    }
}
