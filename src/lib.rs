//! Ball Pit - a 2D sandbox of bouncing disks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, explosions, clock)
//! - `mapper`: Logical <-> surface coordinate transform
//! - `renderer`: Drawing-surface abstraction and a text backend
//! - `platform`: Pointer input, hold-to-repeat spawning, frame timing
//! - `settings`: Data-driven tuning loaded from JSON

pub mod mapper;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use mapper::{CoordinateMapper, SurfaceSize, Viewport};
pub use settings::{ConfigError, Settings, SpawnSettings};
pub use sim::{Arena, Body, BodyError, BodyStore, PhysicsParams, Simulation};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Half-width of the square arena; logical space spans [-R, R] on both axes
    pub const ARENA_HALF_EXTENT: f32 = 100.0;

    /// Downward gravity (units/s²)
    pub const GRAVITY: f32 = 360.0;
    /// Velocity multiplier applied after any wall contact
    pub const WALL_DAMPING: f32 = 0.9;
    /// Restitution for body-body impacts
    pub const RESTITUTION: f32 = 0.9;

    /// Bodies closer than this to an exploding body are pushed away
    pub const EXPLOSION_RADIUS: f32 = 50.0;
    /// Speed added at zero distance from the explosion (units/s)
    pub const EXPLOSION_STRENGTH: f32 = 200.0;

    /// Spawn radius range
    pub const SPAWN_RADIUS_MIN: f32 = 4.0;
    pub const SPAWN_RADIUS_MAX: f32 = 15.0;
    /// Spawn velocity ranges
    pub const SPAWN_VX_MIN: f32 = -50.0;
    pub const SPAWN_VX_MAX: f32 = 50.0;
    pub const SPAWN_VY_MIN: f32 = -20.0;
    pub const SPAWN_VY_MAX: f32 = 40.0;

    /// Delay before a held pointer starts repeating spawns (seconds)
    pub const HOLD_REPEAT_DELAY: f32 = 0.3;
    /// Interval between repeated spawns while held (10 per second)
    pub const HOLD_REPEAT_INTERVAL: f32 = 0.1;

    /// Default drawing surface (4:3)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;
}

/// Kinetic energy of a unit-mass body moving at `speed_sq` squared speed
#[inline]
pub fn kinetic_energy(speed_sq: f32) -> f32 {
    0.5 * speed_sq
}
