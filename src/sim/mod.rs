//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness (spawn parameters are sampled by the caller)
//! - Stable iteration order (by store index)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod explosion;
pub mod integrator;
pub mod simulation;
pub mod state;
pub mod tick;

pub use clock::SimClock;
pub use collision::{resolve_pair, resolve_pairs, resolve_walls};
pub use explosion::{explode, explosion_impulse};
pub use integrator::{advance_positions, apply_gravity, integrate};
pub use simulation::Simulation;
pub use state::{Arena, Body, BodyError, BodyStore, PhysicsParams};
pub use tick::{StepReport, step};
