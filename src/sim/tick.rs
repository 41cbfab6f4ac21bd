//! Fixed timestep physics step
//!
//! One step runs integration, then the wall pass, then the pair pass.

use super::collision::{resolve_pairs, resolve_walls};
use super::integrator::integrate;
use super::state::{Arena, BodyStore, PhysicsParams};

/// Per-step collision counts, mainly for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub wall_hits: usize,
    pub pair_contacts: usize,
}

/// Advance every body by one fixed step of `params.dt`
pub fn step(store: &mut BodyStore, arena: &Arena, params: &PhysicsParams) -> StepReport {
    let bodies = store.as_mut_slice();
    integrate(bodies, params.gravity, params.dt);
    let wall_hits = resolve_walls(bodies, arena, params.wall_damping);
    let pair_contacts = resolve_pairs(bodies, params.restitution);
    StepReport {
        wall_hits,
        pair_contacts,
    }
}
