//! Semi-implicit Euler integration under uniform gravity
//!
//! Gravity is applied to every body before any body moves, so the collision
//! passes that follow always see this step's velocities.

use super::state::Body;

/// Accelerate every body downward by `gravity * dt`
pub fn apply_gravity(bodies: &mut [Body], gravity: f32, dt: f32) {
    let dv = gravity * dt;
    for body in bodies.iter_mut() {
        body.vel.y -= dv;
    }
}

/// Move every body by `vel * dt`
pub fn advance_positions(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.pos += body.vel * dt;
    }
}

/// Full integration step: gravity pass, then position pass
pub fn integrate(bodies: &mut [Body], gravity: f32, dt: f32) {
    apply_gravity(bodies, gravity, dt);
    advance_positions(bodies, dt);
}
