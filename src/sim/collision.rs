//! Collision detection and response
//!
//! Two passes run every step: bodies are first pushed back inside the arena
//! walls, then every overlapping pair is separated and given an impulse.

use glam::Vec2;

use super::state::{Arena, Body};

/// Overlap between two disks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the first body toward the second
    pub normal: Vec2,
    /// Penetration depth (sum of radii minus center distance)
    pub penetration: f32,
}

/// Check overlap between two disks.
///
/// Coincident centers have no defined normal and report no contact.
pub fn circle_contact(a: &Body, b: &Body) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    let reach = a.radius() + b.radius();

    if dist >= reach || dist == 0.0 {
        return None;
    }

    Some(Contact {
        normal: delta / dist,
        penetration: reach - dist,
    })
}

/// Clamp a body inside the arena, reflecting velocity off each wall it crossed.
///
/// Floor, ceiling, left and right are tested independently, so a body in a
/// corner can hit two walls in one call. Damping is applied once if any fired.
/// Returns whether any wall was hit.
pub fn resolve_wall(body: &mut Body, arena: &Arena, damping: f32) -> bool {
    if arena.contains_body(body, 0.0) {
        return false;
    }
    let r = body.radius();
    let (lo, hi) = (arena.min(), arena.max());
    let mut hit = false;

    // Floor
    if body.pos.y - r < lo {
        body.pos.y = lo + r;
        body.vel.y = -body.vel.y;
        hit = true;
    }
    // Ceiling
    if body.pos.y + r > hi {
        body.pos.y = hi - r;
        body.vel.y = -body.vel.y;
        hit = true;
    }
    // Left
    if body.pos.x - r < lo {
        body.pos.x = lo + r;
        body.vel.x = -body.vel.x;
        hit = true;
    }
    // Right
    if body.pos.x + r > hi {
        body.pos.x = hi - r;
        body.vel.x = -body.vel.x;
        hit = true;
    }

    if hit {
        body.vel *= damping;
    }
    hit
}

/// Wall pass over every body. Returns the number of bodies that hit a wall.
pub fn resolve_walls(bodies: &mut [Body], arena: &Arena, damping: f32) -> usize {
    bodies
        .iter_mut()
        .map(|body| resolve_wall(body, arena, damping))
        .filter(|&hit| hit)
        .count()
}

/// Separate an overlapping pair and exchange an equal-mass impulse.
///
/// Each body moves half the penetration along the normal so the pair ends
/// exactly touching. The impulse acts only along the normal and only while
/// the bodies approach each other. Returns whether the pair overlapped.
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32) -> bool {
    let Some(contact) = circle_contact(a, b) else {
        return false;
    };
    let n = contact.normal;

    let correction = n * (contact.penetration * 0.5);
    a.pos -= correction;
    b.pos += correction;

    let approach = (b.vel - a.vel).dot(n);
    if approach < 0.0 {
        let impulse = -(1.0 + restitution) * approach / 2.0;
        a.vel -= n * impulse;
        b.vel += n * impulse;
    }
    true
}

/// Resolve every pair `(i, j)` with `i < j`, in ascending order.
///
/// Later pairs see positions already moved by earlier pairs in the same pass.
/// Returns the number of overlapping pairs found.
pub fn resolve_pairs(bodies: &mut [Body], restitution: f32) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b, restitution) {
                contacts += 1;
            }
        }
    }
    contacts
}
