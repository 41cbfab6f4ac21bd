//! Simulation state: bodies, their store, the arena and physics parameters

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected body construction
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    #[error("body radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}

/// A circular point-mass body (unit mass, no rotation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyRecord")]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
}

impl Body {
    /// Create a resting body. Fails unless `radius` is positive and finite.
    pub fn new(pos: Vec2, radius: f32) -> Result<Self, BodyError> {
        Self::with_velocity(pos, radius, Vec2::ZERO)
    }

    pub fn with_velocity(pos: Vec2, radius: f32, vel: Vec2) -> Result<Self, BodyError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BodyError::InvalidRadius(radius));
        }
        Ok(Self { pos, vel, radius })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether `point` lies on or inside the disk
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        crate::kinetic_energy(self.vel.length_squared())
    }
}

/// Unvalidated wire form of a body
#[derive(Deserialize)]
struct BodyRecord {
    pos: Vec2,
    #[serde(default)]
    vel: Vec2,
    radius: f32,
}

impl TryFrom<BodyRecord> for Body {
    type Error = BodyError;

    fn try_from(rec: BodyRecord) -> Result<Self, Self::Error> {
        Body::with_velocity(rec.pos, rec.radius, rec.vel)
    }
}

/// Ordered, index-addressable collection of bodies.
///
/// Insertion order is preserved; removal shifts later bodies down by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Append a new body and return it
    pub fn spawn(&mut self, pos: Vec2, radius: f32, vel: Vec2) -> Result<&Body, BodyError> {
        let body = Body::with_velocity(pos, radius, vel)?;
        Ok(self.push(body))
    }

    /// Append an already-validated body
    pub fn push(&mut self, body: Body) -> &Body {
        self.bodies.push(body);
        &self.bodies[self.bodies.len() - 1]
    }

    /// Remove the body at `index`, shifting later bodies down.
    ///
    /// # Panics
    /// If `index` is out of range. Callers only pass indices from a prior lookup.
    pub fn remove_at(&mut self, index: usize) -> Body {
        self.bodies.remove(index)
    }

    /// Index of the top-most (most recently added) body containing `point`
    pub fn find_at(&self, point: Vec2) -> Option<usize> {
        self.bodies.iter().rposition(|b| b.contains(point))
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Total kinetic energy (unit masses)
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

impl FromIterator<Body> for BodyStore {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

/// Square arena spanning [-half_extent, half_extent] on both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub half_extent: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            half_extent: ARENA_HALF_EXTENT,
        }
    }
}

impl Arena {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    #[inline]
    pub fn min(&self) -> f32 {
        -self.half_extent
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.half_extent
    }

    /// Whether the whole disk lies inside the arena (within `eps`)
    pub fn contains_body(&self, body: &Body, eps: f32) -> bool {
        let r = body.radius();
        body.pos.x - r >= self.min() - eps
            && body.pos.x + r <= self.max() + eps
            && body.pos.y - r >= self.min() - eps
            && body.pos.y + r <= self.max() + eps
    }
}

/// Tunable physics constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Fixed step duration (seconds)
    pub dt: f32,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Velocity multiplier after wall contact
    pub wall_damping: f32,
    /// Body-body restitution coefficient
    pub restitution: f32,
    pub explosion_radius: f32,
    pub explosion_strength: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            dt: SIM_DT,
            gravity: GRAVITY,
            wall_damping: WALL_DAMPING,
            restitution: RESTITUTION,
            explosion_radius: EXPLOSION_RADIUS,
            explosion_strength: EXPLOSION_STRENGTH,
        }
    }
}
