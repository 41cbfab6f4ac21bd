//! Explosion interaction: radial push with linear falloff, then removal

use glam::Vec2;

use super::state::{Body, BodyStore};

/// Velocity change for a body at `offset` from an explosion center.
///
/// Falls off linearly from `strength` at the center to zero at `radius`.
/// Bodies at the center or outside the radius get nothing.
pub fn explosion_impulse(offset: Vec2, radius: f32, strength: f32) -> Vec2 {
    let dist = offset.length();
    if dist >= radius || dist == 0.0 {
        return Vec2::ZERO;
    }
    offset / dist * (strength * (1.0 - dist / radius))
}

/// Push every other body away from the body at `index`, then remove it.
///
/// Returns the removed body.
///
/// # Panics
/// If `index` is out of range.
pub fn explode(store: &mut BodyStore, index: usize, radius: f32, strength: f32) -> Body {
    let center = store.as_slice()[index].pos;

    for (i, body) in store.iter_mut().enumerate() {
        if i == index {
            continue;
        }
        body.vel += explosion_impulse(body.pos - center, radius, strength);
    }

    store.remove_at(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(points: &[(f32, f32)]) -> BodyStore {
        points
            .iter()
            .map(|&(x, y)| Body::new(Vec2::new(x, y), 5.0).unwrap())
            .collect()
    }

    #[test]
    fn test_falloff_matches_distance() {
        let mut store = store_of(&[(0.0, 0.0), (10.0, 0.0), (0.0, -40.0)]);
        let removed = explode(&mut store, 0, 50.0, 200.0);

        assert_eq!(removed.pos, Vec2::ZERO);
        assert_eq!(store.len(), 2);

        let near = store.get(0).unwrap();
        assert!((near.vel - Vec2::new(160.0, 0.0)).length() < 1e-3);

        let far = store.get(1).unwrap();
        assert!((far.vel - Vec2::new(0.0, -40.0)).length() < 1e-3);
    }

    #[test]
    fn test_out_of_range_and_coincident_unaffected() {
        let mut store = store_of(&[(50.0, 0.0), (0.0, 0.0), (0.0, 0.0), (-80.0, 0.0)]);
        explode(&mut store, 1, 50.0, 200.0);

        assert_eq!(store.len(), 3);
        for body in &store {
            assert_eq!(body.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn test_impulse_adds_to_existing_velocity() {
        let mut store = store_of(&[(0.0, 25.0), (0.0, 0.0)]);
        store.as_mut_slice()[0].vel = Vec2::new(3.0, -10.0);

        explode(&mut store, 1, 50.0, 200.0);
        let body = store.get(0).unwrap();
        assert!((body.vel - Vec2::new(3.0, 90.0)).length() < 1e-3);
    }

    #[test]
    fn test_impulse_edge_values() {
        assert_eq!(explosion_impulse(Vec2::ZERO, 50.0, 200.0), Vec2::ZERO);
        assert_eq!(explosion_impulse(Vec2::new(50.0, 0.0), 50.0, 200.0), Vec2::ZERO);
        let diag = explosion_impulse(Vec2::new(3.0, 4.0), 50.0, 200.0);
        assert!((diag.length() - 180.0).abs() < 1e-3);
        assert!((diag.normalize() - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }
}
