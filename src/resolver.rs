use glam::Vec2;

use crate::api::ResolverApi;
use crate::types::*;

/// Collision response: impulse exchange for body pairs, reflection for
/// bodies hitting a static obstacle.
pub struct Resolver;

impl ResolverApi for Resolver {
    fn resolve_bodies(a: &mut Body, b: &mut Body, overlap: &Overlap) {
        let normal = overlap.normal;
        let tangent = normal.perp();

        // Decompose both velocities into tangential and normal parts.
        let tan_a = a.velocity.dot(tangent);
        let tan_b = b.velocity.dot(tangent);
        let norm_a = a.velocity.dot(normal);
        let norm_b = b.velocity.dot(normal);

        // 1-D elastic exchange along the normal; tangential parts pass
        // through untouched (frictionless, non-rotating).
        let msum = a.mass + b.mass;
        let norm_a_post = (norm_a * (a.mass - b.mass) + 2.0 * b.mass * norm_b) / msum;
        let norm_b_post = (norm_b * (b.mass - a.mass) + 2.0 * a.mass * norm_a) / msum;

        a.velocity = tangent * tan_a + normal * norm_a_post;
        b.velocity = tangent * tan_b + normal * norm_b_post;

        // Single corrective push: half the penetration each, apart along
        // the normal, so the pair no longer overlaps this tick.
        let correction = normal * (overlap.depth * 0.5);
        a.position -= correction;
        b.position += correction;
    }

    fn reflect_body(body: &mut Body) {
        // Both axes reflect regardless of which face or corner was struck.
        body.velocity *= -body.bounce;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NarrowphaseApi;
    use crate::narrowphase::Narrowphase;

    fn body_at(pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Body {
        let mut b = Body::new(pos, radius, mass, 0.8, Color::BLACK).unwrap();
        b.velocity = vel;
        b
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocities() {
        let mut a = body_at(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut b = body_at(Vec2::new(1.5, 0.0), Vec2::new(-1.0, 0.0), 1.0, 1.0);
        let ov = Narrowphase::overlap_circle_circle(a.position, 1.0, b.position, 1.0).unwrap();

        Resolver::resolve_bodies(&mut a, &mut b, &ov);

        assert!((a.velocity.x + 1.0).abs() < 1e-5);
        assert!((b.velocity.x - 1.0).abs() < 1e-5);
        assert!(a.velocity.y.abs() < 1e-5);
        assert!(b.velocity.y.abs() < 1e-5);
    }

    #[test]
    fn test_normal_momentum_is_conserved() {
        let mut a = body_at(Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0), 1.0, 2.0);
        let mut b = body_at(Vec2::new(1.2, 0.9), Vec2::new(-0.5, -0.25), 1.0, 3.0);
        let ov = Narrowphase::overlap_circle_circle(a.position, 1.0, b.position, 1.0).unwrap();
        let before = a.mass * a.velocity.dot(ov.normal) + b.mass * b.velocity.dot(ov.normal);

        Resolver::resolve_bodies(&mut a, &mut b, &ov);

        let after = a.mass * a.velocity.dot(ov.normal) + b.mass * b.velocity.dot(ov.normal);
        assert!((before - after).abs() < 1e-4, "momentum {} -> {}", before, after);
    }

    #[test]
    fn test_tangential_components_pass_through() {
        let mut a = body_at(Vec2::new(0.0, 0.0), Vec2::new(1.0, 3.0), 1.0, 1.0);
        let mut b = body_at(Vec2::new(1.5, 0.0), Vec2::new(-1.0, -2.0), 1.0, 4.0);
        let ov = Narrowphase::overlap_circle_circle(a.position, 1.0, b.position, 1.0).unwrap();
        let tangent = ov.normal.perp();
        let tan_a = a.velocity.dot(tangent);
        let tan_b = b.velocity.dot(tangent);

        Resolver::resolve_bodies(&mut a, &mut b, &ov);

        assert!((a.velocity.dot(tangent) - tan_a).abs() < 1e-5);
        assert!((b.velocity.dot(tangent) - tan_b).abs() < 1e-5);
    }

    #[test]
    fn test_pair_no_longer_overlaps_after_resolution() {
        let mut a = body_at(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut b = body_at(Vec2::new(1.1, 0.4), Vec2::new(-1.0, 0.2), 0.8, 2.5);
        let ov =
            Narrowphase::overlap_circle_circle(a.position, a.radius, b.position, b.radius)
                .unwrap();

        Resolver::resolve_bodies(&mut a, &mut b, &ov);

        let dist = (b.position - a.position).length();
        assert!(dist >= a.radius + b.radius - 1e-5, "still overlapping: {}", dist);
    }

    #[test]
    fn test_resolution_is_symmetric_in_pair_order() {
        let a0 = body_at(Vec2::new(0.0, 0.0), Vec2::new(1.5, -0.5), 1.0, 1.0);
        let b0 = body_at(Vec2::new(1.3, 0.6), Vec2::new(-0.75, 0.0), 1.0, 2.0);

        let mut a1 = a0;
        let mut b1 = b0;
        let ov =
            Narrowphase::overlap_circle_circle(a1.position, 1.0, b1.position, 1.0).unwrap();
        Resolver::resolve_bodies(&mut a1, &mut b1, &ov);

        // Other order: the normal flips sign, the outcome must not.
        let mut a2 = a0;
        let mut b2 = b0;
        let ov_rev =
            Narrowphase::overlap_circle_circle(b2.position, 1.0, a2.position, 1.0).unwrap();
        Resolver::resolve_bodies(&mut b2, &mut a2, &ov_rev);

        assert!((a1.velocity - a2.velocity).length() < 1e-5);
        assert!((b1.velocity - b2.velocity).length() < 1e-5);
        assert!((a1.position - a2.position).length() < 1e-5);
        assert!((b1.position - b2.position).length() < 1e-5);
    }

    #[test]
    fn test_reflect_flips_both_axes_scaled_by_bounce() {
        let mut b = Body::new(Vec2::ZERO, 1.0, 1.0, 0.5, Color::BLACK).unwrap();
        b.velocity = Vec2::new(2.0, -3.0);
        Resolver::reflect_body(&mut b);
        assert!((b.velocity.x + 1.0).abs() < 1e-5);
        assert!((b.velocity.y - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_reflect_never_gains_speed() {
        let mut b = Body::new(Vec2::ZERO, 1.0, 1.0, 1.0, Color::BLACK).unwrap();
        b.velocity = Vec2::new(4.0, 3.0);
        let speed = b.velocity.length();
        Resolver::reflect_body(&mut b);
        assert!(b.velocity.length() <= speed + 1e-5);
    }
}
