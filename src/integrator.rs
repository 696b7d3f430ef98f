use glam::Vec2;

use crate::diag::{Anomaly, SimObserver};
use crate::types::{Body, Bounds, StepStats};
use crate::vector::{self, VecOutcome};

/// Advance one body by one tick: gravity into acceleration (mass-scaled),
/// acceleration into velocity, velocity into position, acceleration reset,
/// then the wall clamp. Explicit Euler, no sub-stepping; a tick is one
/// logical time unit, so no dt appears.
pub fn integrate(
    body: &mut Body,
    gravity: Vec2,
    bounds: Bounds,
    stats: &mut StepStats,
    observer: &mut dyn SimObserver,
) {
    body.previous_position = body.position;

    note(body.apply_force(gravity), "force", stats, observer);
    let accel = body.acceleration;
    note(vector::accum(&mut body.velocity, accel), "velocity", stats, observer);
    let shift = body.velocity;
    note(vector::accum(&mut body.position, shift), "position", stats, observer);
    // The acceleration was consumed above; zero it for the next tick.
    let (_, out) = vector::rescale(&mut body.acceleration, 0.0);
    note(out, "reset", stats, observer);

    stats.boundary_bounces += clamp_to_bounds(body, bounds);
}

/// Clamp against the four walls independently; crossing a wall snaps the
/// position component to the wall offset by the radius and scales the
/// velocity component by `-bounce`, regardless of its sign. A corner tick
/// can bounce on two walls at once. Returns the number of walls hit.
pub fn clamp_to_bounds(body: &mut Body, bounds: Bounds) -> usize {
    let mut bounces = 0;
    if body.position.x + body.radius > bounds.width {
        body.position.x = bounds.width - body.radius;
        body.velocity.x *= -body.bounce;
        bounces += 1;
    }
    if body.position.x - body.radius < 0.0 {
        body.position.x = body.radius;
        body.velocity.x *= -body.bounce;
        bounces += 1;
    }
    if body.position.y + body.radius > bounds.height {
        body.position.y = bounds.height - body.radius;
        body.velocity.y *= -body.bounce;
        bounces += 1;
    }
    if body.position.y - body.radius < 0.0 {
        body.position.y = body.radius;
        body.velocity.y *= -body.bounce;
        bounces += 1;
    }
    bounces
}

fn note(
    outcome: VecOutcome,
    op: &'static str,
    stats: &mut StepStats,
    observer: &mut dyn SimObserver,
) {
    if outcome == VecOutcome::Rejected {
        stats.rejected_ops += 1;
        observer.on_anomaly(Anomaly::InvalidArgument { op });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::NoOpSimObserver;
    use crate::types::Color;

    fn bounds() -> Bounds {
        Bounds { width: 800.0, height: 600.0 }
    }

    fn resting_body(pos: Vec2, mass: f32) -> Body {
        Body::new(pos, 10.0, mass, 0.5, Color::BLACK).unwrap()
    }

    #[test]
    fn test_gravity_effect_scales_with_mass() {
        // Force is scaled by mass with no later division, so one tick under
        // gravity G leaves velocity.y == G * m.
        let mut body = resting_body(Vec2::new(400.0, 300.0), 2.5);
        let mut stats = StepStats::default();
        integrate(&mut body, Vec2::new(0.0, 0.9), bounds(), &mut stats, &mut NoOpSimObserver);

        assert!((body.velocity.y - 2.25).abs() < 1e-5);
        assert!((body.position.y - 302.25).abs() < 1e-5);
        assert_eq!(body.acceleration, Vec2::ZERO);
        assert_eq!(stats.rejected_ops, 0);
    }

    #[test]
    fn test_previous_position_records_tick_start() {
        let mut body = resting_body(Vec2::new(100.0, 100.0), 1.0);
        body.velocity = Vec2::new(5.0, 0.0);
        let mut stats = StepStats::default();
        integrate(&mut body, Vec2::ZERO, bounds(), &mut stats, &mut NoOpSimObserver);

        assert_eq!(body.previous_position, Vec2::new(100.0, 100.0));
        assert!((body.position.x - 105.0).abs() < 1e-5);
    }

    #[test]
    fn test_right_wall_clamp_flips_and_scales_velocity() {
        let mut body = resting_body(Vec2::new(798.0, 300.0), 1.0);
        body.velocity = Vec2::new(3.0, 0.0);
        let mut stats = StepStats::default();
        integrate(&mut body, Vec2::ZERO, bounds(), &mut stats, &mut NoOpSimObserver);

        assert!((body.position.x - 790.0).abs() < 1e-5);
        assert!((body.velocity.x + 1.5).abs() < 1e-5);
        assert_eq!(stats.boundary_bounces, 1);
    }

    #[test]
    fn test_corner_bounces_on_two_walls() {
        let mut body = resting_body(Vec2::new(5.0, 5.0), 1.0);
        body.velocity = Vec2::new(-10.0, -10.0);
        let hits = clamp_to_bounds(&mut body, bounds());

        assert_eq!(hits, 2);
        assert!((body.position.x - 10.0).abs() < 1e-5);
        assert!((body.position.y - 10.0).abs() < 1e-5);
        assert!((body.velocity.x - 5.0).abs() < 1e-5);
        assert!((body.velocity.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_is_unconditional_on_velocity_sign() {
        // A body past the wall but already moving inward still reflects.
        let mut body = resting_body(Vec2::new(795.0, 300.0), 1.0);
        body.position.x = 795.0;
        body.velocity = Vec2::new(-2.0, 0.0);
        let hits = clamp_to_bounds(&mut body, bounds());

        assert_eq!(hits, 1);
        assert!((body.position.x - 790.0).abs() < 1e-5);
        assert!((body.velocity.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_non_finite_gravity_degrades_to_no_op() {
        struct Recorder(Vec<Anomaly>);
        impl SimObserver for Recorder {
            fn on_anomaly(&mut self, anomaly: Anomaly) {
                self.0.push(anomaly);
            }
        }

        let mut body = resting_body(Vec2::new(400.0, 300.0), 1.0);
        let mut stats = StepStats::default();
        let mut recorder = Recorder(Vec::new());
        integrate(
            &mut body,
            Vec2::new(0.0, f32::NAN),
            bounds(),
            &mut stats,
            &mut recorder,
        );

        assert_eq!(body.position, Vec2::new(400.0, 300.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(stats.rejected_ops, 1);
        assert_eq!(recorder.0, vec![Anomaly::InvalidArgument { op: "force" }]);
    }
}
