use glam::Vec2;

use std::time::Instant;

use crate::api::{NarrowphaseApi, ResolverApi, SimWorldApi};
use crate::diag::{Anomaly, NoOpSimObserver, SimObserver};
use crate::error::SimError;
use crate::integrator;
use crate::narrowphase::Narrowphase;
use crate::resolver::Resolver;
use crate::types::*;

/// The simulation world: the ordered entity collection plus gravity and
/// bounds, advanced one tick at a time by an external frame-pacing
/// collaborator. Single-threaded and run-to-completion; stopping the
/// simulation is simply ceasing to call `step`.
pub struct SimWorld {
    pub cfg: WorldConfig,
    pub tick_counter: u64,

    // Insertion order is update order.
    entities: Vec<Entity>,

    // Timing for the last completed tick (optional)
    last_timing: Option<StepTiming>,
}

impl SimWorldApi for SimWorld {
    fn new(cfg: WorldConfig) -> Self {
        Self {
            cfg,
            tick_counter: 0,
            entities: Vec::new(),
            last_timing: None,
        }
    }

    fn spawn_body(
        &mut self,
        position: Vec2,
        radius: f32,
        mass: f32,
        bounce: f32,
        color: Color,
    ) -> Result<EntityId, SimError> {
        let body = Body::new(position, radius, mass, bounce, color)?;
        self.entities.push(Entity::Body(body));
        Ok(EntityId(self.entities.len() - 1))
    }

    fn spawn_obstacle(
        &mut self,
        position: Vec2,
        width: f32,
        height: f32,
        rotation_deg: f32,
        color: Color,
    ) -> Result<EntityId, SimError> {
        let obstacle = Obstacle::new(position, width, height, rotation_deg, color)?;
        self.entities.push(Entity::Obstacle(obstacle));
        Ok(EntityId(self.entities.len() - 1))
    }

    fn remove_body_at(&mut self, p: Vec2) -> bool {
        let hit = self.entities.iter().position(|e| {
            e.as_body().is_some_and(|b| b.contains_point(p))
        });
        match hit {
            Some(index) => {
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.entities.clear();
    }

    fn set_gravity(&mut self, g: f32) -> Result<(), SimError> {
        if !g.is_finite() {
            return Err(SimError::InvalidGravity);
        }
        self.cfg.gravity = g;
        Ok(())
    }

    fn set_bounds(&mut self, width: f32, height: f32) -> Result<(), SimError> {
        self.cfg.bounds = Bounds::new(width, height)?;
        Ok(())
    }

    fn step(&mut self) -> StepStats {
        self.step_with(&mut NoOpSimObserver)
    }

    fn step_with(&mut self, observer: &mut dyn SimObserver) -> StepStats {
        let t_all = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        self.last_timing = None;

        let mut stats = StepStats::default();
        let gravity = Vec2::new(0.0, self.cfg.gravity);
        let bounds = self.cfg.bounds;

        // Integration phase: every body advances and is wall-clamped before
        // any pair is examined.
        let t0 = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        for entity in &mut self.entities {
            match entity {
                Entity::Body(body) => {
                    stats.bodies += 1;
                    integrator::integrate(body, gravity, bounds, &mut stats, observer);
                }
                Entity::Obstacle(_) => stats.obstacles += 1,
            }
        }
        let integrate_ms = t0.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0);

        // Scan phase: every unordered pair once, ascending index order.
        // No snapshot in between: later pairs see the velocities and
        // positions earlier pairs already updated this tick. Pair positional
        // correction may push a body past a wall; the next tick's clamp
        // brings it back.
        let t1 = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        let n = self.entities.len();
        for first in 0..n {
            for second in (first + 1)..n {
                stats.pairs_checked += 1;
                let (a, b) = pair_mut(&mut self.entities, first, second);
                match (a, b) {
                    (Entity::Body(a), Entity::Body(b)) => {
                        let overlap = Narrowphase::overlap_circle_circle(
                            a.position, a.radius, b.position, b.radius,
                        );
                        if let Some(overlap) = overlap {
                            if overlap.is_degenerate() {
                                stats.degenerate_contacts += 1;
                                observer.on_anomaly(Anomaly::DegenerateGeometry { first, second });
                            } else {
                                Resolver::resolve_bodies(a, b, &overlap);
                                stats.body_contacts += 1;
                            }
                        }
                    }
                    (Entity::Body(body), Entity::Obstacle(obstacle))
                    | (Entity::Obstacle(obstacle), Entity::Body(body)) => {
                        let hit = Narrowphase::hit_circle_rect(
                            body.position,
                            body.radius,
                            obstacle.position,
                            obstacle.half_extents,
                        );
                        if hit.is_some() {
                            Resolver::reflect_body(body);
                            stats.obstacle_hits += 1;
                        }
                    }
                    // Statics never react to each other; the pair still counts.
                    (Entity::Obstacle(_), Entity::Obstacle(_)) => {}
                }
            }
        }
        let scan_ms = t1.map(|t| t.elapsed().as_secs_f64() * 1000.0).unwrap_or(0.0);

        self.tick_counter = self.tick_counter.wrapping_add(1);
        observer.on_step_complete(&stats);

        if let Some(t_all) = t_all {
            self.last_timing = Some(StepTiming {
                step_ms: t_all.elapsed().as_secs_f64() * 1000.0,
                integrate_ms,
                scan_ms,
            });
        }
        stats
    }

    fn body_under_point(&self, p: Vec2) -> Option<EntityId> {
        self.entities.iter().position(|e| {
            e.as_body().is_some_and(|b| b.contains_point(p))
        }).map(EntityId)
    }

    fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    fn body(&self, id: EntityId) -> Option<&Body> {
        self.entities.get(id.0).and_then(Entity::as_body)
    }

    fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.entities.get_mut(id.0).and_then(Entity::as_body_mut)
    }
}

impl SimWorld {
    /// Return the timing breakdown for the last tick, when instrumented.
    pub fn timing(&self) -> Option<StepTiming> {
        self.last_timing
    }
}

/// Simultaneous mutable access to two distinct entity slots.
fn pair_mut(entities: &mut [Entity], first: usize, second: usize) -> (&mut Entity, &mut Entity) {
    debug_assert!(first < second);
    let (head, tail) = entities.split_at_mut(second);
    (&mut head[first], &mut tail[0])
}
