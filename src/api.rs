use glam::Vec2;

use crate::diag::SimObserver;
use crate::error::SimError;
use crate::types::*;

/// Public API contract for the simulation world.
///
/// The world is driven externally: a frame-pacing collaborator calls `step`
/// once per animation frame, and input/render collaborators use the
/// lifecycle, parameter, and query operations strictly between ticks.
pub trait SimWorldApi {
    /// Construct a new world with the given configuration.
    fn new(cfg: WorldConfig) -> Self
    where
        Self: Sized;

    // --- Entity lifecycle (between ticks only) -----------------------------

    /// Spawn a dynamic body at rest. Returns its slot id.
    fn spawn_body(
        &mut self,
        position: Vec2,
        radius: f32,
        mass: f32,
        bounce: f32,
        color: Color,
    ) -> Result<EntityId, SimError>;

    /// Spawn a static obstacle from full width/height and rotation degrees.
    fn spawn_obstacle(
        &mut self,
        position: Vec2,
        width: f32,
        height: f32,
        rotation_deg: f32,
        color: Color,
    ) -> Result<EntityId, SimError>;

    /// Remove the first body (in insertion order) whose disc contains `p`.
    /// Obstacles are never removed by pointer. Returns whether one was hit.
    fn remove_body_at(&mut self, p: Vec2) -> bool;

    /// Remove every entity.
    fn clear(&mut self);

    // --- Simulation parameters (between ticks only) ------------------------

    /// Update the gravity magnitude `G`; the gravity vector is `(0, G)`.
    fn set_gravity(&mut self, g: f32) -> Result<(), SimError>;

    /// Update the world extents (e.g. on display resize).
    fn set_bounds(&mut self, width: f32, height: f32) -> Result<(), SimError>;

    // --- Tick --------------------------------------------------------------

    /// Run one full tick: integrate every body, then scan every unordered
    /// entity pair, resolving collisions in place.
    fn step(&mut self) -> StepStats;

    /// `step`, reporting anomalies and completion to the given observer.
    fn step_with(&mut self, observer: &mut dyn SimObserver) -> StepStats;

    // --- Queries -----------------------------------------------------------

    /// First body (in insertion order) whose disc strictly contains `p`.
    fn body_under_point(&self, p: Vec2) -> Option<EntityId>;

    /// All entities in insertion (= update) order.
    fn entities(&self) -> &[Entity];

    /// Mutable entity access for drag-style collaborators.
    fn entities_mut(&mut self) -> &mut [Entity];

    /// The body stored at `id`, if any.
    fn body(&self, id: EntityId) -> Option<&Body>;

    /// Mutable variant of `body`.
    fn body_mut(&mut self, id: EntityId) -> Option<&mut Body>;
}

/// Narrowphase detection signatures.
pub trait NarrowphaseApi {
    /// Disc/disc overlap: strict `distance < r0 + r1`; tangent contact is
    /// not a collision. The normal points from the first center toward the
    /// second; coincident centers yield the degenerate zero normal.
    fn overlap_circle_circle(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> Option<Overlap>;

    /// Disc vs. axis-aligned rectangle (center + half extents), classified
    /// as a face or corner hit. Obstacle rotation is ignored by design.
    fn hit_circle_rect(center: Vec2, r: f32, rect_c: Vec2, rect_h: Vec2) -> Option<RectHit>;
}

/// Collision response signatures.
pub trait ResolverApi {
    /// Elastic impulse exchange along the contact normal plus half-overlap
    /// positional separation. `overlap.normal` must point from `a` to `b`
    /// and must not be degenerate.
    fn resolve_bodies(a: &mut Body, b: &mut Body, overlap: &Overlap);

    /// Obstacle response: reflect both velocity components, scaled by the
    /// body's bounce factor. No positional correction.
    fn reflect_body(body: &mut Body);
}
