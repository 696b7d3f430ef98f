use glam::Vec2;

use crate::error::SimError;
use crate::vector::{self, VecOutcome};

/// Entity color, rendering-only (the simulation never reads it).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// Convenience constructor.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// World extents. The simulated area is `[0, width] x [0, height]`,
/// y growing downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(SimError::InvalidBounds);
        }
        Ok(Self { width, height })
    }
}

/// World-level configuration.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Simulated area extents. Mutable between ticks (e.g. display resize).
    pub bounds: Bounds,
    /// Gravity magnitude `G`; the gravity vector is `(0, G)`.
    pub gravity: f32,
    /// Enable internal timing instrumentation (adds small overhead when true).
    pub enable_timing: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds { width: 800.0, height: 600.0 },
            gravity: 0.9,
            enable_timing: false,
        }
    }
}

/// Slot index into the world's entity list. Valid until the next removal
/// or `clear`; external mutation happens only between ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub usize);

/// Disc/disc contact result.
#[derive(Copy, Clone, Debug)]
pub struct Overlap {
    /// Unit vector from the first center toward the second.
    /// `(0,0)` marks coincident centers; the response layer must skip it.
    pub normal: Vec2,
    /// Penetration depth (> 0).
    pub depth: f32,
}

impl Overlap {
    /// True when the centers coincide and no contact normal exists.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec2::ZERO
    }
}

/// Which part of a rectangle a disc ran into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RectHit {
    Face,
    Corner,
}

/// A dynamic circular body.
#[derive(Copy, Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    /// Position at the start of the previous integration step.
    /// Tracked but not consumed by the current physics.
    pub previous_position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Disc radius, always positive.
    pub radius: f32,
    /// Inertial mass, always positive.
    pub mass: f32,
    /// Restitution in `(0, 1]`: fraction of speed kept across a bounce.
    pub bounce: f32,
    pub color: Color,
}

impl Body {
    /// Restitution used by the reference scene when none is given.
    pub const DEFAULT_BOUNCE: f32 = 0.8;

    pub fn new(
        position: Vec2,
        radius: f32,
        mass: f32,
        bounce: f32,
        color: Color,
    ) -> Result<Self, SimError> {
        if !position.is_finite() {
            return Err(SimError::InvalidPosition);
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius);
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass);
        }
        if !(bounce.is_finite() && bounce > 0.0 && bounce <= 1.0) {
            return Err(SimError::InvalidBounce);
        }
        Ok(Self {
            position,
            previous_position: position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            mass,
            bounce,
            color,
        })
    }

    /// Accumulate a force into the acceleration. The force is scaled by the
    /// body's mass before accumulation and no later division by mass occurs,
    /// so heavier bodies accelerate harder under the same force.
    pub fn apply_force(&mut self, force: Vec2) -> VecOutcome {
        vector::accum(&mut self.acceleration, force * self.mass)
    }

    /// Pointer hit-test: strictly inside the disc.
    pub fn contains_point(&self, p: Vec2) -> bool {
        (p - self.position).length() < self.radius
    }
}

/// A static rectangular obstacle. Immune to forces; bodies reflect off it.
#[derive(Copy, Clone, Debug)]
pub struct Obstacle {
    pub position: Vec2,
    /// Half extents along X/Y, always positive.
    pub half_extents: Vec2,
    /// Rotation in radians. Rendering-only: collision math treats the
    /// rectangle as axis-aligned.
    pub rotation: f32,
    pub color: Color,
}

impl Obstacle {
    /// Build from full width/height and a rotation given in degrees.
    pub fn new(
        position: Vec2,
        width: f32,
        height: f32,
        rotation_deg: f32,
        color: Color,
    ) -> Result<Self, SimError> {
        if !position.is_finite() {
            return Err(SimError::InvalidPosition);
        }
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(SimError::InvalidExtents);
        }
        if !rotation_deg.is_finite() {
            return Err(SimError::InvalidRotation);
        }
        Ok(Self {
            position,
            half_extents: Vec2::new(width * 0.5, height * 0.5),
            rotation: rotation_deg.to_radians(),
            color,
        })
    }
}

/// Tagged entity variant. Collision dispatch keys on the pair of tags
/// instead of inspecting runtime types.
#[derive(Copy, Clone, Debug)]
pub enum Entity {
    Body(Body),
    Obstacle(Obstacle),
}

impl Entity {
    pub fn position(&self) -> Vec2 {
        match self {
            Entity::Body(b) => b.position,
            Entity::Obstacle(o) => o.position,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Entity::Body(b) => b.color,
            Entity::Obstacle(o) => o.color,
        }
    }

    pub fn as_body(&self) -> Option<&Body> {
        match self {
            Entity::Body(b) => Some(b),
            Entity::Obstacle(_) => None,
        }
    }

    pub fn as_body_mut(&mut self) -> Option<&mut Body> {
        match self {
            Entity::Body(b) => Some(b),
            Entity::Obstacle(_) => None,
        }
    }
}

/// Per-tick counters, returned by `step` for testability.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub bodies: usize,
    pub obstacles: usize,
    /// Unordered pairs examined this tick: n*(n-1)/2.
    pub pairs_checked: usize,
    pub body_contacts: usize,
    pub obstacle_hits: usize,
    /// Wall bounces; a corner tick counts twice.
    pub boundary_bounces: usize,
    /// Guarded vector operations rejected on a non-finite operand.
    pub rejected_ops: usize,
    /// Body pairs with coincident centers, detected but left unresolved.
    pub degenerate_contacts: usize,
}

/// Timing breakdown for the last completed tick.
#[derive(Copy, Clone, Debug, Default)]
pub struct StepTiming {
    pub step_ms: f64,
    pub integrate_ms: f64,
    pub scan_ms: f64,
}
