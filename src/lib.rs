//! tumble: impulse-based 2D rigid-body sandbox (falling discs vs. static boxes)

pub mod types;
pub mod api;
pub mod world;
pub mod narrowphase;
pub mod resolver;
pub mod integrator;
pub mod vector;
pub mod diag;
pub mod error;

pub use crate::api::*;
pub use crate::diag::{Anomaly, NoOpSimObserver, SimObserver};
pub use crate::error::SimError;
pub use crate::narrowphase::Narrowphase;
pub use crate::resolver::Resolver;
pub use crate::types::*;
pub use crate::vector::VecOutcome;
pub use crate::world::SimWorld;
