//! Guarded in-place vector operations.
//!
//! The type system rules out wrongly-typed operands, so the remaining way a
//! bad value can enter the simulation is a non-finite component (NaN or
//! infinity) from an external collaborator. These helpers reject such
//! operands instead of letting them poison downstream state: the receiver is
//! left untouched and the rejection is reported to the caller.

use glam::Vec2;

/// Outcome of a guarded in-place vector operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VecOutcome {
    Applied,
    Rejected,
}

impl VecOutcome {
    pub fn applied(self) -> bool {
        self == VecOutcome::Applied
    }
}

/// `dst += rhs`. A non-finite `rhs` is rejected and `dst` is left untouched.
pub fn accum(dst: &mut Vec2, rhs: Vec2) -> VecOutcome {
    if !rhs.is_finite() {
        return VecOutcome::Rejected;
    }
    *dst += rhs;
    VecOutcome::Applied
}

/// `dst -= rhs`. A non-finite `rhs` is rejected and `dst` is left untouched.
pub fn deduct(dst: &mut Vec2, rhs: Vec2) -> VecOutcome {
    if !rhs.is_finite() {
        return VecOutcome::Rejected;
    }
    *dst -= rhs;
    VecOutcome::Applied
}

/// `dst *= k`, returning the resulting value. A non-finite `k` is rejected:
/// `dst` is left untouched and the returned value is a detached, unmodified
/// copy rather than the receiver's new state. The copy-on-rejection return
/// mirrors the reference contract for scaling, which differs from the
/// no-op-on-rejection contract of `accum`/`deduct`.
pub fn rescale(dst: &mut Vec2, k: f32) -> (Vec2, VecOutcome) {
    if !k.is_finite() {
        return (*dst, VecOutcome::Rejected);
    }
    *dst *= k;
    (*dst, VecOutcome::Applied)
}
