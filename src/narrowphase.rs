use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::types::*;

/// Narrowphase primitive tests for the two shape pairings the world needs.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn overlap_circle_circle(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> Option<Overlap> {
        let delta = c1 - c0;
        let dist2 = delta.length_squared();
        let rsum = r0 + r1;
        // Strict: tangent contact (distance == r0 + r1) is not a collision.
        if dist2 >= rsum * rsum {
            return None;
        }
        if dist2 == 0.0 {
            // Coincident centers; no direction to push along.
            return Some(Overlap { normal: Vec2::ZERO, depth: rsum });
        }
        let dist = dist2.sqrt();
        Some(Overlap {
            normal: delta / dist,
            depth: rsum - dist,
        })
    }

    fn hit_circle_rect(center: Vec2, r: f32, rect_c: Vec2, rect_h: Vec2) -> Option<RectHit> {
        let dist = (center - rect_c).abs();

        if dist.x > rect_h.x + r || dist.y > rect_h.y + r {
            return None;
        }

        // Within one half extent on either axis: the disc faces an edge
        // (or its center is inside the rectangle).
        if dist.x <= rect_h.x || dist.y <= rect_h.y {
            return Some(RectHit::Face);
        }

        let corner = dist - rect_h;
        if corner.length_squared() <= r * r {
            Some(RectHit::Corner)
        } else {
            None
        }
    }
}
