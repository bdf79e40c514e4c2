//! Collision resolution passes
//!
//! Two primitives drive all gameplay collision:
//!
//! - [`collide_with_obstacles`]: axis-separated resolution of a moving body
//!   against static obstacle rects. The caller integrates, then resolves x,
//!   then resolves y. Within one call the FIRST overlapping obstacle in
//!   iteration order wins; overlaps are never summed.
//! - [`group_overlaps`]: pure overlap query between two collections of
//!   hit-rects, returning index pairs and mutating nothing.

use crate::body::Body;
use deadfall_math::Rect;

/// Resolution axis for [`collide_with_obstacles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Resolve a body against static obstacles along one axis.
///
/// On overlap the body is pushed to the nearest free edge of the first
/// overlapping obstacle (decided by comparing centers on the axis; exactly
/// coincident centers leave the position untouched) and its velocity
/// component along the axis is zeroed. Returns `true` if a collision was
/// resolved.
pub fn collide_with_obstacles(body: &mut Body, obstacles: &[Rect], axis: Axis) -> bool {
    let hit = match first_overlap(&body.hit, obstacles) {
        Some(index) => obstacles[index],
        None => return false,
    };

    match axis {
        Axis::X => {
            if hit.center.x > body.position.x {
                body.position.x = hit.left() - body.hit.half.x;
            } else if hit.center.x < body.position.x {
                body.position.x = hit.right() + body.hit.half.x;
            }
            body.velocity.x = 0.0;
            body.hit.center.x = body.position.x;
        }
        Axis::Y => {
            if hit.center.y > body.position.y {
                body.position.y = hit.top() - body.hit.half.y;
            } else if hit.center.y < body.position.y {
                body.position.y = hit.bottom() + body.hit.half.y;
            }
            body.velocity.y = 0.0;
            body.hit.center.y = body.position.y;
        }
    }
    true
}

/// Index of the first rect in `group` overlapping `rect`, in iteration
/// order.
pub fn first_overlap(rect: &Rect, group: &[Rect]) -> Option<usize> {
    group.iter().position(|other| rect.overlaps(other))
}

/// All index pairs `(i, j)` where `a[i]` overlaps `b[j]`, in iteration
/// order. With no overlaps the result is empty and nothing is touched.
pub fn group_overlaps(a: &[Rect], b: &[Rect]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, ra) in a.iter().enumerate() {
        for (j, rb) in b.iter().enumerate() {
            if ra.overlaps(rb) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
