//! Center-anchored axis-aligned rectangle
//!
//! All gameplay collision and overlap tests run on these rects, decoupled
//! from whatever the renderer draws. Y grows downward in world space, so
//! `top` is the minimum-y edge.

use crate::vector::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored as center + half extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Create from center and full width/height.
    #[inline]
    pub fn from_center_size(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center, Vec2::new(width * 0.5, height * 0.5))
    }

    /// Create from the top-left corner and full width/height.
    #[inline]
    pub fn from_top_left(top_left: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width * 0.5, height * 0.5);
        Self::new(top_left + half, half)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half.y * 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Re-anchor on a new center, keeping the extents.
    #[inline]
    pub fn at(&self, center: Vec2) -> Self {
        Self::new(center, self.half)
    }

    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Strict overlap test: rects that merely touch edge-to-edge do NOT
    /// overlap. Tile-snapped entities sit flush against walls without
    /// registering collisions.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
