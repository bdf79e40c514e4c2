//! 2D vector type

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` for the zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { Self::ZERO }
    }

    /// Unit vector, or `None` for the zero vector. Use this where a zero
    /// direction must be told apart from a genuine +X heading.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 { Some(self / len) } else { None }
    }

    /// Same direction with length clamped to `max`. Vectors already within
    /// the limit (and the zero vector) are returned unchanged.
    #[inline]
    pub fn clamp_length(self, max: f32) -> Self {
        let len = self.length();
        if len > max { self * (max / len) } else { self }
    }

    /// Same direction scaled to exactly `len`. The zero vector stays zero.
    #[inline]
    pub fn with_length(self, len: f32) -> Self {
        self.normalize() * len
    }

    /// Rotate counter-clockwise by `degrees`.
    #[inline]
    pub fn rotate_deg(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Signed angle in degrees from `self` to `reference`:
    /// `atan2(reference) - atan2(self)`. Result is in (-360, 360).
    #[inline]
    pub fn angle_to_deg(self, reference: Self) -> f32 {
        (reference.y.atan2(reference.x) - self.y.atan2(self.x)).to_degrees()
    }

    /// Unit heading for a facing angle: `X` rotated by `-rotation` degrees.
    /// Inverse of deriving the facing via `angle_to_deg(Vec2::X)`.
    #[inline]
    pub fn from_heading_deg(rotation: f32) -> Self {
        Self::X.rotate_deg(-rotation)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline] fn mul(self, rhs: Vec2) -> Vec2 { Vec2::new(self * rhs.x, self * rhs.y) }
}
impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs) }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}
impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec2 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        assert!(Vec2::ZERO.try_normalize().is_none());
    }

    #[test]
    fn test_clamp_length() {
        let v = Vec2::new(3.0, 4.0);
        assert_relative_eq!(v.clamp_length(2.0).length(), 2.0, epsilon = 1e-6);
        assert_eq!(v.clamp_length(10.0), v);
        assert_eq!(Vec2::ZERO.clamp_length(1.0), Vec2::ZERO);
    }

    #[test]
    fn test_rotate_deg() {
        let v = Vec2::X.rotate_deg(90.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_roundtrip() {
        // Deriving a facing from a direction and turning it back into a
        // heading must recover the direction.
        let dir = Vec2::new(2.0, -5.0);
        let rotation = dir.angle_to_deg(Vec2::X);
        let heading = Vec2::from_heading_deg(rotation);
        assert_relative_eq!(heading.x, dir.normalize().x, epsilon = 1e-5);
        assert_relative_eq!(heading.y, dir.normalize().y, epsilon = 1e-5);
    }
}
