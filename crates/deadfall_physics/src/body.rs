//! Kinematic body shared by every moving entity

use deadfall_math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Position, velocity, acceleration, and the center-locked hit-rect of a
/// moving entity. The hit-rect tracks `position` through every mutation;
/// collision code may rely on `hit.center == position`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub hit: Rect,
}

impl Body {
    /// Create a body at rest with a hit-rect of the given size.
    pub fn new(position: Vec2, hit_width: f32, hit_height: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            hit: Rect::from_center_size(position, hit_width, hit_height),
        }
    }

    /// Set the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Semi-implicit Euler step:
    /// `v += a * dt; p += v * dt + 0.5 * a * dt^2`.
    ///
    /// Callers clamp `dt` via [`crate::PhysicsConfig::clamp_dt`] before
    /// integrating.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt + self.acceleration * (0.5 * dt * dt);
        self.hit.center = self.position;
    }

    /// Move the body to an absolute position, dragging the hit-rect along.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.hit.center = position;
    }

    /// Shift the body by an offset, dragging the hit-rect along.
    pub fn shift(&mut self, offset: Vec2) {
        self.teleport(self.position + offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_constant_velocity() {
        let mut body = Body::new(Vec2::ZERO, 10.0, 10.0).with_velocity(Vec2::new(100.0, 0.0));
        body.integrate(0.5);
        assert_relative_eq!(body.position.x, 50.0);
        assert_eq!(body.hit.center, body.position);
    }

    #[test]
    fn test_integrate_acceleration() {
        // From rest under constant acceleration a for time t, semi-implicit
        // Euler lands at a*t^2 + 0.5*a*t^2 = 1.5*a*t^2 for a single step.
        let mut body = Body::new(Vec2::ZERO, 10.0, 10.0);
        body.acceleration = Vec2::new(2.0, 0.0);
        body.integrate(1.0);
        assert_relative_eq!(body.velocity.x, 2.0);
        assert_relative_eq!(body.position.x, 3.0);
    }

    #[test]
    fn test_hit_rect_tracks_position() {
        let mut body = Body::new(Vec2::new(5.0, 5.0), 4.0, 4.0);
        body.shift(Vec2::new(10.0, 0.0));
        assert_eq!(body.hit.center, Vec2::new(15.0, 5.0));
    }
}
