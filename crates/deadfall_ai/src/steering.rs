//! Steering behaviors
//!
//! Each behavior returns a steering acceleration contribution. Degenerate
//! inputs (zero direction to target, zero heading) contribute zero rather
//! than propagating a fault.

use deadfall_math::Vec2;
use rand::Rng;

/// Steer toward a target position.
///
/// Desired velocity is the unit direction to the target scaled to `speed`;
/// the returned steering is `desired - velocity`, clamped to `seek_force`.
/// An agent already standing on the target gets zero steering.
pub fn seek(position: Vec2, velocity: Vec2, target: Vec2, speed: f32, seek_force: f32) -> Vec2 {
    let direction = match (target - position).try_normalize() {
        Some(direction) => direction,
        None => return Vec2::ZERO,
    };
    let desired = direction * speed;
    (desired - velocity).clamp_length(seek_force)
}

/// Steer toward a random point on a ring projected ahead of the agent.
///
/// The ring sits `ring_distance` along the current heading; the target is a
/// uniformly random angle on a circle of `ring_radius` around that point.
/// Repeated calls produce an organic, non-linear patrol path. With zero
/// velocity the heading falls back to +X.
pub fn wander<R: Rng>(
    position: Vec2,
    velocity: Vec2,
    speed: f32,
    seek_force: f32,
    ring_distance: f32,
    ring_radius: f32,
    rng: &mut R,
) -> Vec2 {
    let heading = velocity.try_normalize().unwrap_or(Vec2::X);
    let ring_center = position + heading * ring_distance;
    let target = ring_center + Vec2::new(ring_radius, 0.0).rotate_deg(rng.gen_range(0.0..360.0));
    seek(position, velocity, target, speed, seek_force)
}

/// Accumulated repulsion from nearby agents.
///
/// Every other agent strictly inside `avoid_radius` contributes the unit
/// vector pointing away from it. Coincident agents (zero distance) are
/// skipped.
pub fn separation<I>(position: Vec2, others: I, avoid_radius: f32) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    let mut push = Vec2::ZERO;
    for other in others {
        let away = position - other;
        let dist_sq = away.length_squared();
        if dist_sq > 0.0 && dist_sq < avoid_radius * avoid_radius {
            push += away.normalize();
        }
    }
    push
}
