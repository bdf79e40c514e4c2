//! Enemy entities

use crate::config::EnemyConfig;
use deadfall_ai::{seek, separation, wander, Brain, BrainContext, BrainState};
use deadfall_combat::Health;
use deadfall_math::{Rect, Vec2};
use deadfall_physics::{collide_with_obstacles, Axis, Body};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One hostile agent. Stats are sampled from the config pools at spawn so
/// a horde moves raggedly instead of in lockstep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    /// Facing, degrees.
    pub rotation: f32,
    pub health: Health,
    /// Top speed, sampled at spawn.
    pub speed: f32,
    /// Max steering magnitude, sampled at spawn.
    pub seek_force: f32,
    /// Set the first time this enemy is hit; a damaged enemy hunts the
    /// player from any distance and never goes back to wandering.
    pub damaged: bool,
    #[serde(skip)]
    brain: Brain,
    /// Cooldown until the next contact attack, ms.
    pub attack_cooldown_ms: f32,
}

impl Enemy {
    /// Spawn at a position, sampling speed, seek force, and health from the
    /// config pools.
    pub fn spawn<R: Rng>(position: Vec2, config: &EnemyConfig, rng: &mut R) -> Self {
        Self {
            body: Body::new(position, config.hit_extent, config.hit_extent)
                .with_velocity(Vec2::new(1.0, 0.0)),
            rotation: 0.0,
            health: Health::new(pick(&config.healths, 500, rng)),
            speed: pick(&config.speeds, 150.0, rng),
            seek_force: pick(&config.seek_forces, 0.5, rng),
            damaged: false,
            brain: Brain::new(),
            attack_cooldown_ms: 0.0,
        }
    }

    /// Mark as hit by the player. One-shot: never cleared.
    pub fn hit(&mut self) {
        self.damaged = true;
    }

    /// Whether the contact-attack cooldown has elapsed.
    pub fn can_attack(&self) -> bool {
        self.attack_cooldown_ms <= 0.0
    }

    /// Restart the contact-attack cooldown.
    pub fn start_attack_cooldown(&mut self, config: &EnemyConfig) {
        self.attack_cooldown_ms = config.attack_rate_ms;
    }

    /// Current brain state (for tests and debug overlays).
    pub fn state(&self) -> BrainState {
        self.brain.state()
    }

    /// Full per-frame update: decide, steer, integrate, resolve walls.
    ///
    /// `flock` carries the positions of all *other* live enemies for
    /// separation. Death is not handled here; combat resolution removes
    /// dead enemies within the same frame they drop.
    #[allow(clippy::too_many_arguments)]
    pub fn update<R: Rng>(
        &mut self,
        player_position: Vec2,
        flock: &[Vec2],
        obstacles: &[Rect],
        config: &EnemyConfig,
        drag: f32,
        dt: f32,
        rng: &mut R,
    ) {
        self.attack_cooldown_ms = (self.attack_cooldown_ms - dt * 1000.0).max(0.0);

        let ctx = BrainContext {
            position: self.body.position,
            target: player_position,
            damaged: self.damaged,
        };

        match self.brain.update(&ctx, config.detect_radius) {
            BrainState::Pursue => self.pursue(player_position, flock, config, drag),
            BrainState::Wander => self.wander_about(flock, config, rng),
        }

        self.body.integrate(dt);
        collide_with_obstacles(&mut self.body, obstacles, Axis::X);
        collide_with_obstacles(&mut self.body, obstacles, Axis::Y);
    }

    /// Head straight for the player: face them, accelerate toward them at
    /// full speed, shoulder away from the flock, damp with drag.
    fn pursue(&mut self, player_position: Vec2, flock: &[Vec2], config: &EnemyConfig, drag: f32) {
        let to_target = player_position - self.body.position;
        if to_target != Vec2::ZERO {
            self.rotation = to_target.angle_to_deg(Vec2::X);
        }

        let mut acc = Vec2::from_heading_deg(self.rotation);
        acc += separation(self.body.position, flock.iter().copied(), config.avoid_radius);
        // A fully cancelled direction (surrounded) stays zero rather than
        // being rescaled.
        if let Some(direction) = acc.try_normalize() {
            acc = direction * self.speed;
        }
        self.body.acceleration = acc - self.body.velocity * drag;
    }

    /// Drift along the wander ring, still keeping separation.
    fn wander_about<R: Rng>(&mut self, flock: &[Vec2], config: &EnemyConfig, rng: &mut R) {
        let ring_radius = pick(&config.wander_ring_radii, 60.0, rng);
        let mut acc = wander(
            self.body.position,
            self.body.velocity,
            self.speed,
            self.seek_force,
            config.wander_ring_distance,
            ring_radius,
            rng,
        );
        acc += separation(self.body.position, flock.iter().copied(), config.avoid_radius);
        self.body.acceleration = acc;

        if let Some(direction) = self.body.velocity.try_normalize() {
            self.rotation = direction.angle_to_deg(Vec2::X);
        }
    }

    /// Steering contribution toward an arbitrary point, clamped to this
    /// enemy's seek force (exposed for tests and scripted behaviors).
    pub fn seek_toward(&self, target: Vec2) -> Vec2 {
        seek(
            self.body.position,
            self.body.velocity,
            target,
            self.speed,
            self.seek_force,
        )
    }
}

/// Sample from a pool, falling back if the pool is empty.
fn pick<T: Copy, R: Rng>(pool: &[T], fallback: T, rng: &mut R) -> T {
    if pool.is_empty() {
        fallback
    } else {
        pool[rng.gen_range(0..pool.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deadfall_ai::BrainState;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn config() -> EnemyConfig {
        EnemyConfig::default()
    }

    #[test]
    fn test_spawn_samples_from_pools() {
        let config = config();
        let mut rng = SmallRng::seed_from_u64(21);
        for _ in 0..16 {
            let enemy = Enemy::spawn(Vec2::ZERO, &config, &mut rng);
            assert!(config.speeds.contains(&enemy.speed));
            assert!(config.seek_forces.contains(&enemy.seek_force));
            assert_eq!(enemy.health.current, 500);
        }
    }

    #[test]
    fn test_pursuit_closes_distance() {
        let config = config();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut enemy = Enemy::spawn(Vec2::ZERO, &config, &mut rng);
        let player = Vec2::new(400.0, 0.0);

        let start_gap = (player - enemy.body.position).length();
        for _ in 0..120 {
            enemy.update(player, &[], &[], &config, 1.0, 1.0 / 60.0, &mut rng);
        }
        assert_eq!(enemy.state(), BrainState::Pursue);
        assert!((player - enemy.body.position).length() < start_gap);
    }

    #[test]
    fn test_wanders_when_player_out_of_range() {
        let config = config();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut enemy = Enemy::spawn(Vec2::ZERO, &config, &mut rng);
        enemy.update(Vec2::new(5000.0, 0.0), &[], &[], &config, 1.0, 0.016, &mut rng);
        assert_eq!(enemy.state(), BrainState::Wander);
    }

    #[test]
    fn test_damaged_enemy_pursues_from_afar() {
        let config = config();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut enemy = Enemy::spawn(Vec2::ZERO, &config, &mut rng);
        enemy.hit();
        enemy.update(Vec2::new(5000.0, 0.0), &[], &[], &config, 1.0, 0.016, &mut rng);
        assert_eq!(enemy.state(), BrainState::Pursue);
    }

    #[test]
    fn test_lone_enemy_gets_no_separation_push() {
        // With no flockmates in range, motion is pure seek/wander: the
        // separation contribution must be exactly zero.
        let push = separation(Vec2::ZERO, std::iter::empty(), 10.0);
        assert_eq!(push, Vec2::ZERO);
    }

    #[test]
    fn test_seek_toward_is_force_clamped() {
        let config = config();
        let mut rng = SmallRng::seed_from_u64(17);
        let enemy = Enemy::spawn(Vec2::ZERO, &config, &mut rng);
        let steer = enemy.seek_toward(Vec2::new(300.0, -120.0));
        assert!(steer.length() <= enemy.seek_force + 1e-5);
        assert!(steer.x > 0.0);
    }

    #[test]
    fn test_attack_cooldown_ticks_down() {
        let config = config();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut enemy = Enemy::spawn(Vec2::ZERO, &config, &mut rng);
        assert!(enemy.can_attack());
        enemy.start_attack_cooldown(&config);
        assert!(!enemy.can_attack());
        enemy.update(Vec2::ZERO, &[], &[], &config, 1.0, 0.3, &mut rng);
        assert!(!enemy.can_attack());
        enemy.update(Vec2::ZERO, &[], &[], &config, 1.0, 0.3, &mut rng);
        assert!(enemy.can_attack());
    }
}
