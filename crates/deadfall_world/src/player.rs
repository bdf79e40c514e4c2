//! The player entity

use crate::config::PlayerConfig;
use crate::input::FrameInput;
use deadfall_combat::{Arsenal, Health, WeaponKind, WeaponSpec};
use deadfall_math::{Rect, Vec2};
use deadfall_physics::{collide_with_obstacles, Axis, Body};
use serde::{Deserialize, Serialize};

/// Stamina config rates are expressed in the original table's per-tick
/// units; this scales them to per-second.
const STAMINA_RATE_SCALE: f32 = 10.0;

/// Velocity below which the player counts as standing still (squared).
const MOVING_EPSILON_SQ: f32 = 1.0;

/// Animation state key the renderer picks frames from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Idle,
    Move,
    Shoot,
    Melee,
    Reload,
}

impl Default for PlayerAction {
    fn default() -> Self {
        Self::Idle
    }
}

/// The single player combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Aim facing, degrees.
    pub rotation: f32,
    pub health: Health,
    /// Damage sink consumed before health.
    pub armour: i32,
    pub stamina: f32,
    pub weapon: WeaponKind,
    pub arsenal: Arsenal,
    /// Animation state for the renderer, recomputed every frame.
    pub action: PlayerAction,
    /// Session clock value of the last shot (or empty click), ms.
    pub last_shot_ms: f64,
    /// Footstep cadence accumulator, ms.
    footstep_clock_ms: f32,
}

impl Player {
    /// Spawn at a position with the knife drawn and an empty arsenal.
    pub fn spawn(position: Vec2, config: &PlayerConfig) -> Self {
        Self {
            body: Body::new(position, config.hit_extent, config.hit_extent),
            rotation: 0.0,
            health: Health::new(config.max_health),
            armour: 0,
            stamina: config.max_stamina,
            weapon: WeaponKind::Knife,
            arsenal: Arsenal::new(),
            action: PlayerAction::Idle,
            last_shot_ms: f64::MIN,
            footstep_clock_ms: 0.0,
        }
    }

    /// Update the aim facing from the input's aim direction. A zero aim
    /// keeps the previous facing.
    pub fn update_aim(&mut self, aim: Vec2) {
        if let Some(direction) = aim.try_normalize() {
            self.rotation = direction.angle_to_deg(Vec2::X);
        }
    }

    /// Whether sprint is effective this frame: held, moving, and fueled.
    pub fn sprinting(&self, input: &FrameInput) -> bool {
        input.sprint && input.move_axis != Vec2::ZERO && self.stamina > 0.0
    }

    /// Input-driven movement: critically-damped acceleration, integration,
    /// axis-separated wall resolution, stamina, footstep cadence.
    ///
    /// Returns `true` when a footstep falls due this frame.
    pub fn update_movement(
        &mut self,
        input: &FrameInput,
        config: &PlayerConfig,
        weapon: &WeaponSpec,
        drag: f32,
        obstacles: &[Rect],
        dt: f32,
    ) -> bool {
        let sprinting = self.sprinting(input);
        let speed = if sprinting {
            config.speed * config.sprint_boost
        } else {
            config.speed
        };

        let direction = input.move_axis.clamp_length(1.0);
        self.body.acceleration = direction * speed - self.body.velocity * drag;
        self.body.integrate(dt);
        collide_with_obstacles(&mut self.body, obstacles, Axis::X);
        collide_with_obstacles(&mut self.body, obstacles, Axis::Y);

        // Stamina drains while sprinting, regens otherwise; the rates come
        // from the wielded weapon (heavier weapons are harder to run with).
        if sprinting {
            self.stamina -= weapon.stamina_dropoff * STAMINA_RATE_SCALE * dt;
        } else {
            self.stamina += weapon.stamina_regen * STAMINA_RATE_SCALE * dt;
        }
        self.stamina = self.stamina.clamp(0.0, config.max_stamina);

        let moving = direction != Vec2::ZERO
            && self.body.velocity.length_squared() > MOVING_EPSILON_SQ;
        self.action = if moving {
            PlayerAction::Move
        } else {
            PlayerAction::Idle
        };

        if moving {
            self.footstep_clock_ms += dt * 1000.0;
            let interval = if sprinting {
                config.footstep_sprint_ms
            } else {
                config.footstep_walk_ms
            };
            if self.footstep_clock_ms >= interval {
                self.footstep_clock_ms = 0.0;
                return true;
            }
        } else {
            self.footstep_clock_ms = 0.0;
        }
        false
    }

    /// Take damage, armour first. Returns `true` if this killed the player.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        let absorbed = self.armour.min(amount.max(0));
        self.armour -= absorbed;
        self.health.damage(amount - absorbed)
    }

    /// Positional knockback along a heading (an enemy shoving the player).
    pub fn knockback(&mut self, heading_deg: f32, magnitude: f32) {
        self.body.shift(Vec2::from_heading_deg(heading_deg) * magnitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn player() -> Player {
        Player::spawn(Vec2::ZERO, &PlayerConfig::default())
    }

    fn knife() -> WeaponSpec {
        deadfall_combat::WeaponTable::default().knife
    }

    #[test]
    fn test_movement_accelerates_along_axis() {
        let mut p = player();
        let input = FrameInput::moving(Vec2::new(1.0, 0.0));
        for _ in 0..60 {
            p.update_movement(&input, &PlayerConfig::default(), &knife(), 1.0, &[], 1.0 / 60.0);
        }
        assert!(p.body.position.x > 0.0);
        assert_relative_eq!(p.body.position.y, 0.0, epsilon = 1e-4);
        assert_eq!(p.action, PlayerAction::Move);
    }

    #[test]
    fn test_diagonal_axis_is_normalized() {
        let config = PlayerConfig::default();
        let mut p = player();
        let input = FrameInput::moving(Vec2::new(1.0, 1.0));
        p.update_movement(&input, &config, &knife(), 1.0, &[], 0.016);
        // Acceleration magnitude is speed minus drag; with zero starting
        // velocity it is exactly the configured speed.
        assert!(p.body.velocity.length() <= config.speed * 0.016 + 1e-3);
    }

    #[test]
    fn test_sprint_drains_and_walk_regens() {
        let config = PlayerConfig::default();
        let mut p = player();
        let sprint = FrameInput {
            move_axis: Vec2::new(1.0, 0.0),
            sprint: true,
            ..FrameInput::default()
        };
        p.update_movement(&sprint, &config, &knife(), 1.0, &[], 1.0);
        assert!(p.stamina < config.max_stamina);

        let drained = p.stamina;
        let walk = FrameInput::moving(Vec2::new(1.0, 0.0));
        p.update_movement(&walk, &config, &knife(), 1.0, &[], 0.5);
        assert!(p.stamina > drained);
    }

    #[test]
    fn test_stamina_bounded() {
        let config = PlayerConfig::default();
        let mut p = player();
        let sprint = FrameInput {
            move_axis: Vec2::new(1.0, 0.0),
            sprint: true,
            ..FrameInput::default()
        };
        for _ in 0..300 {
            p.update_movement(&sprint, &config, &knife(), 1.0, &[], 0.1);
        }
        assert_eq!(p.stamina, 0.0);
        // Out of fuel: sprint no longer engages.
        assert!(!p.sprinting(&sprint));
    }

    #[test]
    fn test_armour_absorbs_before_health() {
        let mut p = player();
        p.armour = 30;
        assert!(!p.apply_damage(40));
        assert_eq!(p.armour, 0);
        assert_eq!(p.health.current, 90);
    }

    #[test]
    fn test_aim_updates_facing() {
        let mut p = player();
        p.update_aim(Vec2::new(0.0, 1.0));
        assert_relative_eq!(p.rotation, -90.0, epsilon = 1e-4);
        // Zero aim keeps the facing.
        p.update_aim(Vec2::ZERO);
        assert_relative_eq!(p.rotation, -90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_footsteps_fall_on_cadence() {
        let config = PlayerConfig::default();
        let mut p = player();
        let input = FrameInput::moving(Vec2::new(1.0, 0.0));
        let mut steps = 0;
        // Two simulated seconds of walking at 60 Hz.
        for _ in 0..120 {
            if p.update_movement(&input, &config, &knife(), 1.0, &[], 1.0 / 60.0) {
                steps += 1;
            }
        }
        // 750 ms walking cadence: two steps in two seconds.
        assert_eq!(steps, 2);
    }
}
