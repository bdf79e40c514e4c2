//! Integer health component

use serde::{Deserialize, Serialize};

/// Hit points of a combatant. Stored health never goes negative: damage
/// clamps to zero, and zero means dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    /// Create at full health.
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, clamped at zero. Returns `true` if this killed the
    /// entity (it was alive before and is dead now).
    pub fn damage(&mut self, amount: i32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.current = (self.current - amount.max(0)).max(0);
        self.is_dead()
    }

    /// Heal, clamped to max. Dead entities stay dead.
    pub fn heal(&mut self, amount: i32) {
        if self.is_dead() {
            return;
        }
        self.current = (self.current + amount.max(0)).min(self.max);
    }

    /// Kill outright.
    pub fn kill(&mut self) {
        self.current = 0;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    /// Health as a fraction of max, for HUD bars.
    pub fn percent(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut health = Health::new(50);
        assert!(health.damage(80));
        assert_eq!(health.current, 0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_damage_reports_death_once() {
        let mut health = Health::new(50);
        assert!(!health.damage(30));
        assert!(health.damage(30));
        assert!(!health.damage(30));
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut health = Health::new(100);
        health.damage(40);
        health.heal(100);
        assert_eq!(health.current, 100);
    }

    #[test]
    fn test_dead_cannot_heal() {
        let mut health = Health::new(10);
        health.kill();
        health.heal(50);
        assert!(health.is_dead());
    }
}
