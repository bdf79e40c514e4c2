//! Physics configuration

use serde::{Deserialize, Serialize};

/// Tuning for the kinematic integrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Maximum frame delta fed into integration, in seconds. A stall (a
    /// debugger pause, a dragged window) otherwise injects a huge delta and
    /// teleports entities through walls.
    pub max_dt: f32,

    /// Drag coefficient applied to agent acceleration: each frame an agent
    /// subtracts `velocity * drag` from its acceleration, giving a
    /// critically-damped approach to its target speed.
    pub drag: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.1,
            drag: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// Clamp a wall-clock frame delta to the configured maximum.
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        dt.min(self.max_dt)
    }

    /// Set the maximum frame delta.
    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_dt() {
        let config = PhysicsConfig::default();
        assert_eq!(config.clamp_dt(0.016), 0.016);
        assert_eq!(config.clamp_dt(10.0), config.max_dt);
    }
}
