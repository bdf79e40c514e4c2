//! Enemy brain state machine

use deadfall_math::Vec2;
use serde::{Deserialize, Serialize};

/// Behavioral state of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrainState {
    /// Patrol aimlessly via wander steering.
    Wander,
    /// Chase the target directly.
    Pursue,
}

impl Default for BrainState {
    fn default() -> Self {
        Self::Wander
    }
}

/// Inputs for a brain transition, snapshotted once per frame.
#[derive(Debug, Clone, Copy)]
pub struct BrainContext {
    /// Agent position.
    pub position: Vec2,
    /// Target (player) position.
    pub target: Vec2,
    /// Whether the agent has ever been hit. A damaged agent hunts the
    /// target regardless of distance.
    pub damaged: bool,
}

/// Two-state decision logic for an enemy agent.
///
/// Pursue is entered when the target comes inside the detect radius or the
/// agent has been damaged; a damaged agent never returns to wandering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Brain {
    state: BrainState,
}

impl Brain {
    /// Create a brain in the wander state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> BrainState {
        self.state
    }

    /// Run the frame's transition and return the resulting state.
    pub fn update(&mut self, ctx: &BrainContext, detect_radius: f32) -> BrainState {
        let dist_sq = (ctx.target - ctx.position).length_squared();
        let in_range = dist_sq < detect_radius * detect_radius;
        self.state = if in_range || ctx.damaged {
            BrainState::Pursue
        } else {
            BrainState::Wander
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(position: Vec2, target: Vec2, damaged: bool) -> BrainContext {
        BrainContext {
            position,
            target,
            damaged,
        }
    }

    #[test]
    fn test_wanders_when_target_far() {
        let mut brain = Brain::new();
        let state = brain.update(&ctx(Vec2::ZERO, Vec2::new(1000.0, 0.0), false), 550.0);
        assert_eq!(state, BrainState::Wander);
    }

    #[test]
    fn test_pursues_inside_detect_radius() {
        let mut brain = Brain::new();
        let state = brain.update(&ctx(Vec2::ZERO, Vec2::new(100.0, 0.0), false), 550.0);
        assert_eq!(state, BrainState::Pursue);
    }

    #[test]
    fn test_damaged_pursues_at_any_range() {
        let mut brain = Brain::new();
        let state = brain.update(&ctx(Vec2::ZERO, Vec2::new(5000.0, 0.0), true), 550.0);
        assert_eq!(state, BrainState::Pursue);
    }
}
