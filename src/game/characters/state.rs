// Movement state machine for the player entity

/// Whether the entity is standing on something this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Resting on a tile or the map floor
    Grounded,
    /// Jumping or falling
    #[default]
    Airborne,
}

impl MotionState {
    pub fn from_on_ground(on_ground: bool) -> Self {
        if on_ground {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne)
    }

    /// Pose label shown on the HUD
    pub fn pose_name(&self) -> &'static str {
        match self {
            Self::Grounded => "stand",
            Self::Airborne => "air",
        }
    }
}

/// Tracks the current motion state and how long the entity has been in it
#[derive(Debug, Default)]
pub struct MotionStateMachine {
    current_state: MotionState,
    previous_state: MotionState,
    state_time: f32,
}

impl MotionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MotionState {
        self.current_state
    }

    pub fn previous_state(&self) -> MotionState {
        self.previous_state
    }

    /// Seconds spent in the current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Record the outcome of a movement tick
    pub fn update(&mut self, dt: f32, on_ground: bool) {
        let next = MotionState::from_on_ground(on_ground);
        self.previous_state = self.current_state;
        if next != self.current_state {
            self.current_state = next;
            self.state_time = 0.0;
        } else {
            self.state_time += dt;
        }
    }

    /// True on the tick the entity touched down
    pub fn just_landed(&self) -> bool {
        self.previous_state.is_airborne() && self.current_state.is_grounded()
    }

    /// True on the tick the entity left the ground
    pub fn just_left_ground(&self) -> bool {
        self.previous_state.is_grounded() && self.current_state.is_airborne()
    }

    /// Back to the spawn state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sm = MotionStateMachine::new();
        assert_eq!(sm.state(), MotionState::Airborne);
        assert_eq!(sm.state_time(), 0.0);
    }

    #[test]
    fn test_landing_transition() {
        let mut sm = MotionStateMachine::new();
        sm.update(0.1, true);
        assert_eq!(sm.state(), MotionState::Grounded);
        assert_eq!(sm.previous_state(), MotionState::Airborne);
        assert!(sm.just_landed());
        assert_eq!(sm.state_time(), 0.0);
    }

    #[test]
    fn test_just_landed_lasts_one_tick() {
        let mut sm = MotionStateMachine::new();
        sm.update(0.1, true);
        sm.update(0.1, true);
        assert!(!sm.just_landed());
        assert!((sm.state_time() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_leaving_ground() {
        let mut sm = MotionStateMachine::new();
        sm.update(0.1, true);
        sm.update(0.1, false);
        assert!(sm.just_left_ground());
        assert_eq!(sm.state(), MotionState::Airborne);
    }

    #[test]
    fn test_pose_names() {
        assert_eq!(MotionState::Grounded.pose_name(), "stand");
        assert_eq!(MotionState::Airborne.pose_name(), "air");
    }

    #[test]
    fn test_reset() {
        let mut sm = MotionStateMachine::new();
        sm.update(0.1, true);
        sm.reset();
        assert_eq!(sm.state(), MotionState::Airborne);
        assert!(!sm.just_landed());
    }
}
