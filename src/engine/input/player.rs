// Per-frame input state with edge detection

use std::collections::HashSet;

use super::action::Action;
use crate::engine::physics::MoveIntent;

/// Input state for the local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions pressed since the last `update`, in press order
    just_pressed: Vec<Action>,

    /// Actions released since the last `update`
    just_released: HashSet<Action>,

    /// Actions held during the previous frame
    previous_pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Held for more than one frame
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed.contains(&action) && self.previous_pressed.contains(&action)
    }

    /// Register an action press. Repeated presses while held are ignored.
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.push(action);
        }
    }

    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Start a new frame. Call once per frame after the tick consumed input.
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
    }

    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
    }

    /// Edge-triggered command actions for this frame, in press order
    pub fn commands(&self) -> impl Iterator<Item = Action> + '_ {
        self.just_pressed
            .iter()
            .copied()
            .filter(|action| !action.is_movement())
    }

    /// Movement intent from the currently held movement actions
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            jump: self.is_pressed(Action::Jump),
        }
    }
}
