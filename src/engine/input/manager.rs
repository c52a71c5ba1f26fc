// Input manager - translates winit keyboard events into player input

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::config::InputConfig;
use super::player::PlayerInput;

#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
    /// Physical keys currently down
    held: HashSet<KeyCode>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
            held: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.process_key(key, event.state, event.repeat);
        }
    }

    /// Apply one physical key transition.
    ///
    /// An action bound to several keys stays held until the last of them is
    /// released.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(key) else {
            return;
        };

        match state {
            ElementState::Pressed if !repeat => {
                self.held.insert(key);
                self.player.press(action);
            }
            ElementState::Pressed => {}
            ElementState::Released => {
                self.held.remove(&key);
                let still_held = self
                    .config
                    .get_keys(action)
                    .iter()
                    .any(|other| self.held.contains(other));
                if !still_held {
                    self.player.release(action);
                }
            }
        }
    }

    /// Start a new input frame
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held.clear();
        self.player.reset();
    }
}
