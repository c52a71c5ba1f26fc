// Input handling system
//
// Keyboard events are mapped to game actions through a remappable
// configuration, then tracked per frame so the game can tell a fresh press
// from a held key.
//
// - `action`: game actions and default key bindings
// - `config`: key -> action mapping
// - `player`: pressed / just-pressed state for the local player
// - `manager`: entry point fed by winit keyboard events
//
// ```rust
// let mut input = InputManager::default();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Each frame
// session.update(dt, input.player());
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::{default_bindings, Action, BATCH_ALLOCATION, SKILL_HOTKEYS};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;
