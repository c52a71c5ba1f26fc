// Input configuration and remapping

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use super::action::{default_bindings, Action};

/// Maps physical keys to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);
        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Unbind every key mapped to `action`
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(keys) = self.action_to_keys.remove(&action) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    pub fn get_keys(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_keys.contains_key(&action)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_keys.clear();
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
