// Held-key aggregation and the mapping from raw keys to logical controls.

use std::collections::HashSet;

/// Logical controls the lander responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Thrust,
}

/// Set of currently depressed key identifiers.
///
/// Membership only; unknown keys are stored and simply never match a binding.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        if !self.held.contains(key) {
            self.held.insert(key.to_owned());
        }
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Drops every held key (focus loss).
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// True if any of the given aliases is held.
    pub fn is_active<S: AsRef<str>>(&self, aliases: &[S]) -> bool {
        aliases.iter().any(|k| self.is_held(k.as_ref()))
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

/// Control state resolved once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
}

/// Raw key identifiers bound to each action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub rotate_left: Vec<String>,
    pub rotate_right: Vec<String>,
    pub thrust: Vec<String>,
}

impl KeyBindings {
    pub fn keys(&self, action: Action) -> &[String] {
        match action {
            Action::RotateLeft => &self.rotate_left,
            Action::RotateRight => &self.rotate_right,
            Action::Thrust => &self.thrust,
        }
    }

    /// Replaces the keys bound to `action`.
    pub fn bind(&mut self, action: Action, keys: Vec<String>) {
        match action {
            Action::RotateLeft => self.rotate_left = keys,
            Action::RotateRight => self.rotate_right = keys,
            Action::Thrust => self.thrust = keys,
        }
    }

    pub fn is_action_active(&self, input: &InputState, action: Action) -> bool {
        input.is_active(self.keys(action))
    }

    pub fn controls(&self, input: &InputState) -> Controls {
        Controls {
            rotate_left: self.is_action_active(input, Action::RotateLeft),
            rotate_right: self.is_action_active(input, Action::RotateRight),
            thrust: self.is_action_active(input, Action::Thrust),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = |ks: &[&str]| ks.iter().map(|k| k.to_string()).collect();
        Self {
            rotate_left: keys(&["ArrowLeft", "a"]),
            rotate_right: keys(&["ArrowRight", "d"]),
            thrust: keys(&["ArrowUp", "w"]),
        }
    }
}
