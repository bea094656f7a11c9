//! Polled keyboard input and the lander's action mapping.

use std::collections::HashSet;

/// Lander actions derived from the keys held this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Actions {
    /// W / Up
    pub thrust: bool,
    /// A / Left
    pub rotate_left: bool,
    /// D / Right
    pub rotate_right: bool,
    /// R
    pub reset: bool,
    /// Escape
    pub exit: bool,
}

/// Tracks which keys are currently held down.
#[derive(Debug, Default)]
pub struct InputState {
    keys_held: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Drop every held key, e.g. when the window loses focus and release
    /// events would never arrive.
    pub fn release_all(&mut self) {
        if !self.keys_held.is_empty() {
            log::debug!("Releasing {} held keys", self.keys_held.len());
        }
        self.keys_held.clear();
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&k| self.is_key_held(k))
    }

    /// Snapshot of the lander controls.
    pub fn actions(&self) -> Actions {
        Actions {
            thrust: self.any_held(&[KeyCode::KeyW, KeyCode::ArrowUp]),
            rotate_left: self.any_held(&[KeyCode::KeyA, KeyCode::ArrowLeft]),
            rotate_right: self.any_held(&[KeyCode::KeyD, KeyCode::ArrowRight]),
            reset: self.is_key_held(KeyCode::KeyR),
            exit: self.is_key_held(KeyCode::Escape),
        }
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
