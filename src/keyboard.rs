use std::collections::HashMap;

use crate::input::ButtonState;

/// A key on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub enum Key {
    /// A key that types a character, always lowercase
    Char(char),
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Space bar
    Space,
    /// Enter or return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Delete
    Delete,
    /// Tab
    Tab,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Insert
    Insert,
    /// Either shift key
    Shift,
    /// Either control key
    Control,
    /// Either alt key
    Alt,
    /// Super, command or windows key
    Meta,
    /// Function keys, `F(1)` through `F(24)`
    F(u8),
    /// Anything without a name above
    Unknown,
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        match ch {
            ' ' => Key::Space,
            '\t' => Key::Tab,
            '\n' | '\r' => Key::Enter,
            ch => Key::Char(ch.to_ascii_lowercase()),
        }
    }
}

/// Per-key button states
#[derive(Debug, Default)]
pub struct KeyboardState {
    keys: HashMap<Key, ButtonState>,
}

impl KeyboardState {
    /// The state of a key; keys never seen are not pressed
    pub fn state(&self, key: impl Into<Key>) -> ButtonState {
        self.keys
            .get(&key.into())
            .copied()
            .unwrap_or(ButtonState::NotPressed)
    }

    /// Whether a key is currently held down
    pub fn is_down(&self, key: impl Into<Key>) -> bool {
        self.state(key).is_down()
    }

    /// Whether a key went down this frame
    pub fn is_pressed(&self, key: impl Into<Key>) -> bool {
        self.state(key) == ButtonState::Pressed
    }

    /// Whether a key went up this frame
    pub fn is_released(&self, key: impl Into<Key>) -> bool {
        self.state(key) == ButtonState::Released
    }

    /// Every key that is not idle, with its state
    pub fn active(&self) -> impl Iterator<Item = (Key, ButtonState)> + '_ {
        self.keys
            .iter()
            .filter(|(_, state)| **state != ButtonState::NotPressed)
            .map(|(key, state)| (*key, *state))
    }

    pub(crate) fn process_key_event(&mut self, key: Key, pressed: bool) {
        self.keys
            .entry(key)
            .or_insert(ButtonState::NotPressed)
            .update(pressed);
    }

    pub(crate) fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.settle();
        }
    }
}

/// Useful structs to import
pub mod prelude {
    pub use super::Key;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_map_to_keys() {
        assert_eq!(Key::from('D'), Key::Char('d'));
        assert_eq!(Key::from(' '), Key::Space);
    }

    #[test]
    fn keys_go_through_a_full_press_cycle() {
        let mut kb = KeyboardState::default();
        assert_eq!(kb.state('a'), ButtonState::NotPressed);

        kb.process_key_event(Key::Char('a'), true);
        assert!(kb.is_pressed('a'));
        kb.end_frame();
        assert_eq!(kb.state('a'), ButtonState::Held);
        assert!(kb.is_down('a'));

        kb.process_key_event(Key::Char('a'), false);
        assert!(kb.is_released('a'));
        kb.end_frame();
        assert_eq!(kb.state('a'), ButtonState::NotPressed);
        assert_eq!(kb.active().count(), 0);
    }
}
