use crate::{input::ButtonState, math::Vec2};

/// A mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Wheel button
    Middle,
    /// Secondary button
    Right,
    /// Extra buttons, numbered by the platform
    Other(u16),
}

impl MouseButton {
    fn index(self) -> Option<usize> {
        match self {
            MouseButton::Left => Some(0),
            MouseButton::Middle => Some(1),
            MouseButton::Right => Some(2),
            MouseButton::Other(_) => None,
        }
    }
}

/// Where the mouse is and what its buttons are doing
#[derive(Debug, Default)]
pub struct MouseState {
    position: Vec2,
    wheel_delta: Vec2,
    buttons: [ButtonState; 3],
    inside: bool,
}

impl MouseState {
    /// Last known position, in world coordinates
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// How far the wheel scrolled this frame
    pub fn wheel_delta(&self) -> Vec2 {
        self.wheel_delta
    }

    /// Whether the pointer is over the window
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// The state of a button; only left, middle and right are tracked
    pub fn state(&self, button: MouseButton) -> ButtonState {
        button
            .index()
            .map(|i| self.buttons[i])
            .unwrap_or(ButtonState::NotPressed)
    }

    /// Whether a mouse button is currently being held down
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.state(button).is_down()
    }

    /// Whether a mouse button was just pressed
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.state(button) == ButtonState::Pressed
    }

    /// Whether a mouse button was just released
    pub fn is_released(&self, button: MouseButton) -> bool {
        self.state(button) == ButtonState::Released
    }

    pub(crate) fn process_mouse_moved_event(&mut self, position: Vec2) {
        self.position = position;
    }

    pub(crate) fn process_mouse_click_event(&mut self, button: MouseButton, pressed: bool) {
        if let Some(i) = button.index() {
            self.buttons[i].update(pressed);
        }
    }

    pub(crate) fn process_wheel_event(&mut self, delta: Vec2) {
        self.wheel_delta = delta;
    }

    pub(crate) fn process_presence(&mut self, inside: bool) {
        self.inside = inside;
    }

    /// Reset the mouse's state for this frame
    pub(crate) fn end_frame(&mut self) {
        for state in &mut self.buttons {
            state.settle();
        }
        self.wheel_delta = Vec2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_buttons_are_ignored() {
        let mut mouse = MouseState::default();
        mouse.process_mouse_click_event(MouseButton::Other(7), true);
        assert_eq!(mouse.state(MouseButton::Other(7)), ButtonState::NotPressed);
    }

    #[test]
    fn wheel_delta_only_lasts_a_frame() {
        let mut mouse = MouseState::default();
        mouse.process_wheel_event(Vec2::new(0, -3));
        mouse.process_mouse_click_event(MouseButton::Right, true);
        assert_eq!(mouse.wheel_delta(), Vec2::new(0, -3));
        assert!(mouse.is_pressed(MouseButton::Right));
        mouse.end_frame();
        assert_eq!(mouse.wheel_delta(), Vec2::zero());
        assert!(mouse.is_down(MouseButton::Right));
        assert!(!mouse.is_pressed(MouseButton::Right));
    }
}
