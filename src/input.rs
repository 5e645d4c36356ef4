use crate::{
    event::{Event, EventData},
    keyboard::KeyboardState,
    math::Vec2,
    mouse::MouseState,
};

/// The current state of a button
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub enum ButtonState {
    /// The button was activated this frame
    Pressed,
    /// The button is active but was not activated this frame
    Held,
    /// The button was released this frame
    Released,
    /// The button is not active but was not released this frame
    #[default]
    NotPressed,
}

impl ButtonState {
    /// Feed in whether the button is down right now
    pub fn update(&mut self, down: bool) {
        *self = match (self.is_down(), down) {
            (false, false) => ButtonState::NotPressed,
            (false, true) => ButtonState::Pressed,
            (true, false) => ButtonState::Released,
            (true, true) => ButtonState::Held,
        };
    }

    /// Determine if the button is either Pressed or Held
    pub fn is_down(&self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Held)
    }

    /// Move on to the next frame: fresh presses become holds, fresh releases become idle
    pub fn settle(&mut self) {
        *self = match *self {
            ButtonState::Pressed => ButtonState::Held,
            ButtonState::Released => ButtonState::NotPressed,
            other => other,
        };
    }
}

/// Keyboard, mouse and window state, kept up to date from incoming events
#[derive(Debug, Default)]
pub struct InputState {
    keyboard: KeyboardState,
    mouse: MouseState,
    window_size: Vec2,
    focused: bool,
}

impl InputState {
    /// Start with a known window size
    pub fn new(window_size: Vec2) -> Self {
        Self {
            window_size,
            focused: true,
            ..Self::default()
        }
    }

    /// The keyboard
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The mouse
    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    /// Current window size, in pixels
    pub fn window_size(&self) -> Vec2 {
        self.window_size
    }

    /// Whether the window has keyboard focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Update from one event
    pub fn process_event(&mut self, event: &Event) {
        match &event.data {
            EventData::Key { key, pressed } => self.keyboard.process_key_event(*key, *pressed),
            EventData::MouseMoved { position } => self.mouse.process_mouse_moved_event(*position),
            EventData::MouseButton { button, pressed } => {
                self.mouse.process_mouse_click_event(*button, *pressed)
            }
            EventData::MouseWheel { delta } => self.mouse.process_wheel_event(*delta),
            EventData::MouseEntered => self.mouse.process_presence(true),
            EventData::MouseLeft => self.mouse.process_presence(false),
            EventData::FocusChange { focused } => self.focused = *focused,
            EventData::Resized { size } => self.window_size = *size,
            EventData::Text { .. } => {}
        }
    }

    /// Reset the per-frame parts of the state
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
        self.mouse.end_frame();
    }
}
