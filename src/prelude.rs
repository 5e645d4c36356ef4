pub use crate::{
    anim::Animation,
    colour::Colour,
    common::*,
    config::{Conf, Size},
    event::{App, Context, Event, EventData, Game},
    graphics::{Canvas, Graphics, Placement, Style, Texture},
    input::ButtonState,
    keyboard::prelude::*,
    math::prelude::*,
    mouse::MouseButton,
    resources::Resources,
    shapes::{Circle, Line, Rectangle, Triangle},
};
