#![warn(missing_docs)]
#![doc = include_str!("../readme.md")]

/// Sprite-strip animations
pub mod anim;
/// RGBA colours
pub mod colour;
/// Colour constants and transform builders, everything a small game reaches for
pub mod common;
/// Global pickitup configuration parameters
pub mod config;
/// Demo games
pub mod demos;
mod error;
/// Input events, the [event::Game] trait and the runtime that drives it
pub mod event;
/// Recording draw calls and turning them into pixels
pub mod graphics;
/// Running a game without a window
pub mod headless;
/// Button states and the input state fed by events
pub mod input;
/// Stuff for working with a keyboard.
pub mod keyboard;
/// Logger setup
pub mod logging;
/// Contains functions for doing various math tasks, including working with vectors
pub mod math;
/// Stuff for working with a mouse
pub mod mouse;
/// Useful structs to have imported
pub mod prelude;
/// Named sprites and animations
pub mod resources;
/// Creating new game projects
pub mod scaffold;
/// Rectangles, circles, lines and triangles
pub mod shapes;
#[cfg(feature = "window")]
/// Running a game in a window
pub mod window;

pub use error::{Error, Result};

/// Global configuration struct, pass to [main] (e.g. `pickitup::main!(MyGame, Conf { .. })`)
pub use config::Conf;

/// Game callbacks return [anyhow::Result]
pub use anyhow;
/// The image crate is used for loading and saving images from various formats
pub use image;
/// The nalgebra crate is used for vectors and matracies, have fun with math!
pub use nalgebra;
/// The rand crate is used to generate random numbers
pub use rand;

/// Inserts a main function that sets up logging, opens a window and runs the given [event::Game]
#[cfg(feature = "window")]
#[macro_export]
macro_rules! main {
    ($game:ty) => {
        $crate::main!($game, $crate::Conf::default());
    };
    ($game:ty, $conf:expr) => {
        fn main() -> $crate::anyhow::Result<()> {
            let conf: $crate::Conf = $conf;
            $crate::logging::init_logging(conf.log_filter.as_deref());
            $crate::window::run::<$game>(conf)
        }
    };
}
