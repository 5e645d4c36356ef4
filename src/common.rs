//! Everything a small game script reaches for: colour constants and transform builders.
//!
//! ```
//! use pickitup::common::*;
//!
//! let spin = matmul(rotate(45), scale(0.5, 0.5));
//! assert_eq!(spin, rotate(45) * scale(0.5, 0.5));
//! assert_eq!(WHITE.to_rgba8(), [255, 255, 255, 255]);
//! ```

use crate::{
    colour::Colour,
    math::{IntoFl, Transform},
};

/// White
pub const WHITE: Colour = Colour::WHITE;
/// Black
pub const BLACK: Colour = Colour::BLACK;
/// Red
pub const RED: Colour = Colour::RED;
/// Green
pub const GREEN: Colour = Colour::GREEN;
/// Blue
pub const BLUE: Colour = Colour::BLUE;
/// Yellow
pub const YELLOW: Colour = Colour::YELLOW;
/// Cyan
pub const CYAN: Colour = Colour::CYAN;
/// Magenta
pub const MAGENTA: Colour = Colour::MAGENTA;
/// Orange
pub const ORANGE: Colour = Colour::ORANGE;
/// Purple
pub const PURPLE: Colour = Colour::PURPLE;
/// Indigo
pub const INDIGO: Colour = Colour::INDIGO;

/// Rotation by `degrees`, clockwise on screen
pub fn rotate(degrees: impl IntoFl) -> Transform {
    Transform::rotate(degrees)
}

/// Scale along each axis
pub fn scale(x: impl IntoFl, y: impl IntoFl) -> Transform {
    Transform::scale(x, y)
}

/// Move by `(x, y)`
pub fn translate(x: impl IntoFl, y: impl IntoFl) -> Transform {
    Transform::translate((x.into_fl(), y.into_fl()))
}

/// Compose two transforms, `b` is applied first
pub fn matmul(a: Transform, b: Transform) -> Transform {
    a * b
}
