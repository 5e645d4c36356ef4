use std::{fmt, str::FromStr};

use crate::{colour::Colour, math::Vec2, Error};

/// Global pickitup configuration, passed to [crate::window::run] or [crate::event::App::new]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Conf {
    /// Window title
    pub title: String,
    /// Initial window size, in pixels
    pub size: Size,
    /// Milliseconds between two calls to `update`
    pub update_rate_ms: f64,
    /// Colour every frame is cleared to before `draw` runs
    pub clear_colour: Colour,
    /// `env_logger` filter, falls back to `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            title: "pickitup".to_string(),
            size: Size::new(800, 600),
            update_rate_ms: 1000.0 / 60.0,
            clear_colour: Colour::BLACK,
            log_filter: None,
        }
    }
}

/// A width and height in pixels, written `WxH` (e.g. `800x600`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// A size of `width` by `height` pixels
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The size as a vector
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| Error::InvalidSize {
            input: s.to_string(),
            reason,
        };
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid("expected WIDTHxHEIGHT"))?;
        let width: u32 = w.trim().parse().map_err(|_| invalid("width is not a number"))?;
        let height: u32 = h.trim().parse().map_err(|_| invalid("height is not a number"))?;
        if width == 0 || height == 0 {
            return Err(invalid("both dimensions must be non-zero"));
        }
        Ok(Size { width, height })
    }
}

impl From<Size> for Vec2 {
    fn from(size: Size) -> Self {
        size.as_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let conf = Conf::default();
        assert_eq!(conf.title, "pickitup");
        assert_eq!(conf.size, Size::new(800, 600));
        assert!((conf.update_rate_ms - 16.666_666).abs() < 1e-3);
        assert_eq!(conf.clear_colour, Colour::BLACK);
        assert_eq!(conf.log_filter, None);
    }

    #[test]
    fn sizes_parse_from_w_x_h() {
        assert_eq!("1024x768".parse::<Size>().unwrap(), Size::new(1024, 768));
        assert_eq!(" 640X480 ".parse::<Size>().unwrap(), Size::new(640, 480));
        assert_eq!(Size::new(3, 4).to_string(), "3x4");
    }

    #[test]
    fn bad_sizes_say_what_is_wrong() {
        for (input, reason) in [
            ("800", "expected WIDTHxHEIGHT"),
            ("wx600", "width is not a number"),
            ("800x-1", "height is not a number"),
            ("0x600", "both dimensions must be non-zero"),
        ] {
            match input.parse::<Size>() {
                Err(Error::InvalidSize { reason: got, .. }) => assert_eq!(got, reason, "{input}"),
                other => panic!("{input}: unexpected {other:?}"),
            }
        }
    }
}
