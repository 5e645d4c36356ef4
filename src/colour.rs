/// An RGBA colour, each channel in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub struct Colour {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel, 1 is fully opaque
    pub a: f32,
}

impl Colour {
    /// White
    pub const WHITE: Colour = Colour::rgb(1.0, 1.0, 1.0);
    /// Black
    pub const BLACK: Colour = Colour::rgb(0.0, 0.0, 0.0);
    /// Red
    pub const RED: Colour = Colour::rgb(1.0, 0.0, 0.0);
    /// Green
    pub const GREEN: Colour = Colour::rgb(0.0, 1.0, 0.0);
    /// Blue
    pub const BLUE: Colour = Colour::rgb(0.0, 0.0, 1.0);
    /// Yellow
    pub const YELLOW: Colour = Colour::rgb(1.0, 1.0, 0.0);
    /// Cyan
    pub const CYAN: Colour = Colour::rgb(0.0, 1.0, 1.0);
    /// Magenta
    pub const MAGENTA: Colour = Colour::rgb(1.0, 0.0, 1.0);
    /// Orange
    pub const ORANGE: Colour = Colour::rgb(1.0, 0.5, 0.0);
    /// Purple
    pub const PURPLE: Colour = Colour::rgb(0.5, 0.0, 1.0);
    /// Indigo
    pub const INDIGO: Colour = Colour::rgb(0.5, 0.0, 0.5);
    /// Fully transparent black
    pub const TRANSPARENT: Colour = Colour::new(0.0, 0.0, 0.0, 0.0);

    /// Create a colour from all four channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque colour
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// The same colour with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Channel-wise product, used for tinting
    pub fn multiply(self, other: Colour) -> Self {
        Self::new(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }

    /// Clamp every channel and convert to 8 bit
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [c(self.r), c(self.g), c(self.b), c(self.a)]
    }

    /// The `0x00RRGGBB` word window surfaces expect; alpha is dropped
    pub fn to_xrgb(self) -> u32 {
        let [r, g, b, _] = self.to_rgba8();
        u32::from_be_bytes([0, r, g, b])
    }

    /// Convert from 8 bit channels
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }
}

impl Default for Colour {
    fn default() -> Self {
        Colour::WHITE
    }
}

impl From<(f32, f32, f32, f32)> for Colour {
    fn from((r, g, b, a): (f32, f32, f32, f32)) -> Self {
        Colour::new(r, g, b, a)
    }
}

impl From<(f32, f32, f32)> for Colour {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Colour::rgb(r, g, b)
    }
}

impl From<[f32; 4]> for Colour {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Colour::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_bytes_with_clamping() {
        assert_eq!(Colour::ORANGE.to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(Colour::new(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
        assert_eq!(Colour::from_rgba8([0, 0, 255, 255]), Colour::BLUE);
        assert_eq!(Colour::ORANGE.with_alpha(0.2).to_xrgb(), 0x00ff8000);
    }

    #[test]
    fn tint_multiplies_channels() {
        let tinted = Colour::WHITE.multiply(Colour::RED.with_alpha(0.5));
        assert_eq!(tinted, Colour::new(1.0, 0.0, 0.0, 0.5));
    }
}
