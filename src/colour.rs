use serde::{Deserialize, Serialize};

/// A fill or stroke colour in one of the PDF device colour spaces. All
/// components range from 0.0 to 1.0.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Colour {
    RGB { r: f32, g: f32, b: f32 },
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    Grey { g: f32 },
}

impl Colour {
    /// An RGB colour from 8-bit components
    pub fn rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string, as colours usually arrive
    /// from templates and configuration files
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Colour::rgb_bytes(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// Frequently used colours
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.85 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(Colour::from_hex("#ff0000"), Some(colours::RED));
        assert_eq!(Colour::from_hex("0000ff"), Some(colours::BLUE));
        assert_eq!(Colour::from_hex("#fff"), None);
        assert_eq!(Colour::from_hex("#gg0000"), None);
    }
}
