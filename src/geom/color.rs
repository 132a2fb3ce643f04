//! Hex color strings to normalized RGB.

/// RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels, each divided by 255.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
}

/// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
///
/// Anything else resolves to black; malformed colors are never an error.
pub fn hex_to_rgb(text: &str) -> Rgb {
    parse_hex(text)
        .map(|(r, g, b)| Rgb::from_bytes(r, g, b))
        .unwrap_or(Rgb::BLACK)
}

/// Parse into 8-bit channels, `None` when malformed.
pub fn parse_hex(text: &str) -> Option<(u8, u8, u8)> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
