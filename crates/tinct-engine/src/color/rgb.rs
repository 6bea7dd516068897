use std::fmt;
use std::str::FromStr;

use crate::error::{GradientError, Result};

/// Straight 8-bit sRGB color, the unit every stop and pixel is stored in.
///
/// Conversions from fractional channels truncate toward zero. This is what
/// makes `#000000 → #FFFFFF` at `t = 0.5` land on `#7F7F7F` and keeps preview
/// and export byte-identical.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Parses six hex digits, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GradientError::MalformedColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| GradientError::MalformedColor(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parses a `#RRGGBB` literal in const context.
    ///
    /// # Panics
    ///
    /// On anything but `#` plus six hex digits. Meant for `const` tables, where
    /// that panic is a compile error.
    pub const fn from_hex_literal(hex: &str) -> Self {
        let b = hex.as_bytes();
        assert!(b.len() == 7 && b[0] == b'#', "hex literal must look like #RRGGBB");
        Self::new(
            nibble(b[1]) << 4 | nibble(b[2]),
            nibble(b[3]) << 4 | nibble(b[4]),
            nibble(b[5]) << 4 | nibble(b[6]),
        )
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Builds a color from channels in `[0, 1]`, truncating `c * 255`.
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let ch = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Self::new(ch(r), ch(g), ch(b))
    }

    #[inline]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Per-channel `self + (other - self) * t`, truncated.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in color literal"),
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Parses `#RRGGBB` / `RRGGBB` into its three channels.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let c = Rgb::from_hex(hex)?;
    Ok((c.r, c.g, c.b))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// True only for `#` followed by exactly six hex digits.
///
/// Stricter than [`hex_to_rgb`], which also accepts a bare digit string; this
/// is the check applied to user-typed stop colors.
pub fn is_valid_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s.bytes().skip(1).all(|b| b.is_ascii_hexdigit())
}
