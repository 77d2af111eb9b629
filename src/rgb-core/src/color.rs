//! Packed 32-bit RGBA color representation and manipulation.
//!
//! This module provides the [`Color`] type, an immutable RGBA value stored
//! in a single `u32` with the layout `0xRRGGBBAA`: red in the most
//! significant byte, alpha in the least significant one.
//!
//! # Supported Formats
//!
//! - Hex strings: `#D`, `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional)
//! - Channel bytes: `(0-255, 0-255, 0-255[, 0-255])`
//! - Raw packed `u32` values
//!
//! # Examples
//!
//! ```
//! use rgb_core::color::Color;
//!
//! // From hex string
//! let blue = Color::from_hex("#0D6EFD").unwrap();
//! assert_eq!(blue, Color::rgb(13, 110, 253));
//!
//! // Tints, shades and transparency
//! let tint = blue.lighten(0.5);
//! assert_eq!(tint.channels(), (134, 182, 254));
//! assert_eq!(blue.opacify(0.8).to_hex(), "#0D6EFDCC");
//! ```

use crate::error::ColorParseError;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// An immutable RGBA color packed into a `u32` as `0xRRGGBBAA`.
///
/// Every operation returns a new `Color`; channels always stay within
/// `0..=255` since they are stored as bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u32);

impl Default for Color {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::UpperHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

// ============================================================================
// Basic color constants
// ============================================================================

impl Color {
    /// Opaque red (#FF0000FF).
    pub const RED: Self = Self::from_u32(0xFF00_00FF);

    /// Opaque green (#00FF00FF).
    pub const GREEN: Self = Self::from_u32(0x00FF_00FF);

    /// Opaque blue (#0000FFFF).
    pub const BLUE: Self = Self::from_u32(0x0000_FFFF);

    /// Opaque yellow (#FFFF00FF).
    pub const YELLOW: Self = Self::from_u32(0xFFFF_00FF);

    /// Opaque cyan (#00FFFFFF).
    pub const CYAN: Self = Self::from_u32(0x00FF_FFFF);

    /// Opaque magenta (#FF00FFFF).
    pub const MAGENTA: Self = Self::from_u32(0xFF00_FFFF);

    /// Opaque black (#000000FF).
    pub const BLACK: Self = Self::from_u32(0x0000_00FF);

    /// Opaque silver (#C0C0C0FF).
    pub const SILVER: Self = Self::from_u32(0xC0C0_C0FF);

    /// Opaque gray (#808080FF).
    pub const GRAY: Self = Self::from_u32(0x8080_80FF);

    /// Opaque white (#FFFFFFFF).
    pub const WHITE: Self = Self::from_u32(0xFFFF_FFFF);

    /// Fully transparent black (#00000000).
    pub const NONE: Self = Self::from_u32(0x0000_0000);
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates a color from RGBA channel bytes.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Creates a fully opaque color from RGB channel bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from a packed `0xRRGGBBAA` value.
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// Returns the packed `0xRRGGBBAA` value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

// ============================================================================
// Hex parsing and formatting
// ============================================================================

impl Color {
    /// Parses a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#D` (one digit, expanded to `#DDDDDDFF`)
    /// - `#RGB` (shorthand, expanded to `#RRGGBBFF`)
    /// - `#RGBA` (shorthand with alpha, expanded to `#RRGGBBAA`)
    /// - `#RRGGBB` (opaque)
    /// - `#RRGGBBAA` (explicit alpha)
    ///
    /// The `#` prefix is optional and digits are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb_core::color::Color;
    ///
    /// assert_eq!(Color::from_hex("#ABC").unwrap().to_hex(), "#AABBCCFF");
    /// assert_eq!(Color::from_hex("0000ff80").unwrap(), Color::rgba(0, 0, 255, 128));
    /// assert!(Color::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let len = digits.len();
        if !matches!(len, 1 | 3 | 4 | 6 | 8) {
            return Err(ColorParseError::InvalidLength(len));
        }

        // A non-ASCII char occupies several bytes, so it is always visited
        // before the nibble slots run out.
        let mut nibbles = [0u8; 8];
        for (slot, ch) in nibbles.iter_mut().zip(digits.chars()) {
            *slot = ch.to_digit(16).ok_or(ColorParseError::InvalidDigit(ch))? as u8;
        }

        let short = |i: usize| nibbles[i] * 0x11;
        let long = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];

        let color = match len {
            1 => Self::rgb(short(0), short(0), short(0)),
            3 => Self::rgb(short(0), short(1), short(2)),
            4 => Self::rgba(short(0), short(1), short(2), short(3)),
            6 => Self::rgb(long(0), long(2), long(4)),
            _ => Self::rgba(long(0), long(2), long(4), long(6)),
        };
        Ok(color)
    }

    /// Converts the color to a `#RRGGBBAA` string with uppercase digits.
    ///
    /// The output always has 9 characters and parses back to the same color.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

// ============================================================================
// Component access
// ============================================================================

impl Color {
    /// Returns the red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns the green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Returns the blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns the alpha channel (0 = transparent, 255 = opaque).
    #[inline]
    pub const fn alpha(self) -> u8 {
        self.0 as u8
    }

    /// Returns the RGB channels.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Returns the RGB channels followed by alpha.
    #[inline]
    pub const fn channels_with_alpha(self) -> (u8, u8, u8, u8) {
        (self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Returns whether the color is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    /// Returns whether the color is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }
}

// ============================================================================
// Color manipulation
// ============================================================================

impl Color {
    /// Returns a lighter version of the color (a tint).
    ///
    /// `factor` is clamped to 0.0..=1.0, where 0.0 leaves the color unchanged
    /// and 1.0 produces white. Alpha is preserved.
    pub fn lighten(self, factor: f32) -> Self {
        let factor = clamp_factor("lighten", factor);
        let tint = |c: u8| {
            let c = f32::from(c);
            (c + (255.0 - c) * factor) as u8
        };
        let (r, g, b, a) = self.channels_with_alpha();
        Self::rgba(tint(r), tint(g), tint(b), a)
    }

    /// Returns a darker version of the color (a shade).
    ///
    /// `factor` is clamped to 0.0..=1.0, where 0.0 leaves the color unchanged
    /// and 1.0 produces black. Alpha is preserved.
    pub fn darken(self, factor: f32) -> Self {
        let factor = clamp_factor("darken", factor);
        let shade = |c: u8| (f32::from(c) * (1.0 - factor)) as u8;
        let (r, g, b, a) = self.channels_with_alpha();
        Self::rgba(shade(r), shade(g), shade(b), a)
    }

    /// Returns the color with its alpha set to `255 * opacity`.
    ///
    /// The product is truncated toward zero and then wrapped into a byte,
    /// so out-of-range factors are not clamped: `opacify(2.0)` gives an
    /// alpha of 254, not 255. Such factors are reported as a warning.
    pub fn opacify(self, opacity: f32) -> Self {
        if !(0.0..=1.0).contains(&opacity) {
            warn!(op = "opacify", opacity, "opacity factor out of range 0..=1");
        }
        let alpha = (255.0 * opacity) as i64 as u8;
        self.with_alpha(alpha)
    }

    /// Returns the same RGB color with the given alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | alpha as u32)
    }

    /// Returns the perceptual luminance, `R*0.299 + G*0.587 + B*0.114` truncated.
    #[inline]
    pub const fn luminance(self) -> u8 {
        let (r, g, b) = self.channels();
        ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
    }

    /// Returns a grayscale version of the color using luminance weighting.
    ///
    /// All three channels receive the same luminance value; alpha is preserved.
    pub const fn grayscale(self) -> Self {
        let y = self.luminance();
        Self::rgba(y, y, y, self.alpha())
    }
}

/// Clamps a tint/shade factor to 0.0..=1.0, warning when it had to.
fn clamp_factor(op: &'static str, factor: f32) -> f32 {
    if factor.is_nan() {
        warn!(op, factor, "color factor is NaN, using 0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&factor) {
        warn!(op, factor, "color factor out of range 0..=1, clamping");
    }
    factor.clamp(0.0, 1.0)
}

// ============================================================================
// Type conversions
// ============================================================================

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_u32()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}
