// SPDX-License-Identifier: MIT
//
// tonekit color value: a packed 32-bit ARGB integer.
//
// Every channel is derived by shifting and masking the same packed value,
// so a Color can never hold a channel outside 0–255. Colors are immutable:
// every "with"/blend operation returns a fresh value.
//
// Relative luminance follows the W3C (WCAG 2.0) definition, including its
// historical 0.03928 linearization threshold. Luminance is only used for
// contrast decisions; hue and lightness math lives in the HSL module.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable sRGB color packed as `0xAARRGGBB`.
///
/// # Examples
///
/// ```
/// use tonekit_color::Color;
///
/// let blue = Color::from_argb(0xFF21_96F3);
/// assert_eq!(blue.red(), 0x21);
/// assert_eq!(blue.green(), 0x96);
/// assert_eq!(blue.blue(), 0xF3);
///
/// // Six-digit hex defaults to an opaque alpha.
/// assert_eq!(Color::hex("#2196F3"), Some(blue));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    argb: u32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from a packed `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self { argb }
    }

    /// Create a color from its four 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn from_components(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            argb: (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32,
        }
    }

    /// Create an opaque color from 8-bit red, green, and blue channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_components(0xFF, r, g, b)
    }

    /// Create a color from a hex string.
    ///
    /// Supports `RRGGBB` (alpha defaults to `FF`) and `AARRGGBB`, with an
    /// optional `#` or `0x` prefix.
    ///
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::from_argb(0xFF00_0000);

    /// Opaque white.
    pub const WHITE: Self = Self::from_argb(0xFFFF_FFFF);

    // ─── Channels ────────────────────────────────────────────────────────

    /// The packed `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.argb
    }

    /// Alpha channel, 0–255.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.argb >> 24) as u8
    }

    /// Red channel, 0–255.
    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.argb >> 16 & 0xFF) as u8
    }

    /// Green channel, 0–255.
    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.argb >> 8 & 0xFF) as u8
    }

    /// Blue channel, 0–255.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.argb & 0xFF) as u8
    }

    /// Return a copy with the given alpha channel.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::from_components(alpha, self.red(), self.green(), self.blue())
    }

    /// Whether the alpha channel is fully opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Normalized red, green, blue in [0.0, 1.0].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.red()) / 255.0,
            f64::from(self.green()) / 255.0,
            f64::from(self.blue()) / 255.0,
        )
    }

    // ─── Luminance ───────────────────────────────────────────────────────

    /// W3C relative luminance in [0.0, 1.0].
    ///
    /// Each channel is linearized, then weighted:
    ///   L = 0.2126 * R + 0.7152 * G + 0.0722 * B
    ///
    /// Alpha is ignored.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let (r, g, b) = self.to_srgb();
        let r_lin = srgb_to_linear(r);
        let g_lin = srgb_to_linear(g);
        let b_lin = srgb_to_linear(b);
        0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
    }

    // ─── Alpha Blending ──────────────────────────────────────────────────

    /// Composite this color at `opacity` over `dst`.
    ///
    /// Plain linear compositing per 8-bit channel:
    ///   out = round(src * a + dst * (1 - a))
    ///
    /// The result is opaque. `opacity` is clamped to [0.0, 1.0]; the
    /// source's own alpha channel is not consulted.
    #[must_use]
    pub fn blend_over(self, dst: Self, opacity: f64) -> Self {
        let a = opacity.clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mix = |src: u8, dst: u8| {
            let v = f64::from(src).mul_add(a, f64::from(dst) * (1.0 - a));
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::rgb8(
            mix(self.red(), dst.red()),
            mix(self.green(), dst.green()),
            mix(self.blue(), dst.blue()),
        )
    }

    // ─── Formatting ──────────────────────────────────────────────────────

    /// Hex string: `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = (self.red(), self.green(), self.blue());
        if self.is_opaque() {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{:02X}{r:02X}{g:02X}{b:02X}", self.alpha())
        }
    }

    /// The packed value as a `0xAARRGGBB` literal.
    #[must_use]
    pub fn to_argb_hex(self) -> String {
        format!("0x{:08X}", self.argb)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:#010X})", self.argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Color {
    /// Default is opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.argb
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Error returned when a string is not a valid hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {input:?}: expected RRGGBB or AARRGGBB")]
pub struct ParseColorError {
    input: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).ok_or_else(|| ParseColorError {
            input: s.to_owned(),
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        format!("#{:08X}", color.argb)
    }
}

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    let digits = match s.len() {
        6 | 8 => s.as_bytes(),
        _ => return None,
    };

    let mut value: u32 = 0;
    for &c in digits {
        value = value << 4 | u32::from(parse_hex_digit(c)?);
    }

    if digits.len() == 6 {
        value |= 0xFF00_0000;
    }
    Some(Color::from_argb(value))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Channel Math ────────────────────────────────────────────────────────────

/// Convert a single sRGB component to linear light (W3C definition).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a unit-range component to an 8-bit channel: `round(v * 255)`,
/// saturating at 0 and 255.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn channel_from_unit(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Channels ─────────────────────────────────────────────────────────

    #[test]
    fn channels_unpack_from_packed_value() {
        let c = Color::from_argb(0x80_12_34_56);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0x12);
        assert_eq!(c.green(), 0x34);
        assert_eq!(c.blue(), 0x56);
        assert_eq!(c.value(), 0x8012_3456);
    }

    #[test]
    fn from_components_packs_channels() {
        let c = Color::from_components(0xFF, 0x21, 0x96, 0xF3);
        assert_eq!(c, Color::from_argb(0xFF21_96F3));
    }

    #[test]
    fn rgb8_is_opaque() {
        assert!(Color::rgb8(1, 2, 3).is_opaque());
        assert_eq!(Color::rgb8(1, 2, 3).value(), 0xFF01_0203);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::from_argb(0xFF21_96F3).with_alpha(0x0D);
        assert_eq!(c.value(), 0x0D21_96F3);
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_rrggbb_defaults_to_opaque() {
        assert_eq!(Color::hex("2196F3"), Some(Color::from_argb(0xFF21_96F3)));
        assert_eq!(Color::hex("#2196f3"), Some(Color::from_argb(0xFF21_96F3)));
    }

    #[test]
    fn hex_aarrggbb_keeps_alpha() {
        assert_eq!(Color::hex("0x80FF0000"), Some(Color::from_argb(0x80FF_0000)));
        assert_eq!(Color::hex("#00000000"), Some(Color::from_argb(0)));
    }

    #[test]
    fn hex_invalid() {
        assert!(Color::hex("").is_none());
        assert!(Color::hex("#fff").is_none());
        assert!(Color::hex("12345").is_none());
        assert!(Color::hex("gggggg").is_none());
        assert!(Color::hex("+12345").is_none());
    }

    #[test]
    fn from_str_reports_input() {
        let err = "nope".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("\"nope\""));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::from_argb(0xFF21_96F3).to_hex(), "#2196F3");
        assert_eq!(Color::from_argb(0x8021_96F3).to_hex(), "#802196F3");
        assert_eq!(Color::from_argb(0xFF21_96F3).to_argb_hex(), "0xFF2196F3");
        assert_eq!(format!("{:?}", Color::BLACK), "Color(0xFF000000)");
    }

    // ── Luminance ────────────────────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(Color::BLACK.relative_luminance(), 0.0, 1e-12));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(Color::WHITE.relative_luminance(), 1.0, 1e-9));
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(Color::rgb8(255, 0, 0).relative_luminance(), 0.2126, 1e-9));
        assert!(approx_eq(Color::rgb8(0, 255, 0).relative_luminance(), 0.7152, 1e-9));
        assert!(approx_eq(Color::rgb8(0, 0, 255).relative_luminance(), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_ignores_alpha() {
        let a = Color::from_argb(0xFF80_8080);
        let b = Color::from_argb(0x0080_8080);
        assert!(approx_eq(a.relative_luminance(), b.relative_luminance(), 1e-12));
    }

    #[test]
    fn linearization_threshold() {
        // Below the W3C threshold the curve is linear.
        assert!(approx_eq(srgb_to_linear(0.039_28), 0.039_28 / 12.92, 1e-12));
        assert!(srgb_to_linear(0.5) > 0.2 && srgb_to_linear(0.5) < 0.22);
    }

    // ── Blending ─────────────────────────────────────────────────────────

    #[test]
    fn blend_five_percent_over_black() {
        let src = Color::rgb8(200, 100, 0);
        let out = src.blend_over(Color::BLACK, 0.05);
        assert_eq!(out, Color::rgb8(10, 5, 0));
    }

    #[test]
    fn blend_five_percent_over_white() {
        let src = Color::rgb8(0, 0, 0);
        let out = src.blend_over(Color::WHITE, 0.05);
        // 255 * 0.95 = 242.25
        assert_eq!(out, Color::rgb8(242, 242, 242));
    }

    #[test]
    fn blend_extremes() {
        let src = Color::rgb8(12, 34, 56);
        assert_eq!(src.blend_over(Color::WHITE, 1.0), src);
        assert_eq!(src.blend_over(Color::WHITE, 0.0), Color::WHITE);
        assert_eq!(src.blend_over(Color::WHITE, 7.0), src);
    }

    #[test]
    fn channel_from_unit_saturates() {
        assert_eq!(channel_from_unit(-0.2), 0);
        assert_eq!(channel_from_unit(1.3), 255);
        assert_eq!(channel_from_unit(0.5), 128);
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_argb_hex_string() {
        let c = Color::from_argb(0xFF21_96F3);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#FF2196F3\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Color>("\"#zz\"").is_err());
    }
}
