// SPDX-License-Identifier: MIT
//
// HSL: hue, saturation, lightness over sRGB.
//
// Conversions:
//
//   Color (packed ARGB) → normalized RGB → HSL   (max/min/diff derivation)
//   HSL → six 60° sectors → RGB + m → round to 8-bit, clamp
//
// The alpha channel is carried through untouched so that
// `Hsl::from_color(c).to_color()` reproduces `c` completely.

// r, g, b, h, s, l, c, x, m are the names these formulas are written in.
#![allow(clippy::many_single_char_names)]

use crate::color::{Color, channel_from_unit};

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// An immutable hue/saturation/lightness color.
///
/// - `hue`: degrees in [0, 360)
/// - `saturation`: [0, 1]
/// - `lightness`: [0, 1]
///
/// Out-of-range inputs are normalized on construction: hue wraps around the
/// circle, saturation and lightness saturate at the bounds.
///
/// # Examples
///
/// ```
/// use tonekit_color::{Color, Hsl};
///
/// let blue = Color::from_argb(0xFF21_96F3);
/// let hsl = Hsl::from_color(blue);
/// assert_eq!(hsl.to_color(), blue);
///
/// let pale = hsl.with_lightness(0.95).to_color();
/// assert!(pale.relative_luminance() > blue.relative_luminance());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "HslFields")
)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: u8,
}

impl Hsl {
    /// Create an opaque HSL color.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::new_with_alpha(0xFF, hue, saturation, lightness)
    }

    /// Create an HSL color with an explicit 8-bit alpha.
    #[must_use]
    pub fn new_with_alpha(alpha: u8, hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
            alpha,
        }
    }

    /// Decompose a color into HSL.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let (r, g, b) = color.to_srgb();
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self {
            hue: h,
            saturation: s,
            lightness: l,
            alpha: color.alpha(),
        }
    }

    /// Recompose into a packed color.
    #[must_use]
    pub fn to_color(self) -> Color {
        let (r, g, b) = hsl_to_rgb(self.hue, self.saturation, self.lightness);
        Color::from_components(self.alpha, r, g, b)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn hue(self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f64 {
        self.saturation
    }

    #[inline]
    #[must_use]
    pub const fn lightness(self) -> f64 {
        self.lightness
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        self.alpha
    }

    // ─── Transforms ──────────────────────────────────────────────────────

    /// Return a copy with a new hue (wrapped into [0, 360)).
    #[must_use]
    pub fn with_hue(self, hue: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            ..self
        }
    }

    /// Return a copy with a new saturation (clamped to [0, 1]).
    #[must_use]
    pub fn with_saturation(self, saturation: f64) -> Self {
        Self {
            saturation: saturation.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Return a copy with a new lightness (clamped to [0, 1]).
    #[must_use]
    pub fn with_lightness(self, lightness: f64) -> Self {
        Self {
            lightness: lightness.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Deserialized fields, normalized through [`Hsl::new_with_alpha`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HslFields {
    hue: f64,
    saturation: f64,
    lightness: f64,
    #[serde(default = "opaque")]
    alpha: u8,
}

#[cfg(feature = "serde")]
const fn opaque() -> u8 {
    0xFF
}

#[cfg(feature = "serde")]
impl From<HslFields> for Hsl {
    fn from(f: HslFields) -> Self {
        Self::new_with_alpha(f.alpha, f.hue, f.saturation, f.lightness)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────

/// Wrap a hue angle into [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Normalized RGB (0.0–1.0) → (hue degrees, saturation, lightness).
///
/// Ties between channels resolve red first, then green, then blue.
#[allow(clippy::float_cmp)]
fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;
    let l = (max + min) / 2.0;

    if diff == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        diff / (2.0 - max - min)
    } else {
        diff / (max + min)
    };

    let h = if max == r {
        (g - b) / diff + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / diff + 2.0
    } else {
        (r - g) / diff + 4.0
    } / 6.0;

    (normalize_hue(h * 360.0), s, l)
}

/// (hue degrees, saturation, lightness) → 8-bit RGB.
#[allow(clippy::float_cmp)]
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = channel_from_unit(l);
        return (v, v, v);
    }

    let h = normalize_hue(h);
    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        channel_from_unit(r + m),
        channel_from_unit(g + m),
        channel_from_unit(b + m),
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── RGB → HSL ────────────────────────────────────────────────────────

    #[test]
    fn primaries_have_expected_hues() {
        let cases = [
            (Color::rgb8(255, 0, 0), 0.0),
            (Color::rgb8(255, 255, 0), 60.0),
            (Color::rgb8(0, 255, 0), 120.0),
            (Color::rgb8(0, 255, 255), 180.0),
            (Color::rgb8(0, 0, 255), 240.0),
            (Color::rgb8(255, 0, 255), 300.0),
        ];
        for (color, hue) in cases {
            let hsl = Hsl::from_color(color);
            assert!(approx_eq(hsl.hue(), hue, 1e-9), "{color}: hue {}", hsl.hue());
            assert!(approx_eq(hsl.saturation(), 1.0, 1e-9));
            assert!(approx_eq(hsl.lightness(), 0.5, 1e-9));
        }
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let hsl = Hsl::from_color(Color::rgb8(v, v, v));
            assert_eq!(hsl.hue(), 0.0);
            assert_eq!(hsl.saturation(), 0.0);
            assert!(approx_eq(hsl.lightness(), f64::from(v) / 255.0, 1e-12));
        }
    }

    #[test]
    fn light_colors_use_upper_saturation_branch() {
        // l > 0.5 → s = diff / (2 - max - min)
        let hsl = Hsl::from_color(Color::rgb8(255, 204, 204));
        let (max, min) = (1.0, 0.8);
        assert!(approx_eq(hsl.saturation(), (max - min) / (2.0 - max - min), 1e-9));
    }

    #[test]
    fn material_blue_decomposition() {
        let hsl = Hsl::from_color(Color::from_argb(0xFF21_96F3));
        assert!(approx_eq(hsl.hue(), 206.57, 0.01), "hue {}", hsl.hue());
        assert!(approx_eq(hsl.saturation(), 0.8974, 0.001));
        assert!(approx_eq(hsl.lightness(), 0.5412, 0.001));
    }

    // ── HSL → RGB ────────────────────────────────────────────────────────

    #[test]
    fn zero_saturation_is_gray_from_lightness() {
        assert_eq!(Hsl::new(123.0, 0.0, 0.15).to_color(), Color::rgb8(38, 38, 38));
        assert_eq!(Hsl::new(0.0, 0.0, 0.85).to_color(), Color::rgb8(217, 217, 217));
        assert_eq!(Hsl::new(0.0, 0.0, 1.0).to_color(), Color::WHITE);
        assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_color(), Color::BLACK);
    }

    #[test]
    fn sector_boundaries() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_color(), Color::rgb8(255, 0, 0));
        assert_eq!(Hsl::new(60.0, 1.0, 0.5).to_color(), Color::rgb8(255, 255, 0));
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_color(), Color::rgb8(0, 255, 0));
        assert_eq!(Hsl::new(180.0, 1.0, 0.5).to_color(), Color::rgb8(0, 255, 255));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_color(), Color::rgb8(0, 0, 255));
        assert_eq!(Hsl::new(300.0, 1.0, 0.5).to_color(), Color::rgb8(255, 0, 255));
    }

    #[test]
    fn alpha_is_preserved() {
        let c = Color::from_argb(0x4021_96F3);
        let hsl = Hsl::from_color(c);
        assert_eq!(hsl.alpha(), 0x40);
        assert_eq!(hsl.to_color(), c);
        assert_eq!(hsl.with_lightness(0.2).to_color().alpha(), 0x40);
    }

    // ── Transforms ───────────────────────────────────────────────────────

    #[test]
    fn with_hue_wraps() {
        let hsl = Hsl::new(10.0, 0.5, 0.5);
        assert!(approx_eq(hsl.with_hue(370.0).hue(), 10.0, 1e-9));
        assert!(approx_eq(hsl.with_hue(-30.0).hue(), 330.0, 1e-9));
        assert!(approx_eq(hsl.with_hue(360.0).hue(), 0.0, 1e-9));
    }

    #[test]
    fn with_fields_clamp_and_leave_original() {
        let hsl = Hsl::new(200.0, 0.5, 0.5);
        let lighter = hsl.with_lightness(1.4);
        let duller = hsl.with_saturation(-0.3);
        assert_eq!(lighter.lightness(), 1.0);
        assert_eq!(duller.saturation(), 0.0);
        assert_eq!(hsl.lightness(), 0.5);
        assert_eq!(hsl.saturation(), 0.5);
    }

    #[test]
    fn normalize_hue_range() {
        for h in [-720.0, -1e-18, 0.0, 359.999, 360.0, 725.0] {
            let n = normalize_hue(h);
            assert!((0.0..360.0).contains(&n), "{h} → {n}");
        }
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn roundtrip_samples() {
        let samples = [
            0xFF21_96F3u32,
            0xFFF4_4336,
            0xFF4C_AF50,
            0xFFFF_EB3B,
            0xFF9C_27B0,
            0xFF01_0203,
            0xFFFE_FDFC,
        ];
        for argb in samples {
            let c = Color::from_argb(argb);
            let back = Hsl::from_color(c).to_color();
            let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
            assert!(
                close(c.red(), back.red())
                    && close(c.green(), back.green())
                    && close(c.blue(), back.blue()),
                "roundtrip {c:?} → {back:?}"
            );
            assert_eq!(c.alpha(), back.alpha());
        }
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_normalizes_out_of_range_fields() {
        let hsl: Hsl = serde_json::from_str(
            r#"{"hue":720.5,"saturation":5.0,"lightness":-3.0,"alpha":128}"#,
        )
        .unwrap();
        assert!(approx_eq(hsl.hue(), 0.5, 1e-9), "hue {}", hsl.hue());
        assert_eq!(hsl.saturation(), 1.0);
        assert_eq!(hsl.lightness(), 0.0);
        assert_eq!(hsl.alpha(), 128);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_defaults_to_opaque() {
        let hsl: Hsl =
            serde_json::from_str(r#"{"hue":-90.0,"saturation":0.5,"lightness":0.5}"#).unwrap();
        assert!(approx_eq(hsl.hue(), 270.0, 1e-9));
        assert_eq!(hsl.alpha(), 0xFF);

        let json = serde_json::to_string(&hsl).unwrap();
        assert_eq!(serde_json::from_str::<Hsl>(&json).unwrap(), hsl);
    }
}
