//! Material tonal swatches: ten lightness steps from one base color.
//!
//! A swatch keeps the base color's hue and saturation and replaces its
//! lightness with a fixed ramp:
//!
//! ```text
//! tone       50    100   200   300   400   500   600   700   800   900
//! lightness  0.95  0.88  0.80  0.70  0.60  (*)   0.40  0.30  0.20  0.12
//! ```
//!
//! (*) Tone 500 is not the base color's own lightness. It is pulled into
//! [0.40, 0.59] so that the ramp stays monotonic for very light and very
//! dark inputs. The untouched input is kept separately as
//! [`Swatch::base`].

use std::ops::Index;

use tonekit_color::{Color, Hsl};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// One step of the Material tonal ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tone {
    T50,
    T100,
    T200,
    T300,
    T400,
    T500,
    T600,
    T700,
    T800,
    T900,
}

impl Tone {
    /// All tones, lightest first.
    pub const ALL: [Self; 10] = [
        Self::T50,
        Self::T100,
        Self::T200,
        Self::T300,
        Self::T400,
        Self::T500,
        Self::T600,
        Self::T700,
        Self::T800,
        Self::T900,
    ];

    /// The numeric tone index (50, 100, …, 900).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::T50 => 50,
            Self::T100 => 100,
            Self::T200 => 200,
            Self::T300 => 300,
            Self::T400 => 400,
            Self::T500 => 500,
            Self::T600 => 600,
            Self::T700 => 700,
            Self::T800 => 800,
            Self::T900 => 900,
        }
    }

    /// Fixed HSL lightness for this tone, or `None` for tone 500 whose
    /// lightness depends on the base color.
    #[must_use]
    pub const fn fixed_lightness(self) -> Option<f64> {
        match self {
            Self::T50 => Some(0.95),
            Self::T100 => Some(0.88),
            Self::T200 => Some(0.80),
            Self::T300 => Some(0.70),
            Self::T400 => Some(0.60),
            Self::T500 => None,
            Self::T600 => Some(0.40),
            Self::T700 => Some(0.30),
            Self::T800 => Some(0.20),
            Self::T900 => Some(0.12),
        }
    }

    /// Lightness of this tone in a swatch built from a base of
    /// `base_lightness`.
    #[must_use]
    pub fn lightness(self, base_lightness: f64) -> f64 {
        self.fixed_lightness()
            .unwrap_or_else(|| tone_500_lightness(base_lightness))
    }

    const fn position(self) -> usize {
        self as usize
    }
}

impl TryFrom<u16> for Tone {
    type Error = Error;

    fn try_from(tone: u16) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.value() == tone)
            .ok_or(Error::InvalidTone { tone })
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Lightness for tone 500, forced into a band that keeps the ramp ordered.
///
/// | base lightness     | tone 500            |
/// |--------------------|---------------------|
/// | > 0.85             | 0.45                |
/// | < 0.15             | 0.55                |
/// | (0.70, 0.85]       | 0.50                |
/// | [0.15, 0.30)       | 0.50                |
/// | [0.30, 0.70]       | base, clamped to [0.40, 0.59] |
#[must_use]
pub fn tone_500_lightness(base_lightness: f64) -> f64 {
    if base_lightness > 0.85 {
        0.45
    } else if base_lightness < 0.15 {
        0.55
    } else if base_lightness > 0.70 || base_lightness < 0.30 {
        0.50
    } else {
        base_lightness.clamp(0.40, 0.59)
    }
}

// ---------------------------------------------------------------------------
// Swatch
// ---------------------------------------------------------------------------

/// Ten tones derived from one base color, plus the base itself.
///
/// With the `serde` feature only `base` is read back; the tones are always
/// regenerated from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SwatchBase")
)]
pub struct Swatch {
    base: Color,
    tones: [Color; 10],
}

impl Swatch {
    /// Build the swatch for `base`.
    #[must_use]
    pub fn generate(base: Color) -> Self {
        let hsl = Hsl::from_color(base);
        let tones = Tone::ALL.map(|tone| {
            hsl.with_lightness(tone.lightness(hsl.lightness()))
                .to_color()
        });
        Self { base, tones }
    }

    /// The original input color, unchanged by the tone-500 policy.
    #[must_use]
    pub const fn base(&self) -> Color {
        self.base
    }

    /// The color at `tone`.
    #[must_use]
    pub const fn get(&self, tone: Tone) -> Color {
        self.tones[tone.position()]
    }

    /// The color at a numeric tone index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTone`] if `tone` is not one of 50, 100, …, 900.
    pub fn shade(&self, tone: u16) -> Result<Color> {
        Tone::try_from(tone).map(|t| self.get(t))
    }

    /// Iterate over `(tone, color)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Tone, Color)> + '_ {
        Tone::ALL.into_iter().zip(self.tones.iter().copied())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SwatchBase {
    base: Color,
}

#[cfg(feature = "serde")]
impl From<SwatchBase> for Swatch {
    fn from(s: SwatchBase) -> Self {
        Self::generate(s.base)
    }
}

impl Index<Tone> for Swatch {
    type Output = Color;

    fn index(&self, tone: Tone) -> &Color {
        &self.tones[tone.position()]
    }
}

/// Build the ten-tone swatch for `color`.
#[must_use]
pub fn generate_swatch(color: Color) -> Swatch {
    Swatch::generate(color)
}

/// The color at numeric tone index `tone` in `color`'s swatch.
///
/// # Errors
///
/// Returns [`Error::InvalidTone`] if `tone` is not one of 50, 100, …, 900.
pub fn get_shade(color: Color, tone: u16) -> Result<Color> {
    let tone = Tone::try_from(tone)?;
    Ok(Swatch::generate(color).get(tone))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
