//! Color harmonies: related palettes derived from one base color.
//!
//! - **Monochromatic**: one hue, lightness eased from 0.15 to 0.85
//! - **Analogous**: neighboring hues spread symmetrically around the base
//! - **Complementary**: the base plus its opposite hue, pushed for contrast
//!
//! Hue arithmetic wraps around the circle. Lightness saturates at [0, 1].

use std::fmt;

use tonekit_color::{Color, Hsl};

use crate::error::{Error, Result};

/// Default number of monochromatic samples.
pub const DEFAULT_MONOCHROMATIC_STEPS: usize = 5;
/// Default number of analogous samples.
pub const DEFAULT_ANALOGOUS_STEPS: usize = 3;
/// Default hue spacing between analogous samples, in degrees.
pub const DEFAULT_ANALOGOUS_ANGLE: f64 = 30.0;

const MONOCHROMATIC_MIN_STEPS: usize = 2;
const ANALOGOUS_MIN_STEPS: usize = 1;

// ---------------------------------------------------------------------------
// HarmonyKind
// ---------------------------------------------------------------------------

/// The rule used to derive related colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HarmonyKind {
    /// Same hue and saturation, varying lightness.
    Monochromatic,
    /// Adjacent hues at a fixed angle.
    #[default]
    Analogous,
    /// Base and its 180° opposite.
    Complementary,
}

impl HarmonyKind {
    /// All harmony kinds.
    pub const ALL: [Self; 3] = [Self::Monochromatic, Self::Analogous, Self::Complementary];

    /// Lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
        }
    }

    /// Parse a kind from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// HarmonyConfig
// ---------------------------------------------------------------------------

/// Which harmony to generate and with what parameters.
///
/// `angle` only affects analogous harmonies; `steps` is ignored by
/// complementary harmonies, which always yield two colors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarmonyConfig {
    pub kind: HarmonyKind,
    pub angle: f64,
    pub steps: usize,
}

impl HarmonyConfig {
    /// Config for `kind` with that kind's default step count and a 30° angle.
    #[must_use]
    pub const fn new(kind: HarmonyKind) -> Self {
        let steps = match kind {
            HarmonyKind::Monochromatic => DEFAULT_MONOCHROMATIC_STEPS,
            HarmonyKind::Analogous => DEFAULT_ANALOGOUS_STEPS,
            HarmonyKind::Complementary => 2,
        };
        Self {
            kind,
            angle: DEFAULT_ANALOGOUS_ANGLE,
            steps,
        }
    }

    #[must_use]
    pub const fn with_steps(self, steps: usize) -> Self {
        Self { steps, ..self }
    }

    #[must_use]
    pub const fn with_angle(self, angle: f64) -> Self {
        Self { angle, ..self }
    }

    /// Generate this harmony for `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewSteps`] if `steps` is below the kind's minimum.
    pub fn generate(&self, base: Color) -> Result<Vec<Color>> {
        match self.kind {
            HarmonyKind::Monochromatic => monochromatic(base, self.steps),
            HarmonyKind::Analogous => analogous(base, self.steps, self.angle),
            HarmonyKind::Complementary => Ok(complementary(base).to_vec()),
        }
    }
}

impl Default for HarmonyConfig {
    /// Analogous, 30°, three steps.
    fn default() -> Self {
        Self::new(HarmonyKind::Analogous)
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// `steps` shades of the base hue, from lightness 0.15 up to 0.85.
///
/// Lightness follows a quadratic ease-in, `0.15 + 0.7 * t²`, so more
/// samples land near the dark end.
///
/// # Errors
///
/// Returns [`Error::TooFewSteps`] if `steps < 2`.
#[allow(clippy::cast_precision_loss)]
pub fn monochromatic(base: Color, steps: usize) -> Result<Vec<Color>> {
    if steps < MONOCHROMATIC_MIN_STEPS {
        return Err(Error::TooFewSteps {
            kind: HarmonyKind::Monochromatic,
            steps,
            min: MONOCHROMATIC_MIN_STEPS,
        });
    }

    let hsl = Hsl::from_color(base);
    let last = (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| {
            let t = i as f64 / last;
            let lightness = (0.7 * t).mul_add(t, 0.15).clamp(0.0, 1.0);
            hsl.with_lightness(lightness).to_color()
        })
        .collect())
}

/// `steps` hues spaced `angle` degrees apart, centered on the base hue.
///
/// With an odd step count the middle sample is the base hue itself.
///
/// # Errors
///
/// Returns [`Error::TooFewSteps`] if `steps < 1`.
#[allow(clippy::cast_precision_loss)]
pub fn analogous(base: Color, steps: usize, angle: f64) -> Result<Vec<Color>> {
    if steps < ANALOGOUS_MIN_STEPS {
        return Err(Error::TooFewSteps {
            kind: HarmonyKind::Analogous,
            steps,
            min: ANALOGOUS_MIN_STEPS,
        });
    }

    let hsl = Hsl::from_color(base);
    let center = (steps - 1) as f64 / 2.0;
    Ok((0..steps)
        .map(|i| {
            let offset = (i as f64 - center) * angle;
            hsl.with_hue(hsl.hue() + offset).to_color()
        })
        .collect())
}

/// The base color followed by its complement.
///
/// The complement sits 180° away; its lightness is scaled by 0.8 when the
/// base is light (> 0.5) and by 1.2 otherwise, then clamped.
#[must_use]
pub fn complementary(base: Color) -> [Color; 2] {
    let hsl = Hsl::from_color(base);
    let l = hsl.lightness();
    let lightness = if l > 0.5 { l * 0.8 } else { l * 1.2 };
    let complement = hsl
        .with_hue(hsl.hue() + 180.0)
        .with_lightness(lightness)
        .to_color();
    [base, complement]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
