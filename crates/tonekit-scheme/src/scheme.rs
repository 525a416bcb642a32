//! Scheme assembly: a Material-3-style semantic color scheme.
//!
//! A `ColorScheme` is the fixed set of named roles (primary, on-primary,
//! containers, surfaces, outline, error, inverse roles, shadow, scrim) that a
//! UI reads instead of hardcoding colors. Everything is derived from one
//! primary color:
//!
//! ```text
//! primary ──► Swatch ──► primary (500), container (700), inverse (200)
//!    │
//!    └──► Harmony ──► secondary [1], tertiary [2] ──► Swatch ──► containers
//!
//! primary lightness ──► surface ──► surface container, outline (400)
//! ```
//!
//! Every "on" role is black or white by the luminance rule in
//! [`generate_on_color`]. Overrides replace roles only at final assignment;
//! they never feed back into derived roles.

use std::collections::BTreeMap;
use std::fmt;

use tonekit_color::{Color, Hsl};

use crate::contrast::generate_on_color;
use crate::error::Result;
use crate::harmony::HarmonyConfig;
use crate::swatch::{Swatch, Tone};

/// Error base color for light schemes.
pub const LIGHT_ERROR: Color = Color::from_argb(0xFFB0_0020);
/// Error base color for dark schemes.
pub const DARK_ERROR: Color = Color::from_argb(0xFFCF_6679);

/// Lightness shift from surface to surface container.
const SURFACE_CONTAINER_SHIFT: f64 = 0.05;
/// Opacity of the primary tint in the inverse surface.
const INVERSE_SURFACE_TINT: f64 = 0.05;

// ---------------------------------------------------------------------------
// Brightness
// ---------------------------------------------------------------------------

/// Whether a scheme is for a light or a dark UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Brightness {
    #[default]
    Light,
    Dark,
}

impl Brightness {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ColorRole
// ---------------------------------------------------------------------------

/// A named slot in a [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ColorRole {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceContainer,
    Outline,
    Shadow,
    Scrim,
    InverseSurface,
    OnInverseSurface,
    InversePrimary,
}

impl ColorRole {
    /// All roles in declaration order.
    pub const ALL: [Self; 27] = [
        Self::Primary,
        Self::OnPrimary,
        Self::PrimaryContainer,
        Self::OnPrimaryContainer,
        Self::Secondary,
        Self::OnSecondary,
        Self::SecondaryContainer,
        Self::OnSecondaryContainer,
        Self::Tertiary,
        Self::OnTertiary,
        Self::TertiaryContainer,
        Self::OnTertiaryContainer,
        Self::Error,
        Self::OnError,
        Self::ErrorContainer,
        Self::OnErrorContainer,
        Self::Background,
        Self::OnBackground,
        Self::Surface,
        Self::OnSurface,
        Self::SurfaceContainer,
        Self::Outline,
        Self::Shadow,
        Self::Scrim,
        Self::InverseSurface,
        Self::OnInverseSurface,
        Self::InversePrimary,
    ];

    /// camelCase role name (e.g. `"onPrimaryContainer"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::OnPrimary => "onPrimary",
            Self::PrimaryContainer => "primaryContainer",
            Self::OnPrimaryContainer => "onPrimaryContainer",
            Self::Secondary => "secondary",
            Self::OnSecondary => "onSecondary",
            Self::SecondaryContainer => "secondaryContainer",
            Self::OnSecondaryContainer => "onSecondaryContainer",
            Self::Tertiary => "tertiary",
            Self::OnTertiary => "onTertiary",
            Self::TertiaryContainer => "tertiaryContainer",
            Self::OnTertiaryContainer => "onTertiaryContainer",
            Self::Error => "error",
            Self::OnError => "onError",
            Self::ErrorContainer => "errorContainer",
            Self::OnErrorContainer => "onErrorContainer",
            Self::Background => "background",
            Self::OnBackground => "onBackground",
            Self::Surface => "surface",
            Self::OnSurface => "onSurface",
            Self::SurfaceContainer => "surfaceContainer",
            Self::Outline => "outline",
            Self::Shadow => "shadow",
            Self::Scrim => "scrim",
            Self::InverseSurface => "inverseSurface",
            Self::OnInverseSurface => "onInverseSurface",
            Self::InversePrimary => "inversePrimary",
        }
    }

    /// Parse a role from its camelCase name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(name))
    }

    /// The background an "on" role is drawn over, or `None` for roles that
    /// are not foregrounds.
    #[must_use]
    pub const fn paired_background(self) -> Option<Self> {
        match self {
            Self::OnPrimary => Some(Self::Primary),
            Self::OnPrimaryContainer => Some(Self::PrimaryContainer),
            Self::OnSecondary => Some(Self::Secondary),
            Self::OnSecondaryContainer => Some(Self::SecondaryContainer),
            Self::OnTertiary => Some(Self::Tertiary),
            Self::OnTertiaryContainer => Some(Self::TertiaryContainer),
            Self::OnError => Some(Self::Error),
            Self::OnErrorContainer => Some(Self::ErrorContainer),
            Self::OnBackground => Some(Self::Background),
            Self::OnSurface => Some(Self::Surface),
            Self::OnInverseSurface => Some(Self::InverseSurface),
            _ => None,
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ThemeConfig
// ---------------------------------------------------------------------------

/// Inputs to scheme generation besides the primary color.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeConfig {
    pub brightness: Brightness,
    /// Roles whose computed value is replaced verbatim.
    pub overrides: BTreeMap<ColorRole, Color>,
    /// Harmony used for secondary/tertiary; `None` means
    /// [`HarmonyConfig::default`].
    pub harmony: Option<HarmonyConfig>,
}

impl ThemeConfig {
    #[must_use]
    pub fn new(brightness: Brightness) -> Self {
        Self {
            brightness,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self::new(Brightness::Light)
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::new(Brightness::Dark)
    }

    /// A copy of this config with a different brightness. Overrides and
    /// harmony are shared.
    #[must_use]
    pub fn with_brightness(&self, brightness: Brightness) -> Self {
        Self {
            brightness,
            ..self.clone()
        }
    }

    /// A copy of this config with `role` pinned to `color`.
    #[must_use]
    pub fn with_override(&self, role: ColorRole, color: Color) -> Self {
        let mut overrides = self.overrides.clone();
        overrides.insert(role, color);
        Self {
            overrides,
            ..self.clone()
        }
    }

    /// A copy of this config using `harmony` for secondary/tertiary.
    #[must_use]
    pub fn with_harmony(&self, harmony: HarmonyConfig) -> Self {
        Self {
            harmony: Some(harmony),
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// ColorScheme
// ---------------------------------------------------------------------------

/// A complete semantic color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ColorScheme {
    pub brightness: Brightness,

    // ── Primary family ────────────────────────────────────────
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    // ── Secondary family ──────────────────────────────────────
    pub secondary: Color,
    pub on_secondary: Color,
    pub secondary_container: Color,
    pub on_secondary_container: Color,

    // ── Tertiary family ───────────────────────────────────────
    pub tertiary: Color,
    pub on_tertiary: Color,
    pub tertiary_container: Color,
    pub on_tertiary_container: Color,

    // ── Error family ──────────────────────────────────────────
    pub error: Color,
    pub on_error: Color,
    pub error_container: Color,
    pub on_error_container: Color,

    // ── Surfaces ──────────────────────────────────────────────
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_container: Color,
    pub outline: Color,

    // ── Fixed ─────────────────────────────────────────────────
    pub shadow: Color,
    pub scrim: Color,

    // ── Inverse ───────────────────────────────────────────────
    pub inverse_surface: Color,
    pub on_inverse_surface: Color,
    pub inverse_primary: Color,
}

impl ColorScheme {
    /// The color assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: ColorRole) -> Color {
        *self.slot(role)
    }

    /// Iterate over every `(role, color)` in declaration order.
    pub fn roles(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    const fn slot(&self, role: ColorRole) -> &Color {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::OnPrimary => &self.on_primary,
            ColorRole::PrimaryContainer => &self.primary_container,
            ColorRole::OnPrimaryContainer => &self.on_primary_container,
            ColorRole::Secondary => &self.secondary,
            ColorRole::OnSecondary => &self.on_secondary,
            ColorRole::SecondaryContainer => &self.secondary_container,
            ColorRole::OnSecondaryContainer => &self.on_secondary_container,
            ColorRole::Tertiary => &self.tertiary,
            ColorRole::OnTertiary => &self.on_tertiary,
            ColorRole::TertiaryContainer => &self.tertiary_container,
            ColorRole::OnTertiaryContainer => &self.on_tertiary_container,
            ColorRole::Error => &self.error,
            ColorRole::OnError => &self.on_error,
            ColorRole::ErrorContainer => &self.error_container,
            ColorRole::OnErrorContainer => &self.on_error_container,
            ColorRole::Background => &self.background,
            ColorRole::OnBackground => &self.on_background,
            ColorRole::Surface => &self.surface,
            ColorRole::OnSurface => &self.on_surface,
            ColorRole::SurfaceContainer => &self.surface_container,
            ColorRole::Outline => &self.outline,
            ColorRole::Shadow => &self.shadow,
            ColorRole::Scrim => &self.scrim,
            ColorRole::InverseSurface => &self.inverse_surface,
            ColorRole::OnInverseSurface => &self.on_inverse_surface,
            ColorRole::InversePrimary => &self.inverse_primary,
        }
    }

    fn slot_mut(&mut self, role: ColorRole) -> &mut Color {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::OnPrimary => &mut self.on_primary,
            ColorRole::PrimaryContainer => &mut self.primary_container,
            ColorRole::OnPrimaryContainer => &mut self.on_primary_container,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::OnSecondary => &mut self.on_secondary,
            ColorRole::SecondaryContainer => &mut self.secondary_container,
            ColorRole::OnSecondaryContainer => &mut self.on_secondary_container,
            ColorRole::Tertiary => &mut self.tertiary,
            ColorRole::OnTertiary => &mut self.on_tertiary,
            ColorRole::TertiaryContainer => &mut self.tertiary_container,
            ColorRole::OnTertiaryContainer => &mut self.on_tertiary_container,
            ColorRole::Error => &mut self.error,
            ColorRole::OnError => &mut self.on_error,
            ColorRole::ErrorContainer => &mut self.error_container,
            ColorRole::OnErrorContainer => &mut self.on_error_container,
            ColorRole::Background => &mut self.background,
            ColorRole::OnBackground => &mut self.on_background,
            ColorRole::Surface => &mut self.surface,
            ColorRole::OnSurface => &mut self.on_surface,
            ColorRole::SurfaceContainer => &mut self.surface_container,
            ColorRole::Outline => &mut self.outline,
            ColorRole::Shadow => &mut self.shadow,
            ColorRole::Scrim => &mut self.scrim,
            ColorRole::InverseSurface => &mut self.inverse_surface,
            ColorRole::OnInverseSurface => &mut self.on_inverse_surface,
            ColorRole::InversePrimary => &mut self.inverse_primary,
        }
    }

    /// Generate a scheme from `primary` and `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::TooFewSteps`] from the configured harmony.
    pub fn generate(primary: Color, config: &ThemeConfig) -> Result<Self> {
        let brightness = config.brightness;
        let is_dark = brightness.is_dark();

        // Primary family.
        let primary_swatch = Swatch::generate(primary);
        let primary_main = primary_swatch[Tone::T500];
        let primary_container = primary_swatch[Tone::T700];

        // Secondary/tertiary from the harmony.
        let harmonics = config.harmony.unwrap_or_default().generate(primary)?;
        let secondary = harmonics
            .get(1)
            .or_else(|| harmonics.first())
            .copied()
            .unwrap_or(primary);
        let tertiary = harmonics.get(2).copied().unwrap_or(secondary);
        let secondary_container = container_of(secondary);
        let tertiary_container = container_of(tertiary);

        // Surfaces.
        let surface = select_surface(primary, &harmonics, brightness);
        let surface_container = surface_container_of(surface, brightness);
        let outline = Swatch::generate(surface)[Tone::T400];
        let on_surface = generate_on_color(surface);

        // Error family.
        let error = if is_dark { DARK_ERROR } else { LIGHT_ERROR };
        let error_container = container_of(error);

        // Inverse roles.
        let (inverse_base, inverse_opposite) = if is_dark {
            (Color::WHITE, Color::BLACK)
        } else {
            (Color::BLACK, Color::WHITE)
        };
        let inverse_surface = primary.blend_over(inverse_base, INVERSE_SURFACE_TINT);

        let mut scheme = Self {
            brightness,
            primary: primary_main,
            on_primary: generate_on_color(primary_main),
            primary_container,
            on_primary_container: generate_on_color(primary_container),
            secondary,
            on_secondary: generate_on_color(secondary),
            secondary_container,
            on_secondary_container: generate_on_color(secondary_container),
            tertiary,
            on_tertiary: generate_on_color(tertiary),
            tertiary_container,
            on_tertiary_container: generate_on_color(tertiary_container),
            error,
            on_error: generate_on_color(error),
            error_container,
            on_error_container: generate_on_color(error_container),
            background: surface,
            on_background: on_surface,
            surface,
            on_surface,
            surface_container,
            outline,
            shadow: Color::BLACK,
            scrim: Color::BLACK,
            inverse_surface,
            on_inverse_surface: generate_on_color(inverse_opposite),
            inverse_primary: primary_swatch[Tone::T200],
        };

        for (&role, &color) in &config.overrides {
            tracing::trace!(role = role.name(), color = %color, "applying override");
            *scheme.slot_mut(role) = color;
        }

        Ok(scheme)
    }
}

/// Tone 700 of a fresh swatch for `color`.
fn container_of(color: Color) -> Color {
    Swatch::generate(color)[Tone::T700]
}

/// Pick the surface from the primary's own lightness.
///
/// Very dark primaries take harmonic 1, very light ones harmonic 2, both
/// falling back to the primary itself. Everything else gets flat white
/// (light) or black (dark).
fn select_surface(primary: Color, harmonics: &[Color], brightness: Brightness) -> Color {
    let lightness = Hsl::from_color(primary).lightness();
    let surface = if lightness < 0.2 {
        harmonics.get(1).copied().unwrap_or(primary)
    } else if lightness > 0.8 {
        harmonics.get(2).copied().unwrap_or(primary)
    } else if brightness.is_dark() {
        Color::BLACK
    } else {
        Color::WHITE
    };
    tracing::debug!(
        primary_lightness = lightness,
        surface = %surface,
        %brightness,
        "selected surface"
    );
    surface
}

/// Nudge the surface 0.05 toward the middle: darker for light schemes,
/// lighter for dark ones. Flat black/white get a fixed near-neutral gray.
fn surface_container_of(surface: Color, brightness: Brightness) -> Color {
    if surface == Color::BLACK || surface == Color::WHITE {
        let lightness = if brightness.is_dark() { 0.07 } else { 0.95 };
        return Hsl::new(0.0, 0.0, lightness).to_color();
    }
    let hsl = Hsl::from_color(surface);
    let shift = if brightness.is_dark() {
        SURFACE_CONTAINER_SHIFT
    } else {
        -SURFACE_CONTAINER_SHIFT
    };
    hsl.with_lightness(hsl.lightness() + shift).to_color()
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// A light and a dark scheme generated from the same primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemePair {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

/// Generate a scheme for `primary` using `config`.
///
/// # Errors
///
/// Propagates [`crate::Error::TooFewSteps`] from the configured harmony.
pub fn generate_color_scheme(primary: Color, config: &ThemeConfig) -> Result<ColorScheme> {
    ColorScheme::generate(primary, config)
}

/// Generate light and dark schemes that share `config`'s overrides and
/// harmony. `config.brightness` is ignored.
///
/// # Errors
///
/// Propagates [`crate::Error::TooFewSteps`] from the configured harmony.
pub fn generate_color_scheme_pair(primary: Color, config: &ThemeConfig) -> Result<SchemePair> {
    let light = ColorScheme::generate(primary, &config.with_brightness(Brightness::Light))?;
    let dark = ColorScheme::generate(primary, &config.with_brightness(Brightness::Dark))?;
    Ok(SchemePair { light, dark })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
