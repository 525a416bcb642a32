//! # tonekit-scheme: tonal swatches, harmonies, and semantic color schemes
//!
//! Derives everything a UI theme needs from a single base color. The same
//! inputs always produce the same outputs: every operation is a pure
//! function over immutable values, safe to call from any thread.
//!
//! # Architecture
//!
//! ```text
//! base Color
//!     │
//!     ▼
//! tonekit-color:  Color ↔ Hsl, relative luminance
//!     │
//!     ├──────────────────────┐
//!     ▼                      ▼
//! swatch.rs:  ten-tone     harmony.rs:  monochromatic / analogous /
//!             Material ramp             complementary palettes
//!     │                      │
//!     └──────────┬───────────┘
//!                ▼
//! contrast.rs:   black/white "on" colors by luminance
//!                │
//!                ▼
//! scheme.rs:     ColorScheme (light/dark) with per-role overrides
//! ```
//!
//! # Color Space
//!
//! All lightness manipulation is linear HSL lightness. There is no
//! perceptual difference model and no gamut mapping; channel values simply
//! saturate at 0 and 255.

pub mod contrast;
pub mod error;
pub mod harmony;
pub mod scheme;
pub mod swatch;

pub use contrast::{compute_luminance, contrast_ratio, generate_on_color};
pub use error::{Error, Result};
pub use harmony::{HarmonyConfig, HarmonyKind, analogous, complementary, monochromatic};
pub use scheme::{
    Brightness, ColorRole, ColorScheme, SchemePair, ThemeConfig, generate_color_scheme,
    generate_color_scheme_pair,
};
pub use swatch::{Swatch, Tone, generate_swatch, get_shade};
pub use tonekit_color::{Color, Hsl};
