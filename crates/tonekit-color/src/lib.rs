// SPDX-License-Identifier: MIT
//
// tonekit-color: packed ARGB colors and HSL for tonal palette generation.
//
// The foundation layer for tonekit: a 32-bit color value whose channels are
// always derived from one packed integer, W3C relative luminance for
// contrast decisions, and a plain HSL model for every hue and lightness
// manipulation. No perceptual color-difference models, no gamut mapping;
// lightness moves linearly in HSL.

pub mod color;
pub mod hsl;

pub use color::{Color, ParseColorError};
pub use hsl::Hsl;
