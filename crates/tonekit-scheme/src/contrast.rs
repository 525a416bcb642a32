//! Luminance-based contrast decisions for "on" colors.
//!
//! Every foreground role in a scheme is picked by one rule: black text on
//! backgrounds whose relative luminance is strictly above 0.5, white text
//! otherwise. The WCAG contrast ratio is exposed alongside for callers that
//! want to audit a generated scheme.

use tonekit_color::Color;

/// Luminance above which a background takes black foreground content.
pub const ON_COLOR_THRESHOLD: f64 = 0.5;

/// Compute the W3C relative luminance of a color.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn compute_luminance(color: Color) -> f64 {
    color.relative_luminance()
}

/// Pick opaque black or opaque white for content drawn on `background`.
///
/// The test is strict: a luminance of exactly 0.5 yields white.
#[must_use]
pub fn generate_on_color(background: Color) -> Color {
    if compute_luminance(background) > ON_COLOR_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = compute_luminance(a);
    let lb = compute_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
