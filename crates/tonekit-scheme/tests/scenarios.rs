//! End-to-end scenarios against known inputs.

use pretty_assertions::assert_eq;
use tonekit_scheme::{
    Brightness, Color, ColorRole, Error, Hsl, ThemeConfig, Tone, analogous, compute_luminance,
    generate_color_scheme, generate_color_scheme_pair, generate_on_color, generate_swatch,
    get_shade, monochromatic,
};

const MATERIAL_BLUE: Color = Color::from_argb(0xFF21_96F3);

#[test]
fn material_blue_swatch() {
    let hsl = Hsl::from_color(MATERIAL_BLUE);
    let swatch = generate_swatch(MATERIAL_BLUE);

    assert_eq!(swatch[Tone::T50], Hsl::new(hsl.hue(), hsl.saturation(), 0.95).to_color());

    let l500 = Hsl::from_color(swatch[Tone::T500]).lightness();
    assert!((0.40..=0.59).contains(&l500), "500 lightness {l500}");
    assert_eq!(swatch.base(), MATERIAL_BLUE);
}

#[test]
fn black_monochromatic_is_two_grays() {
    let colors = monochromatic(Color::BLACK, 2).unwrap();
    let lightness: Vec<f64> = colors.iter().map(|&c| Hsl::from_color(c).lightness()).collect();
    assert!((lightness[0] - 0.15).abs() < 0.005);
    assert!((lightness[1] - 0.85).abs() < 0.005);
    for c in colors {
        assert_eq!(c.red(), c.green());
        assert_eq!(c.green(), c.blue());
    }
}

#[test]
fn shade_999_is_invalid_argument() {
    assert_eq!(get_shade(MATERIAL_BLUE, 999), Err(Error::InvalidTone { tone: 999 }));
}

#[test]
fn contrast_rule_extremes() {
    assert_eq!(compute_luminance(Color::BLACK), 0.0);
    assert_eq!(generate_on_color(Color::BLACK), Color::WHITE);
    assert_eq!(generate_on_color(Color::WHITE), Color::BLACK);
}

#[test]
fn analogous_default_hues() {
    let base = Hsl::from_color(MATERIAL_BLUE);
    let hues: Vec<f64> = analogous(MATERIAL_BLUE, 3, 30.0)
        .unwrap()
        .into_iter()
        .map(|c| Hsl::from_color(c).hue())
        .collect();
    let expected = [base.hue() - 30.0, base.hue(), base.hue() + 30.0];
    for (got, want) in hues.iter().zip(expected) {
        assert!((got - want.rem_euclid(360.0)).abs() < 1.0, "{hues:?}");
    }
}

#[test]
fn material_blue_light_scheme() {
    let scheme = generate_color_scheme(MATERIAL_BLUE, &ThemeConfig::light()).unwrap();
    let swatch = generate_swatch(MATERIAL_BLUE);

    assert_eq!(scheme.brightness, Brightness::Light);
    assert_eq!(scheme.primary, swatch[Tone::T500]);
    assert_eq!(scheme.on_primary, Color::WHITE);
    assert_eq!(scheme.surface, Color::WHITE);
    assert_eq!(scheme.on_surface, Color::BLACK);
    assert_eq!(scheme.background, scheme.surface);
    assert_eq!(scheme.error, Color::from_argb(0xFFB0_0020));
    assert_eq!(scheme.shadow, Color::BLACK);
}

#[test]
fn pair_dark_matches_dark_config() {
    let config = ThemeConfig::light().with_override(ColorRole::Primary, Color::rgb8(1, 2, 3));
    let pair = generate_color_scheme_pair(MATERIAL_BLUE, &config).unwrap();
    let dark = generate_color_scheme(MATERIAL_BLUE, &config.with_brightness(Brightness::Dark)).unwrap();
    assert_eq!(pair.dark, dark);
    assert_eq!(pair.light.primary, Color::rgb8(1, 2, 3));
    assert_eq!(pair.dark.surface, Color::BLACK);
}

#[test]
fn every_entry_point_is_callable_across_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let base = Color::rgb8(i * 60, 120, 200);
                generate_color_scheme_pair(base, &ThemeConfig::default()).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let pair = handle.join().unwrap();
        #[allow(clippy::cast_possible_truncation)]
        let base = Color::rgb8(i as u8 * 60, 120, 200);
        assert_eq!(pair, generate_color_scheme_pair(base, &ThemeConfig::default()).unwrap());
    }
}

#[cfg(feature = "serde")]
#[test]
fn scheme_serializes_with_camel_case_roles() {
    let scheme = generate_color_scheme(MATERIAL_BLUE, &ThemeConfig::dark()).unwrap();
    let json = serde_json::to_value(scheme).unwrap();
    assert_eq!(json["brightness"], "dark");
    assert_eq!(json["onPrimaryContainer"], String::from(scheme.on_primary_container));
    assert_eq!(json["surface"], "#FF000000");
}
