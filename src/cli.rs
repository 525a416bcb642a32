// SPDX-License-Identifier: MIT
//
// Command-line surface. Three subcommands, each a thin shell over the
// library:
//
//   tonekit swatch 2196F3 brandBlue [--out-dir DIR] [--stdout]
//   tonekit harmony 2196F3 [--kind analogous] [--steps N] [--angle DEG]
//   tonekit scheme 2196F3 [--dark | --pair] [--harmony KIND] [--override role=HEX]...
//
// Output goes to the writer passed into `run`, so tests can capture it.

use std::io::Write;
use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use tonekit_scheme::{
    Brightness, Color, ColorRole, HarmonyConfig, HarmonyKind, ThemeConfig,
    generate_color_scheme, generate_color_scheme_pair, generate_swatch,
};

use crate::emit;
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(name = "tonekit", version, about = "Material-style swatches, harmonies and color schemes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a ten-tone swatch and emit it as Rust constants.
    Swatch(SwatchArgs),
    /// Print a color harmony, one `#RRGGBB` per line.
    Harmony(HarmonyArgs),
    /// Print a color scheme as JSON.
    Scheme(SchemeArgs),
}

#[derive(Debug, Args)]
pub struct SwatchArgs {
    /// Base color as six hex digits, `#` optional.
    pub hex: String,
    /// Identifier used for the constants and the file name.
    pub name: String,
    /// Directory the generated file is written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Print the constants instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct HarmonyArgs {
    /// Base color as six hex digits, `#` optional.
    pub hex: String,
    #[arg(long, default_value = "analogous", value_parser = parse_kind)]
    pub kind: HarmonyKind,
    /// Number of colors; defaults depend on the kind.
    #[arg(long, value_parser = steps_parser())]
    pub steps: Option<usize>,
    /// Hue spacing in degrees (analogous only).
    #[arg(long)]
    pub angle: Option<f64>,
}

#[derive(Debug, Args)]
pub struct SchemeArgs {
    /// Primary color as six hex digits, `#` optional.
    pub hex: String,
    /// Generate the dark variant.
    #[arg(long, conflicts_with = "pair")]
    pub dark: bool,
    /// Generate both variants as `{ "light": ..., "dark": ... }`.
    #[arg(long)]
    pub pair: bool,
    /// Harmony used for secondary and tertiary.
    #[arg(long, value_parser = parse_kind)]
    pub harmony: Option<HarmonyKind>,
    #[arg(long, requires = "harmony", value_parser = steps_parser())]
    pub steps: Option<usize>,
    #[arg(long, requires = "harmony")]
    pub angle: Option<f64>,
    /// Replace a role's computed color, e.g. `--override error=#FF0000`.
    #[arg(long = "override", value_name = "ROLE=HEX", value_parser = parse_override)]
    pub overrides: Vec<(ColorRole, Color)>,
}

/// Largest `--steps` accepted on the command line.
const MAX_STEPS: u64 = 1024;

fn steps_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(0..=MAX_STEPS)
}

fn parse_kind(s: &str) -> std::result::Result<HarmonyKind, String> {
    HarmonyKind::from_name(s).ok_or_else(|| {
        let names: Vec<_> = HarmonyKind::ALL.iter().map(|k| k.name()).collect();
        format!("unknown harmony {s:?}, expected one of: {}", names.join(", "))
    })
}

fn parse_override(s: &str) -> std::result::Result<(ColorRole, Color), String> {
    let (role, hex) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ROLE=HEX, got {s:?}"))?;
    let role = ColorRole::from_name(role.trim())
        .ok_or_else(|| format!("unknown color role {role:?}"))?;
    let color = hex.trim().parse::<Color>().map_err(|e| e.to_string())?;
    Ok((role, color))
}

fn harmony_config(kind: HarmonyKind, steps: Option<usize>, angle: Option<f64>) -> HarmonyConfig {
    let mut config = HarmonyConfig::new(kind);
    if let Some(steps) = steps {
        config = config.with_steps(steps);
    }
    if let Some(angle) = angle {
        config = config.with_angle(angle);
    }
    config
}

/// Execute a parsed command line, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Swatch(args) => swatch(&args, out),
        Command::Harmony(args) => harmony(&args, out),
        Command::Scheme(args) => scheme(args, out),
    }
}

fn swatch(args: &SwatchArgs, out: &mut impl Write) -> Result<()> {
    emit::validate_name(&args.name)?;
    let base = emit::parse_hex_rgb(&args.hex)?;
    let text = emit::render_swatch(&args.name, &generate_swatch(base));

    if args.stdout {
        out.write_all(text.as_bytes())?;
    } else {
        let path = emit::write_unique(&args.out_dir, &args.name, &text)?;
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

fn harmony(args: &HarmonyArgs, out: &mut impl Write) -> Result<()> {
    let base = emit::parse_hex_rgb(&args.hex)?;
    let colors = harmony_config(args.kind, args.steps, args.angle).generate(base)?;
    for color in colors {
        writeln!(out, "{}", color.with_alpha(0xFF).to_hex())?;
    }
    Ok(())
}

fn scheme(args: SchemeArgs, out: &mut impl Write) -> Result<()> {
    let primary = emit::parse_hex_rgb(&args.hex)?;

    let brightness = if args.dark { Brightness::Dark } else { Brightness::Light };
    let mut config = ThemeConfig::new(brightness);
    if let Some(kind) = args.harmony {
        config = config.with_harmony(harmony_config(kind, args.steps, args.angle));
    }
    for (role, color) in args.overrides {
        config = config.with_override(role, color);
    }

    let json = if args.pair {
        serde_json::to_string_pretty(&generate_color_scheme_pair(primary, &config)?)?
    } else {
        serde_json::to_string_pretty(&generate_color_scheme(primary, &config)?)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
