// SPDX-License-Identifier: MIT
//
// Swatch emission: input validation, Rust constant declarations and
// collision-free output file naming.
//
// The generated module for `tonekit swatch 2196F3 brandBlue` looks like:
//
//   pub const BRAND_BLUE_BASE: u32 = 0xFF2196F3;
//   pub const BRAND_BLUE_50: u32 = 0xFFE9F4FE;
//   ...
//   pub const BRAND_BLUE: [u32; 10] = [BRAND_BLUE_50, ..., BRAND_BLUE_900];
//
// and is written to `brand_blue.rs`, or `brand_blue_1.rs`, `brand_blue_2.rs`,
// ... if earlier names are taken.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tonekit_scheme::{Color, Swatch};

use crate::error::{CliError, Result};

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap_or_else(|e| unreachable!("{e}"))
});

static HEX_RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?[0-9a-fA-F]{6}$").unwrap_or_else(|e| unreachable!("{e}"))
});

// ─── Validation ─────────────────────────────────────────────────────────────

/// Check that `name` is a valid identifier.
pub fn validate_name(name: &str) -> Result<()> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(CliError::InvalidName(name.to_owned()))
    }
}

/// Parse exactly six hex digits (optionally `#`-prefixed) into an opaque color.
pub fn parse_hex_rgb(hex: &str) -> Result<Color> {
    if !HEX_RGB.is_match(hex) {
        return Err(CliError::InvalidHex(hex.to_owned()));
    }
    Color::hex(hex).ok_or_else(|| CliError::InvalidHex(hex.to_owned()))
}

// ─── Naming ─────────────────────────────────────────────────────────────────

/// Split an identifier into lowercase words at underscores and
/// lower→upper case boundaries (`brandBlue_2` → `brand`, `blue`, `2`).
fn words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        current.push(ch.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `brandBlue` → `brand_blue`.
#[must_use]
pub fn snake_case(name: &str) -> String {
    let joined = words(name).join("_");
    if joined.is_empty() { "_".to_owned() } else { joined }
}

/// `brandBlue` → `BRAND_BLUE`.
#[must_use]
pub fn screaming_case(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Render a swatch as Rust constant declarations.
#[must_use]
pub fn render_swatch(name: &str, swatch: &Swatch) -> String {
    let prefix = screaming_case(name);
    let mut lines = Vec::with_capacity(28);

    lines.push(format!("// Generated by tonekit from {}. Do not edit.", swatch.base()));
    lines.push(String::new());
    lines.push("/// Base color, exactly as given.".to_owned());
    lines.push(format!("pub const {prefix}_BASE: u32 = {};", swatch.base().to_argb_hex()));
    lines.push(String::new());
    for (tone, color) in swatch.iter() {
        lines.push(format!("pub const {prefix}_{tone}: u32 = {};", color.to_argb_hex()));
    }
    lines.push(String::new());
    lines.push("/// Tones 50 through 900, lightest first.".to_owned());
    lines.push(format!("pub const {prefix}: [u32; 10] = ["));
    for (tone, _) in swatch.iter() {
        lines.push(format!("    {prefix}_{tone},"));
    }
    lines.push("];".to_owned());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

// ─── Output files ───────────────────────────────────────────────────────────

/// `dir/stem.ext` for `n == 0`, `dir/stem_n.ext` otherwise.
fn candidate(dir: &Path, stem: &str, ext: &str, n: u32) -> PathBuf {
    if n == 0 {
        dir.join(format!("{stem}.{ext}"))
    } else {
        dir.join(format!("{stem}_{n}.{ext}"))
    }
}

/// Whether anything occupies `path`, including a symlink whose target is
/// missing.
fn is_taken(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// First free candidate at or after index `from`.
fn first_free(dir: &Path, stem: &str, ext: &str, from: u32) -> (u32, PathBuf) {
    let mut n = from;
    loop {
        let path = candidate(dir, stem, ext, n);
        if !is_taken(&path) {
            return (n, path);
        }
        n += 1;
    }
}

/// First path of the form `dir/stem.ext`, `dir/stem_1.ext`, `dir/stem_2.ext`,
/// ... that is not taken yet.
#[must_use]
pub fn unique_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    first_free(dir, stem, ext, 0).1
}

/// Write `contents` to a fresh file in `dir` named after `name`.
///
/// Uses `create_new`, so a file that appears between the lookup and the write
/// is never clobbered; the search moves on to the next index instead.
pub fn write_unique(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let stem = snake_case(name);
    let mut from = 0;
    loop {
        let (n, path) = first_free(dir, &stem, "rs", from);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(contents.as_bytes())
                    .map_err(|source| CliError::Write {
                        path: path.clone(),
                        source,
                    })?;
                tracing::info!(path = %path.display(), "wrote swatch");
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!(path = %path.display(), "output name taken, trying the next one");
                from = n + 1;
            }
            Err(source) => return Err(CliError::Write { path, source }),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
