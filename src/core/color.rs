//! Hex color normalization and blending.
//!
//! Input is coerced rather than rejected: whatever is passed in, the result is
//! always a lowercase `#rrggbb` string.

use crate::domain::model::{Palette, PaletteRole};

pub const DEFAULT_ACCENT: &str = "#ae2d1f";

/// Normalize an optional hex color to `#rrggbb`.
///
/// Empty input falls back to [`DEFAULT_ACCENT`]. Three-digit shorthand is
/// expanded, anything else is padded with `0` or truncated to six digits, and
/// characters that are not hex digits become `0`.
pub fn normalize(value: Option<&str>) -> String {
    let raw = match value {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_ACCENT,
    };

    let digits: Vec<char> = raw
        .trim()
        .trim_start_matches('#')
        .chars()
        .map(|c| if c.is_ascii_hexdigit() { c.to_ascii_lowercase() } else { '0' })
        .collect();

    let expanded: Vec<char> = if digits.len() == 3 {
        digits.iter().flat_map(|&c| [c, c]).collect()
    } else {
        digits
    };

    let mut out = String::with_capacity(7);
    out.push('#');
    out.extend(expanded.iter().copied().chain(std::iter::repeat('0')).take(6));
    out
}

fn channels(color: &str) -> [u8; 3] {
    let normalized = normalize(Some(color));
    let hex = &normalized[1..];
    let mut out = [0u8; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        // normalize guarantees six hex digits
        *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap_or(0);
    }
    out
}

/// Red, green and blue of `color` as decimal components.
pub fn rgb(color: &str) -> (u8, u8, u8) {
    let [r, g, b] = channels(color);
    (r, g, b)
}

fn mix_channel(channel: u8, ratio: f64) -> u8 {
    let c = f64::from(channel);
    let mixed = if ratio >= 0.0 {
        (c + (255.0 - c) * ratio).round_ties_even().min(255.0)
    } else {
        (c * (1.0 + ratio)).round_ties_even().max(0.0)
    };
    mixed.clamp(0.0, 255.0) as u8
}

/// Blend `color` toward white (`ratio > 0`) or toward black (`ratio < 0`).
pub fn blend(color: &str, ratio: f64) -> String {
    let [r, g, b] = channels(color);
    format!(
        "#{:02x}{:02x}{:02x}",
        mix_channel(r, ratio),
        mix_channel(g, ratio),
        mix_channel(b, ratio)
    )
}

pub fn derive_palette(accent: &str) -> Palette {
    let main = normalize(Some(accent));
    let shade = |role: PaletteRole| blend(&main, role.ratio());
    Palette {
        bright: shade(PaletteRole::Bright),
        bold: shade(PaletteRole::Bold),
        hover: shade(PaletteRole::Hover),
        active: shade(PaletteRole::Active),
        main,
    }
}
