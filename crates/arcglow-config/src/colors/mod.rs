//! Palette parsing and formatting utilities.
//!
//! Palette entries are six hex digits with an optional leading `#`.
//! Bulk palette text is a comma-separated list of such entries; anything
//! that does not match is dropped rather than substituted.

mod parse;


use arcglow_common::Color;
use arcglow_common::ConfigError;

use parse::{normalize_entry, parse_hex6};

/// Parse a single palette entry into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    parse_hex6(normalize_entry(s))
        .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {}", s.trim())))
}

/// Validate that a string is a usable palette entry.
pub fn validate_color(s: &str) -> bool {
    parse_hex6(normalize_entry(s)).is_some()
}

/// Parse comma-separated palette text, keeping only the valid entries in order.
pub fn parse_palette(text: &str) -> Vec<Color> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| parse_hex6(normalize_entry(part)))
        .collect()
}

/// Parse a list of palette entries, keeping only the valid ones in order.
pub fn parse_palette_entries<S: AsRef<str>>(entries: &[S]) -> Vec<Color> {
    entries
        .iter()
        .filter_map(|entry| parse_hex6(normalize_entry(entry.as_ref())))
        .collect()
}

/// Lowercase `#rrggbb` for a color.
pub fn format_hex(color: &Color) -> String {
    color.to_hex()
}

/// Render a palette back into bulk-edit text.
pub fn palette_to_text(palette: &[Color]) -> String {
    palette
        .iter()
        .map(format_hex)
        .collect::<Vec<_>>()
        .join(", ")
}
