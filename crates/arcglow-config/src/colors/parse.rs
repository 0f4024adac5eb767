//! Internal hex parsing helpers.
//!
//! Handles the low-level matching of palette entries. Not part of the
//! public API.

use arcglow_common::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for a bare six-digit hex color (the `#` is stripped beforehand).
pub(crate) static HEX6_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").unwrap());

/// Trim and strip one leading `#`.
pub(super) fn normalize_entry(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('#').unwrap_or(s)
}

/// Parse a normalized entry, or `None` if it is not six hex digits.
pub(super) fn parse_hex6(s: &str) -> Option<Color> {
    if !HEX6_RE.is_match(s) {
        return None;
    }
    Color::from_hex(s)
}
