//! Per-frame color stop computation.
//!
//! Only the inner half of the radius carries palette color; the last
//! stretch before `OUTER_COLOR_END` fades out and everything beyond it is
//! transparent.

use arcglow_common::{Color, Rgba};

use super::types::ColorStop;

/// Samples taken across the colored band (plus one for the far end).
pub const NUM_STEPS: usize = 100;
pub const COLOR_START: f64 = 0.0;
pub const OUTER_COLOR_END: f64 = 0.5;
/// Width of the fade band that ends at `OUTER_COLOR_END`.
pub const OUTER_FADE_ZONE: f64 = 0.3;
/// Samples at or below this opacity are not emitted.
pub const MIN_STOP_OPACITY: f64 = 0.01;

const COLOR_RANGE: f64 = OUTER_COLOR_END - COLOR_START;

/// Fractional palette index for sample `t` at the given reverse progress.
///
/// Cycles the palette spatially and rotates it against progress. A palette
/// of one (or zero) colors always maps to index 0.
pub fn palette_offset(t: f64, reverse_progress: f64, palette_len: usize) -> f64 {
    if palette_len <= 1 {
        return 0.0;
    }
    let span = (palette_len - 1) as f64;
    (t * span + reverse_progress * span) % span
}

/// Blend the two palette entries around `offset`.
pub fn sample_palette(palette: &[Color], offset: f64) -> Option<Color> {
    if palette.is_empty() || !offset.is_finite() || offset < 0.0 {
        return None;
    }
    let index1 = offset.floor() as usize;
    let index2 = (index1 + 1) % palette.len();
    let blend = offset - index1 as f64;
    let c1 = palette.get(index1)?;
    let c2 = palette.get(index2)?;
    Some(c1.lerp(c2, blend))
}

/// Opacity at a stop position: opaque, then a power-1.5 fade over the band
/// that ends at `OUTER_COLOR_END`.
pub fn fade_opacity(position: f64) -> f64 {
    let distance_from_outer = OUTER_COLOR_END - position;
    let opacity = if (0.0..OUTER_FADE_ZONE).contains(&distance_from_outer) {
        (distance_from_outer / OUTER_FADE_ZONE).powf(1.5)
    } else {
        1.0
    };
    opacity.clamp(0.0, 1.0)
}

/// Build the sorted stop list for one frame. Empty palette → no stops.
pub fn build_color_stops(palette: &[Color], progress: f64) -> Vec<ColorStop> {
    let n = palette.len();
    if n == 0 {
        return Vec::new();
    }

    let progress = if progress.is_finite() {
        progress.rem_euclid(1.0)
    } else {
        0.0
    };
    let reverse_progress = 1.0 - progress;

    let mut stops = Vec::with_capacity(NUM_STEPS + 4);
    for i in 0..=NUM_STEPS {
        let t = i as f64 / NUM_STEPS as f64;
        let position = COLOR_START + t * COLOR_RANGE;
        let Some(color) = sample_palette(palette, palette_offset(t, reverse_progress, n)) else {
            continue;
        };
        let opacity = fade_opacity(position);
        if opacity > MIN_STOP_OPACITY {
            stops.push(ColorStop::new(position, color.with_alpha(opacity)));
        }
    }

    // The center pixel is always fully opaque, whatever the sampling did.
    if let Some(center) = sample_palette(palette, palette_offset(0.0, reverse_progress, n)) {
        stops.push(ColorStop::new(0.0, center.with_alpha(1.0)));
    }

    stops.push(ColorStop::new(OUTER_COLOR_END, Rgba::TRANSPARENT));
    stops.push(ColorStop::new(1.0, Rgba::TRANSPARENT));

    normalize_stops(stops)
}

/// Clamp positions into `[0, 1]`, sort ascending, and collapse equal
/// positions to the stop that was added last.
pub fn normalize_stops(stops: Vec<ColorStop>) -> Vec<ColorStop> {
    let mut stops: Vec<ColorStop> = stops
        .into_iter()
        .map(|mut stop| {
            stop.position = if stop.position.is_nan() {
                0.0
            } else {
                stop.position.clamp(0.0, 1.0)
            };
            stop
        })
        .collect();
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));

    let mut out: Vec<ColorStop> = Vec::with_capacity(stops.len());
    for stop in stops {
        match out.last_mut() {
            Some(last) if last.position == stop.position => *last = stop,
            _ => out.push(stop),
        }
    }
    out
}
