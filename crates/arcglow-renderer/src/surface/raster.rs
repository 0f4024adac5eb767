//! Software rasterization helpers: gradient lookup and source-over blending.

use crate::gradient::ColorStop;

/// Resolution of the per-gradient color lookup table.
pub const LUT_SIZE: usize = 1024;

/// Premultiplied RGBA in `0.0..=1.0`.
pub type Premul = [f32; 4];

/// Precomputed colors along a gradient's `[0, 1]` parameter.
pub struct GradientLut {
    entries: Vec<Premul>,
}

impl GradientLut {
    pub fn new(stops: &[ColorStop]) -> Self {
        let entries = (0..LUT_SIZE)
            .map(|i| color_at(stops, i as f64 / (LUT_SIZE - 1) as f64))
            .collect();
        Self { entries }
    }

    /// Color at gradient parameter `t`, clamped into `[0, 1]` (pad extension).
    pub fn sample(&self, t: f64) -> Premul {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let index = (t * (LUT_SIZE - 1) as f64).round() as usize;
        self.entries[index.min(LUT_SIZE - 1)]
    }
}

fn premultiply(stop: &ColorStop) -> Premul {
    let a = stop.color.a as f32;
    [
        stop.color.r as f32 / 255.0 * a,
        stop.color.g as f32 / 255.0 * a,
        stop.color.b as f32 / 255.0 * a,
        a,
    ]
}

/// Interpolate in premultiplied space so fades toward transparent black do
/// not darken the color.
fn color_at(stops: &[ColorStop], t: f64) -> Premul {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return [0.0; 4],
    };
    if t <= first.position {
        return premultiply(first);
    }
    if t >= last.position {
        return premultiply(last);
    }

    let upper = stops.partition_point(|s| s.position <= t);
    let a = &stops[upper - 1];
    let b = &stops[upper];
    let span = b.position - a.position;
    let f = if span > 0.0 {
        ((t - a.position) / span) as f32
    } else {
        1.0
    };
    let (pa, pb) = (premultiply(a), premultiply(b));
    [
        pa[0] + (pb[0] - pa[0]) * f,
        pa[1] + (pb[1] - pa[1]) * f,
        pa[2] + (pb[2] - pa[2]) * f,
        pa[3] + (pb[3] - pa[3]) * f,
    ]
}

/// Composite a premultiplied source over a straight-alpha RGBA8 pixel.
pub fn blend_over(dst: &mut [u8; 4], src: Premul) {
    let sa = src[3];
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let inv = 1.0 - sa;
    let out_a = sa + da * inv;
    if out_a <= 0.0 {
        *dst = [0; 4];
        return;
    }
    for c in 0..3 {
        let d = dst[c] as f32 / 255.0 * da;
        let premul = src[c] + d * inv;
        dst[c] = to_byte(premul / out_a);
    }
    dst[3] = to_byte(out_a);
}

fn to_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
