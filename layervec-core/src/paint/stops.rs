//! Color stop resolution: ordering, boundary padding, sampling and the transparent-stop fix.
//!
//! Offsets are percentages. The target clamps offsets into `[0, 1]`, so [`resolve_stops`] always
//! returns a ramp starting at 0 and ending at 100.

use crate::{
    foundation::core::Rgba8,
    foundation::math::{EPSILON, lerp_u8},
    layer::model::ColorStop,
};

/// Alpha (out of 255) at or below which a stop counts as transparent.
pub const NEAR_TRANSPARENT_ALPHA: u8 = 2;

/// Ramp used when a gradient arrives without stops.
pub fn default_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(Rgba8::BLACK, 0.0),
        ColorStop::new(Rgba8::TRANSPARENT, 100.0),
    ]
}

/// Stable sort by offset.
pub fn sort_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut out = stops.to_vec();
    out.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    out
}

fn sorted(stops: &[ColorStop]) -> std::borrow::Cow<'_, [ColorStop]> {
    if stops.is_sorted_by(|a, b| a.offset <= b.offset) {
        std::borrow::Cow::Borrowed(stops)
    } else {
        std::borrow::Cow::Owned(sort_stops(stops))
    }
}

/// Color of the ramp at `t` percent.
///
/// Interpolates straight (non-premultiplied) RGBA between the bracketing stops. Outside the
/// ramp the outermost stop color is returned unchanged. An empty ramp is transparent.
pub fn sample_at(stops: &[ColorStop], t: f64) -> Rgba8 {
    let stops = sorted(stops);
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba8::TRANSPARENT;
    };
    if t.is_nan() || t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    let upper = stops.partition_point(|s| s.offset <= t);
    let lo = stops[upper - 1];
    let hi = stops[upper];
    let span = hi.offset - lo.offset;
    if span <= EPSILON {
        return hi.color;
    }

    let f = (t - lo.offset) / span;
    Rgba8::new(
        lerp_u8(lo.color.r, hi.color.r, f),
        lerp_u8(lo.color.g, hi.color.g, f),
        lerp_u8(lo.color.b, hi.color.b, f),
        lerp_u8(lo.color.a, hi.color.a, f),
    )
}

/// Ensure stops exist at exactly 0 and 100, colored by sampling the ramp there.
///
/// The result is sorted. Applying it twice yields the same ramp.
pub fn pad_boundary_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut out = sort_stops(stops);
    if out.is_empty() {
        return out;
    }

    for boundary in [0.0, 100.0] {
        if out.iter().any(|s| (s.offset - boundary).abs() <= EPSILON) {
            continue;
        }
        let color = sample_at(&out, boundary);
        let at = out.partition_point(|s| s.offset < boundary);
        out.insert(at, ColorStop::new(color, boundary));
    }
    out
}

/// Give a transparent black stop the RGB of `neighbor`.
///
/// Design tools export "fade to nothing" as transparent black; interpolating towards it in
/// straight alpha passes through a dark, desaturated middle. A transparent stop with any other
/// RGB is an intentional tinted fade and is returned unchanged.
pub fn transparent_color_fix(color: Rgba8, neighbor: Rgba8) -> Rgba8 {
    if is_fade_to_nothing(color) {
        Rgba8::new(neighbor.r, neighbor.g, neighbor.b, color.a)
    } else {
        color
    }
}

fn is_fade_to_nothing(c: Rgba8) -> bool {
    c.a <= NEAR_TRANSPARENT_ALPHA && c.is_black_rgb()
}

/// Apply [`transparent_color_fix`] across a sorted ramp.
///
/// Each transparent black stop borrows from its nearest visible neighbor. A stop sitting between
/// two visible neighbors of different color is split into two stops at the same offset, one
/// tinted like each side.
pub fn fix_transparent_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let stops = sorted(stops);
    let visible = |s: &ColorStop| !is_fade_to_nothing(s.color);
    let mut out = Vec::with_capacity(stops.len() + 1);

    for (i, stop) in stops.iter().enumerate() {
        if visible(stop) {
            out.push(*stop);
            continue;
        }
        let left = stops[..i].iter().rev().find(|s| visible(*s));
        let right = stops[i + 1..].iter().find(|s| visible(*s));
        match (left, right) {
            (Some(l), Some(r)) if l.color.with_alpha(0) != r.color.with_alpha(0) => {
                out.push(ColorStop::new(
                    transparent_color_fix(stop.color, l.color),
                    stop.offset,
                ));
                out.push(ColorStop::new(
                    transparent_color_fix(stop.color, r.color),
                    stop.offset,
                ));
            }
            (Some(n), _) | (None, Some(n)) => {
                out.push(ColorStop::new(
                    transparent_color_fix(stop.color, n.color),
                    stop.offset,
                ));
            }
            (None, None) => out.push(*stop),
        }
    }
    out
}

/// Drop stops outside `[0, 100]`.
pub fn trim_to_unit_range(stops: &[ColorStop]) -> Vec<ColorStop> {
    stops
        .iter()
        .copied()
        .filter(|s| (-EPSILON..=100.0 + EPSILON).contains(&s.offset))
        .map(|s| ColorStop::new(s.color, s.offset.clamp(0.0, 100.0)))
        .collect()
}

/// Full resolution pipeline used before emitting a gradient.
///
/// Empty (or all non-finite) input becomes [`default_stops`]; otherwise the ramp is sorted,
/// transparent black stops are tinted, boundaries are padded and out-of-range stops trimmed.
pub fn resolve_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let finite: Vec<ColorStop> = stops
        .iter()
        .copied()
        .filter(|s| s.offset.is_finite())
        .collect();
    if finite.len() != stops.len() {
        tracing::debug!(
            dropped = stops.len() - finite.len(),
            "ignoring stops with non-finite offsets"
        );
    }
    if finite.is_empty() {
        return default_stops();
    }

    let fixed = fix_transparent_stops(&sort_stops(&finite));
    trim_to_unit_range(&pad_boundary_stops(&fixed))
}

/// Start/center/end colors for targets limited to three stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreeStop {
    /// Color at offset 0.
    pub start: Rgba8,
    /// Color sampled at offset 50, present when the ramp has interior stops.
    pub center: Option<Rgba8>,
    /// Color at offset 100.
    pub end: Rgba8,
}

/// Collapse a ramp to at most three colors.
///
/// Interior stops are not dropped blindly: the center color is sampled from the resolved ramp
/// at 50%, so a symmetric multi-stop ramp keeps its midpoint.
pub fn three_stop(stops: &[ColorStop]) -> ThreeStop {
    let r = resolve_stops(stops);
    let start = r.first().map_or(Rgba8::BLACK, |s| s.color);
    let end = r.last().map_or(Rgba8::TRANSPARENT, |s| s.color);
    let interior = r.len().saturating_sub(2);
    if interior > 1 {
        tracing::debug!(
            interior,
            "collapsing interior gradient stops into one sampled center color"
        );
    }
    ThreeStop {
        start,
        center: (interior > 0).then(|| sample_at(&r, 50.0)),
        end,
    }
}

/// Two-stop approximation keeping only the ramp's end colors.
pub fn endpoints_only(stops: &[ColorStop]) -> Vec<ColorStop> {
    let r = resolve_stops(stops);
    let start = r.first().map_or(Rgba8::BLACK, |s| s.color);
    let end = r.last().map_or(Rgba8::TRANSPARENT, |s| s.color);
    vec![ColorStop::new(start, 0.0), ColorStop::new(end, 100.0)]
}

#[cfg(test)]
#[path = "../../tests/unit/paint/stops.rs"]
mod tests;
