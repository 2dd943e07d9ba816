//! Rounded-rectangle outlines and path data.
//!
//! Path data is emitted with absolute `M/H/V/A/Z` commands and numbers formatted through
//! [`fmt_num`], so identical geometry always yields identical strings.

use std::fmt::Write as _;

use crate::{
    foundation::core::{Rect, Vec2},
    foundation::math::fmt_num,
    layer::model::{CornerRadii, ShapeEnvelope},
};

/// Scale radii down so adjacent corners never overlap (CSS `border-radius` rule).
pub fn clamp_radii(rect: Rect, radii: CornerRadii) -> CornerRadii {
    let w = rect.width().max(0.0);
    let h = rect.height().max(0.0);
    let r = CornerRadii {
        top_left: finite_non_negative(radii.top_left),
        top_right: finite_non_negative(radii.top_right),
        bottom_right: finite_non_negative(radii.bottom_right),
        bottom_left: finite_non_negative(radii.bottom_left),
    };

    let mut factor: f64 = 1.0;
    for (side, sum) in [
        (w, r.top_left + r.top_right),
        (w, r.bottom_left + r.bottom_right),
        (h, r.top_left + r.bottom_left),
        (h, r.top_right + r.bottom_right),
    ] {
        if sum > side && sum > 0.0 {
            factor = factor.min(side / sum);
        }
    }

    CornerRadii {
        top_left: r.top_left * factor,
        top_right: r.top_right * factor,
        bottom_right: r.bottom_right * factor,
        bottom_left: r.bottom_left * factor,
    }
}

fn finite_non_negative(x: f64) -> f64 {
    if x.is_finite() { x.max(0.0) } else { 0.0 }
}

/// Path data for `rect` with (clamped) corner radii, clockwise from the top-left corner.
pub fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> String {
    let r = clamp_radii(rect, radii);
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
    let n = fmt_num;

    let mut d = String::new();
    let _ = write!(d, "M{},{}", n(x0 + r.top_left), n(y0));
    let _ = write!(d, " H{}", n(x1 - r.top_right));
    arc(&mut d, r.top_right, x1, y0 + r.top_right);
    let _ = write!(d, " V{}", n(y1 - r.bottom_right));
    arc(&mut d, r.bottom_right, x1 - r.bottom_right, y1);
    let _ = write!(d, " H{}", n(x0 + r.bottom_left));
    arc(&mut d, r.bottom_left, x0, y1 - r.bottom_left);
    let _ = write!(d, " V{}", n(y0 + r.top_left));
    arc(&mut d, r.top_left, x0 + r.top_left, y0);
    d.push_str(" Z");
    d
}

fn arc(d: &mut String, r: f64, x: f64, y: f64) {
    if r > 0.0 {
        let r = fmt_num(r);
        let _ = write!(d, " A{r},{r} 0 0 1 {},{}", fmt_num(x), fmt_num(y));
    }
}

/// Plain rectangle path.
pub fn rect_path(rect: Rect) -> String {
    format!(
        "M{},{} H{} V{} H{} Z",
        fmt_num(rect.x0),
        fmt_num(rect.y0),
        fmt_num(rect.x1),
        fmt_num(rect.y1),
        fmt_num(rect.x0)
    )
}

/// Outline of the shape itself, anchored at the origin.
pub fn outline_path(envelope: &ShapeEnvelope) -> String {
    rounded_rect_path(envelope.bounds(), envelope.corner_radii)
}

/// Shape outline moved by `offset` and grown by `grow` on every side.
///
/// Radii grow with the outline, like a CSS box-shadow spread. Negative `grow` shrinks the
/// outline; it never inverts (the result collapses to its center).
pub fn offset_outline(envelope: &ShapeEnvelope, offset: Vec2, grow: f64) -> (Rect, CornerRadii) {
    let base = envelope.bounds() + offset;
    let max_shrink = (base.width().min(base.height()) / 2.0).max(0.0);
    let grow = if grow.is_finite() { grow.max(-max_shrink) } else { 0.0 };
    (base.inflate(grow, grow), envelope.corner_radii.offset(grow))
}

/// Two sub-paths meant to be filled with the even-odd rule: `outer` minus `inner`.
pub fn ring_path(outer: (Rect, CornerRadii), inner: (Rect, CornerRadii)) -> String {
    let mut d = rounded_rect_path(outer.0, outer.1);
    if inner.0.width() > 0.0 && inner.0.height() > 0.0 {
        d.push(' ');
        d.push_str(&rounded_rect_path(inner.0, inner.1));
    }
    d
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shape.rs"]
mod tests;
