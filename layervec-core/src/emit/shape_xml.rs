//! `<shape>` drawable fallback.
//!
//! A shape drawable holds one rounded rectangle with one paint, and its gradient takes at most
//! three colors with no transform. Only the topmost visible fill survives; gradients go through
//! [`three_stop`] and lose rotation and aspect.

use std::fmt::Write as _;

use crate::{
    emit::comment_text,
    foundation::core::{Point, Rgba8},
    foundation::math::fmt_num,
    layer::model::{ColorStop, Fill, FillKind, GradientDescriptor, GradientFamily, Layer},
    paint::stops::three_stop,
    pipeline::ConvertOpts,
    transform::{affine, non_linear::clamp01},
};

/// Serialize `layer` as a `<shape>` painted with `fill`; `None` emits no paint element.
pub fn to_shape_xml(layer: &Layer, fill: Option<&Fill>, opts: &ConvertOpts) -> String {
    let env = &layer.envelope;
    let alpha = clamp01(layer.opacity);
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    if opts.emit_comments {
        let _ = writeln!(out, "<!-- layer: {} -->", comment_text(&layer.name));
    }
    out.push_str("<shape xmlns:android=\"http://schemas.android.com/apk/res/android\"\n");
    out.push_str("    android:shape=\"rectangle\">\n");

    let r = env.corner_radii;
    if r.top_left == r.top_right && r.top_left == r.bottom_right && r.top_left == r.bottom_left {
        if r.top_left > 0.0 {
            let _ = writeln!(out, "    <corners android:radius=\"{}dp\" />", fmt_num(r.top_left));
        }
    } else {
        let _ = writeln!(
            out,
            "    <corners\n        android:topLeftRadius=\"{}dp\"\n        android:topRightRadius=\"{}dp\"\n        android:bottomRightRadius=\"{}dp\"\n        android:bottomLeftRadius=\"{}dp\" />",
            fmt_num(r.top_left),
            fmt_num(r.top_right),
            fmt_num(r.bottom_right),
            fmt_num(r.bottom_left)
        );
    }

    match fill.map(|f| (&f.kind, clamp01(f.opacity) * alpha)) {
        Some((FillKind::Solid(color), opacity)) => {
            let _ = writeln!(
                out,
                "    <solid android:color=\"{}\" />",
                color.scale_alpha(opacity).to_argb_hex()
            );
        }
        Some((FillKind::Gradient(desc), opacity)) => {
            write_gradient(&mut out, desc, env.width, env.height, opacity);
        }
        None => {}
    }

    let _ = writeln!(
        out,
        "    <size\n        android:width=\"{}dp\"\n        android:height=\"{}dp\" />",
        fmt_num(env.width.max(0.0)),
        fmt_num(env.height.max(0.0))
    );
    out.push_str("</shape>\n");
    out
}

fn write_gradient(
    out: &mut String,
    desc: &GradientDescriptor,
    width: f64,
    height: f64,
    opacity: f64,
) {
    let m = if affine::is_finite(desc.transform) {
        desc.transform
    } else {
        affine::identity()
    };
    let stops: Vec<ColorStop> = desc
        .stops
        .iter()
        .map(|s| ColorStop::new(s.color.scale_alpha(opacity), s.offset))
        .collect();
    let colors = three_stop(&stops);

    out.push_str("    <gradient");
    match desc.family {
        GradientFamily::Linear => {
            let start = affine::map_point(m, Point::ORIGIN);
            let end = affine::map_point(m, Point::new(1.0, 0.0));
            let _ = write!(out, "\n        android:type=\"linear\"");
            let _ = write!(out, "\n        android:angle=\"{}\"", linear_angle(start, end));
        }
        family => {
            let d = affine::decompose(m);
            if (d.scale_y - d.scale_x).abs() > 1e-6 || d.rotation_deg.abs() > 1e-6 {
                tracing::debug!(
                    ?family,
                    "shape gradients are circular and unrotated, dropping aspect and rotation"
                );
            }
            let center = affine::map_point(m, Point::ORIGIN);
            let (cx, cy) = (fraction(center.x, width), fraction(center.y, height));
            if family == GradientFamily::Angular {
                let _ = write!(out, "\n        android:type=\"sweep\"");
            } else {
                let _ = write!(out, "\n        android:type=\"radial\"");
                let radius = if d.scale_x.is_finite() && d.scale_x > 0.0 {
                    d.scale_x
                } else {
                    width.max(height).max(1.0) / 2.0
                };
                let _ = write!(out, "\n        android:gradientRadius=\"{}dp\"", fmt_num(radius));
            }
            let _ = write!(out, "\n        android:centerX=\"{}\"", fmt_num(cx));
            let _ = write!(out, "\n        android:centerY=\"{}\"", fmt_num(cy));
        }
    }
    write_color(out, "startColor", colors.start);
    if let Some(center) = colors.center {
        write_color(out, "centerColor", center);
    }
    write_color(out, "endColor", colors.end);
    out.push_str(" />\n");
}

fn write_color(out: &mut String, attr: &str, color: Rgba8) {
    let _ = write!(out, "\n        android:{attr}=\"{}\"", color.to_argb_hex());
}

fn fraction(v: f64, extent: f64) -> f64 {
    if extent > 0.0 && extent.is_finite() {
        v / extent
    } else {
        0.5
    }
}

// Shape gradients measure angles counter-clockwise in a y-up frame and only accept multiples
// of 45.
fn linear_angle(start: Point, end: Point) -> String {
    let v = end - start;
    let deg = (-v.y).atan2(v.x).to_degrees();
    let snapped = ((deg / 45.0).round() * 45.0).rem_euclid(360.0);
    fmt_num(snapped)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/shape_xml.rs"]
mod tests;
