//! Import of a design tool's "copy as SVG" output.
//!
//! The clipboard SVG of a single layer is one `<svg>` root whose `viewBox` frames the shape,
//! followed by one `<path>` (or `<rect>`) per fill in paint order. Gradient fills reference a
//! `<linearGradient>` or `<radialGradient>` by `url(#id)`. Geometry under `<defs>`, `<clipPath>`
//! and the other reference-only containers is ignored.

use std::collections::HashMap;

use roxmltree::Node;

use crate::{
    foundation::core::{Affine, Vec2},
    foundation::error::ParseError,
    layer::model::{
        ColorStop, CornerRadii, Fill, GradientDescriptor, GradientFamily, Layer, ShapeEnvelope,
    },
    paint::color::parse_color,
    transform::{affine, non_linear::clamp01},
};

use super::transform_list::parse_transform_list;

/// Build a [`Layer`] from clipboard SVG text.
///
/// The shape is a pill: corner radius is half the viewBox height. Fills whose paint cannot be
/// read are skipped with a debug log.
pub fn import_svg_layer(svg_text: &str) -> Result<Layer, ParseError> {
    let doc = roxmltree::Document::parse(svg_text).map_err(|e| ParseError::Svg(e.to_string()))?;
    let root = doc.root_element();
    if !root.has_tag_name("svg") {
        return Err(ParseError::Svg(format!(
            "root element is <{}>, expected <svg>",
            root.tag_name().name()
        )));
    }

    let (origin, width, height) = view_box(root)?;

    let gradients: HashMap<&str, Node<'_, '_>> = root
        .descendants()
        .filter(|n| n.has_tag_name("linearGradient") || n.has_tag_name("radialGradient"))
        .filter_map(|n| n.attribute("id").map(|id| (id, n)))
        .collect();

    let mut fills = Vec::new();
    let painted = root
        .descendants()
        .filter(|n| n.has_tag_name("path") || n.has_tag_name("rect"))
        .filter(|n| !is_unrendered(*n));
    for node in painted {
        let Some(paint) = node.attribute("fill").or_else(|| style_value(node, "fill")) else {
            continue;
        };
        let opacity = number_attr(node, "fill-opacity").unwrap_or(1.0)
            * number_attr(node, "opacity").unwrap_or(1.0);

        let fill = if let Some(id) = url_ref(paint) {
            let Some(grad) = gradients.get(id) else {
                tracing::debug!(id, "fill references a missing gradient, skipping");
                continue;
            };
            Fill::gradient(read_gradient(*grad, origin, width, height))
        } else if paint.trim() == "none" {
            continue;
        } else {
            match parse_color(paint) {
                Ok(color) => Fill::solid(color),
                Err(err) => {
                    tracing::debug!(%err, "unreadable fill color, skipping");
                    continue;
                }
            }
        };

        fills.push(Fill {
            opacity: clamp01(opacity),
            ..fill
        });
    }

    Ok(Layer {
        name: "Imported Shape".to_owned(),
        envelope: ShapeEnvelope::new(width, height, CornerRadii::uniform(height / 2.0)),
        fills,
        shadows: Vec::new(),
        opacity: 1.0,
    })
}

/// Containers whose children are referenced geometry, never painted in place.
const UNRENDERED: [&str; 6] = ["defs", "clipPath", "mask", "pattern", "symbol", "marker"];

fn is_unrendered(node: Node<'_, '_>) -> bool {
    node.ancestors().any(|a| UNRENDERED.iter().any(|tag| a.has_tag_name(*tag)))
}

fn view_box(root: Node<'_, '_>) -> Result<(Vec2, f64, f64), ParseError> {
    if let Some(raw) = root.attribute("viewBox") {
        let parts: Vec<f64> = raw
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| ParseError::Svg(format!("invalid viewBox '{raw}'")))?;
        return match parts.as_slice() {
            [x, y, w, h] if [*x, *y, *w, *h].iter().all(|v| v.is_finite()) => {
                Ok((Vec2::new(*x, *y), *w, *h))
            }
            _ => Err(ParseError::Svg(format!("invalid viewBox '{raw}'"))),
        };
    }

    match (length_attr(root, "width"), length_attr(root, "height")) {
        (Some(w), Some(h)) => Ok((Vec2::ZERO, w, h)),
        _ => Err(ParseError::Svg(
            "<svg> has neither a viewBox nor width/height".to_owned(),
        )),
    }
}

fn read_gradient(node: Node<'_, '_>, origin: Vec2, width: f64, height: f64) -> GradientDescriptor {
    let radial = node.has_tag_name("radialGradient");
    let user_space = node.attribute("gradientUnits") == Some("userSpaceOnUse");

    // Unit-space geometry: the (0,0)->(1,0) axis for linear, the unit circle for radial.
    let base = if radial {
        let cx = coord_attr(node, "cx", user_space, width)
            .unwrap_or(if user_space { origin.x + width / 2.0 } else { 0.5 });
        let cy = coord_attr(node, "cy", user_space, height)
            .unwrap_or(if user_space { origin.y + height / 2.0 } else { 0.5 });
        let r = coord_attr(node, "r", user_space, width.hypot(height) / 2f64.sqrt())
            .unwrap_or(if user_space { width.hypot(height) / 8f64.sqrt() } else { 0.5 });
        affine::fold([Affine::translate(Vec2::new(cx, cy)), Affine::scale(r)])
    } else {
        let x1 = coord_attr(node, "x1", user_space, width)
            .unwrap_or(if user_space { origin.x } else { 0.0 });
        let y1 = coord_attr(node, "y1", user_space, height)
            .unwrap_or(if user_space { origin.y } else { 0.0 });
        let x2 = coord_attr(node, "x2", user_space, width)
            .unwrap_or(if user_space { origin.x + width } else { 1.0 });
        let y2 = coord_attr(node, "y2", user_space, height)
            .unwrap_or(if user_space { origin.y } else { 0.0 });
        let (dx, dy) = (x2 - x1, y2 - y1);
        affine::from_coeffs(dx, dy, -dy, dx, x1, y1)
    };

    let gradient_transform = match node.attribute("gradientTransform") {
        Some(raw) => parse_transform_list(raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "unreadable gradientTransform, using identity");
            affine::identity()
        }),
        None => affine::identity(),
    };

    let units = if user_space {
        affine::identity()
    } else {
        affine::fold([
            Affine::translate(origin),
            Affine::scale_non_uniform(width, height),
        ])
    };

    let family = if radial {
        GradientFamily::Radial
    } else {
        GradientFamily::Linear
    };

    GradientDescriptor::from_viewport(
        family,
        read_stops(node),
        affine::fold([units, gradient_transform, base]),
        origin,
        None,
    )
}

fn read_stops(gradient: Node<'_, '_>) -> Vec<ColorStop> {
    gradient
        .children()
        .filter(|n| n.has_tag_name("stop"))
        .filter_map(|stop| {
            let offset = stop.attribute("offset").and_then(parse_fraction).unwrap_or(0.0);
            let color_raw = stop
                .attribute("stop-color")
                .or_else(|| style_value(stop, "stop-color"))
                .unwrap_or("black");
            let color = match parse_color(color_raw) {
                Ok(c) => c,
                Err(err) => {
                    tracing::debug!(%err, "unreadable stop color, skipping stop");
                    return None;
                }
            };
            let opacity = stop
                .attribute("stop-opacity")
                .or_else(|| style_value(stop, "stop-opacity"))
                .and_then(parse_fraction)
                .unwrap_or(1.0);
            Some(ColorStop::new(color.scale_alpha(opacity), offset * 100.0))
        })
        .collect()
}

fn url_ref(paint: &str) -> Option<&str> {
    paint
        .trim()
        .strip_prefix("url(")?
        .strip_suffix(')')?
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .strip_prefix('#')
}

fn style_value<'a>(node: Node<'a, '_>, key: &str) -> Option<&'a str> {
    node.attribute("style")?.split(';').find_map(|decl| {
        let (k, v) = decl.split_once(':')?;
        (k.trim() == key).then(|| v.trim())
    })
}

// "0.5" or "50%".
fn parse_fraction(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let v = match raw.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
        None => raw.parse::<f64>().ok()?,
    };
    v.is_finite().then_some(v)
}

fn number_attr(node: Node<'_, '_>, name: &str) -> Option<f64> {
    node.attribute(name).and_then(parse_fraction)
}

fn length_attr(node: Node<'_, '_>, name: &str) -> Option<f64> {
    let raw = node.attribute(name)?.trim();
    let v: f64 = raw.strip_suffix("px").unwrap_or(raw).trim().parse().ok()?;
    (v.is_finite() && v > 0.0).then_some(v)
}

// Percentages resolve against `extent` in user space and to fractions otherwise.
fn coord_attr(node: Node<'_, '_>, name: &str, user_space: bool, extent: f64) -> Option<f64> {
    let raw = node.attribute(name)?.trim();
    let v = match raw.strip_suffix('%') {
        Some(pct) => {
            let f = pct.trim().parse::<f64>().ok()? / 100.0;
            if user_space { f * extent } else { f }
        }
        None => raw.parse::<f64>().ok()?,
    };
    v.is_finite().then_some(v)
}

#[cfg(test)]
#[path = "../../tests/unit/adapters/svg.rs"]
mod tests;
