//! In-memory layer model: fills, gradients, shadows and the shape they paint.

use crate::{
    foundation::core::{Affine, Point, Rect, Rgba8, Vec2},
    foundation::error::{LayervecError, LayervecResult},
    transform::{
        affine::{self, Decomposed},
        non_linear::normalize_degrees,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Qualitative shape of a color ramp.
pub enum GradientFamily {
    /// Color varies along one axis.
    Linear,
    /// Color varies with distance from a center (elliptical in general).
    Radial,
    /// Color varies with angle around a center (sweep / conic).
    Angular,
    /// Color varies with L1 distance from a center.
    Diamond,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One anchor of a gradient ramp.
pub struct ColorStop {
    /// Straight-alpha stop color.
    pub color: Rgba8,
    /// Position in percent. Values outside `[0, 100]` are allowed.
    pub offset: f64,
}

impl ColorStop {
    /// Build a stop at `offset` percent.
    pub const fn new(color: Rgba8, offset: f64) -> Self {
        Self { color, offset }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Normalized gradient every adapter produces and the re-projection engine consumes.
///
/// `transform` maps the gradient's unit space (unit circle for radial-like families, the
/// `(0,0)->(1,0)` axis for linear) into **shape-local** coordinates.
pub struct GradientDescriptor {
    /// Gradient family.
    pub family: GradientFamily,
    /// Color stops in input order.
    pub stops: Vec<ColorStop>,
    /// Shape-local gradient transform.
    pub transform: Affine,
    /// Viewport position of the shape's origin, already removed from `transform`.
    pub source_bounds_offset: Vec2,
    /// Aspect-normalized sweep angle for [`GradientFamily::Angular`], in degrees.
    pub sweep_rotation_deg: Option<f64>,
}

impl GradientDescriptor {
    /// Build a descriptor from a transform expressed relative to the viewport origin.
    ///
    /// The shape origin `source_bounds_offset` is subtracted here so the stored transform is
    /// shape-local.
    pub fn from_viewport(
        family: GradientFamily,
        stops: Vec<ColorStop>,
        viewport_transform: Affine,
        source_bounds_offset: Vec2,
        sweep_rotation_deg: Option<f64>,
    ) -> Self {
        let transform = affine::compose(
            Affine::translate(-source_bounds_offset),
            viewport_transform,
        );
        Self {
            family,
            stops,
            transform,
            source_bounds_offset,
            sweep_rotation_deg,
        }
    }

    /// Descriptor with the identity transform, used when a transform could not be read.
    pub fn identity(family: GradientFamily, stops: Vec<ColorStop>) -> Self {
        Self {
            family,
            stops,
            transform: affine::identity(),
            source_bounds_offset: Vec2::ZERO,
            sweep_rotation_deg: None,
        }
    }

    /// Rotation/scale/translation of the shape-local transform.
    pub fn decomposed(&self) -> Decomposed {
        affine::decompose(self.transform)
    }

    /// Same center and axis lengths, turned to `deg` degrees. Any skew is dropped.
    pub fn with_rotation(&self, deg: f64) -> Self {
        let d = self.decomposed();
        Self {
            transform: affine::fold([
                Affine::translate(d.translate),
                affine::rotate_deg(deg),
                Affine::scale_non_uniform(d.scale_x, d.scale_y),
            ]),
            sweep_rotation_deg: match self.family {
                GradientFamily::Angular => Some(normalize_degrees(deg)),
                _ => None,
            },
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// What a fill paints.
pub enum FillKind {
    /// Flat color.
    Solid(Rgba8),
    /// Gradient ramp.
    Gradient(GradientDescriptor),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One entry of a layer's fill stack.
pub struct Fill {
    /// Paint.
    pub kind: FillKind,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
    /// Hidden fills are kept for round-tripping but never drawn.
    pub visible: bool,
}

impl Fill {
    /// Visible, fully opaque solid fill.
    pub fn solid(color: Rgba8) -> Self {
        Self {
            kind: FillKind::Solid(color),
            opacity: 1.0,
            visible: true,
        }
    }

    /// Visible, fully opaque gradient fill.
    pub fn gradient(descriptor: GradientDescriptor) -> Self {
        Self {
            kind: FillKind::Gradient(descriptor),
            opacity: 1.0,
            visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Stacking convention of a fill list as delivered by a source.
pub enum FillOrder {
    /// Index 0 is painted first (bottommost). This is the in-memory convention.
    #[serde(rename = "bottom_first")]
    BottomFirst,
    /// Index 0 is the topmost fill, as listed in the design tool's panel.
    #[default]
    #[serde(rename = "top_first")]
    TopFirst,
}

impl FillOrder {
    /// Bring `fills` into bottom-first order.
    pub fn into_bottom_first(self, mut fills: Vec<Fill>) -> Vec<Fill> {
        if self == Self::TopFirst {
            fills.reverse();
        }
        fills
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Independent corner radii, in shape units.
pub struct CornerRadii {
    /// Top-left radius.
    #[serde(default)]
    pub top_left: f64,
    /// Top-right radius.
    #[serde(default)]
    pub top_right: f64,
    /// Bottom-right radius.
    #[serde(default)]
    pub bottom_right: f64,
    /// Bottom-left radius.
    #[serde(default)]
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Same radius on every corner.
    pub const fn uniform(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    /// Grow (or shrink, for negative `delta`) every radius, never below zero.
    pub fn offset(self, delta: f64) -> Self {
        Self {
            top_left: (self.top_left + delta).max(0.0),
            top_right: (self.top_right + delta).max(0.0),
            bottom_right: (self.bottom_right + delta).max(0.0),
            bottom_left: (self.bottom_left + delta).max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Outline of a layer: a rounded rectangle anchored at the origin.
pub struct ShapeEnvelope {
    /// Width in shape units.
    pub width: f64,
    /// Height in shape units.
    pub height: f64,
    /// Corner radii.
    pub corner_radii: CornerRadii,
}

impl ShapeEnvelope {
    /// Envelope with the given size and radii.
    pub const fn new(width: f64, height: f64, corner_radii: CornerRadii) -> Self {
        Self {
            width,
            height,
            corner_radii,
        }
    }

    /// `true` when the envelope encloses no area.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }

    /// Bounding box `(0, 0) .. (width, height)`.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width.max(0.0), self.height.max(0.0))
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Larger of width and height.
    pub fn max_dim(&self) -> f64 {
        self.width.max(self.height).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Where a shadow is drawn relative to the shape.
pub enum ShadowKind {
    /// Outside and under the shape.
    Drop,
    /// Inside the shape, along its edges.
    Inner,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Box shadow attached to a layer.
pub struct Shadow {
    /// Drop or inner.
    pub kind: ShadowKind,
    /// Horizontal offset.
    pub dx: f64,
    /// Vertical offset.
    pub dy: f64,
    /// Blur radius.
    pub blur: f64,
    /// Spread (grows a drop shadow, shrinks the hole of an inner shadow).
    pub spread: f64,
    /// Shadow color.
    pub color: Rgba8,
    /// Hidden shadows are never drawn.
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A converted design layer.
///
/// Built once per conversion by an adapter and consumed read-only afterwards; edits produce new
/// values through the `with_*` helpers.
pub struct Layer {
    /// Layer name (used in the emitted header comment).
    pub name: String,
    /// Outline.
    pub envelope: ShapeEnvelope,
    /// Fill stack, index 0 = bottommost.
    pub fills: Vec<Fill>,
    /// Shadows in paint order.
    pub shadows: Vec<Shadow>,
    /// Whole-layer opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Layer {
    /// Check dimensions and opacities.
    pub fn validate(&self) -> LayervecResult<()> {
        let ShapeEnvelope { width, height, .. } = self.envelope;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(LayervecError::validation(format!(
                "layer '{}' has invalid size {width}x{height}",
                self.name
            )));
        }
        if !self.opacity.is_finite() {
            return Err(LayervecError::validation("layer opacity must be finite"));
        }
        for (i, fill) in self.fills.iter().enumerate() {
            if !fill.opacity.is_finite() {
                return Err(LayervecError::validation(format!(
                    "fill {i} opacity must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Copy of this layer with a different fill stack (bottom-first).
    pub fn with_fills(&self, fills: Vec<Fill>) -> Self {
        Self {
            fills,
            ..self.clone()
        }
    }

    /// Copy of this layer with the gradient fill at `index` turned to `deg` degrees.
    pub fn with_gradient_rotation(&self, index: usize, deg: f64) -> LayervecResult<Self> {
        if !deg.is_finite() {
            return Err(LayervecError::validation("gradient rotation must be finite"));
        }
        let mut fills = self.fills.clone();
        let Some(fill) = fills.get_mut(index) else {
            return Err(LayervecError::validation(format!(
                "layer '{}' has no fill {index}",
                self.name
            )));
        };
        let FillKind::Gradient(desc) = &fill.kind else {
            return Err(LayervecError::validation(format!("fill {index} is not a gradient")));
        };
        fill.kind = FillKind::Gradient(desc.with_rotation(deg));
        Ok(self.with_fills(fills))
    }

    /// Copy of this layer with a different opacity.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self {
            opacity,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/model.rs"]
mod tests;
