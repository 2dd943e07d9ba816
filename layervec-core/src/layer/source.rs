//! JSON layer documents.

use crate::{
    adapters::{GradientSource, SourceFrame, resolve_gradient},
    foundation::core::Vec2,
    foundation::error::{LayervecError, LayervecResult},
    layer::model::{
        CornerRadii, Fill, FillKind, FillOrder, Layer, Shadow, ShadowKind, ShapeEnvelope,
    },
    paint::color::ColorDef,
};

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

fn default_name() -> String {
    "Layer".to_owned()
}

/// Layer document as written on disk.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerDef {
    /// Layer name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Shape width.
    pub width: f64,
    /// Shape height.
    pub height: f64,
    /// Uniform corner radius; `corner_radii` wins when both are present.
    #[serde(default)]
    pub corner_radius: Option<f64>,
    /// Per-corner radii.
    #[serde(default)]
    pub corner_radii: Option<CornerRadii>,
    /// Whole-layer opacity.
    #[serde(default = "one")]
    pub opacity: f64,
    /// How `fills` is ordered.
    #[serde(default)]
    pub fill_order: FillOrder,
    /// Viewport position of the shape, subtracted from every gradient transform.
    #[serde(default)]
    pub bounds_offset: Vec2,
    /// Fill stack.
    #[serde(default)]
    pub fills: Vec<FillDef>,
    /// Shadows in paint order.
    #[serde(default)]
    pub shadows: Vec<ShadowDef>,
}

/// One fill entry.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FillDef {
    /// Flat color.
    Solid {
        /// Color.
        color: ColorDef,
        /// Fill opacity.
        #[serde(default = "one")]
        opacity: f64,
        /// Visibility.
        #[serde(default = "yes")]
        visible: bool,
    },
    /// Gradient in any supported source format.
    Gradient {
        /// Gradient record.
        gradient: GradientSource,
        /// Fill opacity.
        #[serde(default = "one")]
        opacity: f64,
        /// Visibility.
        #[serde(default = "yes")]
        visible: bool,
    },
}

/// One shadow entry.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ShadowDef {
    /// `drop` or `inner`.
    #[serde(rename = "type")]
    pub kind: ShadowKind,
    /// Horizontal offset.
    #[serde(default)]
    pub x: f64,
    /// Vertical offset.
    #[serde(default)]
    pub y: f64,
    /// Blur radius.
    #[serde(default)]
    pub blur: f64,
    /// Spread.
    #[serde(default)]
    pub spread: f64,
    /// Color.
    pub color: ColorDef,
    /// Visibility.
    #[serde(default = "yes")]
    pub visible: bool,
}

impl LayerDef {
    /// Resolve gradients and normalize ordering into a [`Layer`].
    ///
    /// Unreadable gradients degrade to identity descriptors; only structural problems (bad size,
    /// non-finite opacities) are errors.
    pub fn into_layer(self) -> LayervecResult<Layer> {
        let radii = match (self.corner_radii, self.corner_radius) {
            (Some(r), _) => r,
            (None, Some(r)) => CornerRadii::uniform(r),
            (None, None) => CornerRadii::default(),
        };
        let frame = SourceFrame::new(self.width, self.height, self.bounds_offset);

        let fills = self
            .fills
            .into_iter()
            .map(|def| match def {
                FillDef::Solid {
                    color,
                    opacity,
                    visible,
                } => Fill {
                    kind: FillKind::Solid(color.0),
                    opacity,
                    visible,
                },
                FillDef::Gradient {
                    gradient,
                    opacity,
                    visible,
                } => Fill {
                    kind: FillKind::Gradient(resolve_gradient(&gradient, &frame)),
                    opacity,
                    visible,
                },
            })
            .collect();

        let shadows = self
            .shadows
            .into_iter()
            .map(|s| Shadow {
                kind: s.kind,
                dx: s.x,
                dy: s.y,
                blur: s.blur.max(0.0),
                spread: s.spread,
                color: s.color.0,
                visible: s.visible,
            })
            .collect();

        let layer = Layer {
            name: self.name,
            envelope: ShapeEnvelope::new(self.width, self.height, radii),
            fills: self.fill_order.into_bottom_first(fills),
            shadows,
            opacity: self.opacity,
        };
        layer.validate()?;
        Ok(layer)
    }
}

/// Parse a JSON layer document.
pub fn layer_from_json(json: &str) -> LayervecResult<Layer> {
    let def: LayerDef = serde_json::from_str(json)
        .map_err(|e| LayervecError::serde(format!("layer json: {e}")))?;
    def.into_layer()
}

#[cfg(test)]
#[path = "../../tests/unit/layer/source.rs"]
mod tests;
