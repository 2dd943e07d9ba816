//! Design-tool gradient records: a raw 2x3 matrix plus float RGBA stops.

use crate::{
    adapters::{GradientAdapter, SourceFrame, sweep_rotation_for},
    foundation::core::{Rgba8, Vec2},
    foundation::error::ParseError,
    layer::model::{ColorStop, GradientDescriptor, GradientFamily},
    transform::affine::{self, from_coeffs},
};

/// Matrix coefficients in `[a b c d tx ty]` order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatrixFields {
    /// Primary axis x.
    pub a: f64,
    /// Primary axis y.
    pub b: f64,
    /// Secondary axis x.
    pub c: f64,
    /// Secondary axis y.
    pub d: f64,
    /// Translation x.
    pub tx: f64,
    /// Translation y.
    pub ty: f64,
}

/// Stop with `[0, 1]` float channels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructuredStop {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    #[serde(default = "one")]
    pub a: f64,
    /// Position as a fraction in `[0, 1]`.
    pub position: f64,
}

fn one() -> f64 {
    1.0
}

impl StructuredStop {
    pub(crate) fn to_color_stop(self) -> Result<ColorStop, ParseError> {
        let channels = [self.r, self.g, self.b, self.a, self.position];
        if channels.iter().any(|v| !v.is_finite()) {
            return Err(ParseError::NonFinite("gradient stop"));
        }
        Ok(ColorStop::new(
            Rgba8::from_unit(self.r, self.g, self.b, self.a),
            self.position * 100.0,
        ))
    }
}

/// Gradient record as exported by the design tool.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructuredGradient {
    /// Family tag such as `GRADIENT_LINEAR`.
    #[serde(rename = "type")]
    pub family_tag: String,
    /// Gradient-unit-space to viewport matrix.
    pub matrix: MatrixFields,
    /// Stops in document order.
    #[serde(default)]
    pub stops: Vec<StructuredStop>,
    /// Overrides the frame's bounds offset for this gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds_offset: Option<Vec2>,
}

/// Map a `GRADIENT_*` tag (case-insensitive, prefix optional) to a family.
pub fn parse_family_tag(tag: &str) -> Result<GradientFamily, ParseError> {
    let upper = tag.trim().to_ascii_uppercase();
    let bare = upper.strip_prefix("GRADIENT_").unwrap_or(&upper);
    match bare {
        "LINEAR" => Ok(GradientFamily::Linear),
        "RADIAL" => Ok(GradientFamily::Radial),
        "ANGULAR" => Ok(GradientFamily::Angular),
        "DIAMOND" => Ok(GradientFamily::Diamond),
        _ => Err(ParseError::UnknownFamily(tag.to_owned())),
    }
}

/// Adapter for [`StructuredGradient`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuredMatrixAdapter;

impl GradientAdapter for StructuredMatrixAdapter {
    type Input = StructuredGradient;

    fn parse(
        &self,
        raw: &StructuredGradient,
        frame: &SourceFrame,
    ) -> Result<GradientDescriptor, ParseError> {
        let family = parse_family_tag(&raw.family_tag)?;
        let MatrixFields { a, b, c, d, tx, ty } = raw.matrix;
        let transform = from_coeffs(a, b, c, d, tx, ty);
        if !affine::is_finite(transform) {
            return Err(ParseError::NonFinite("gradient matrix"));
        }
        let stops = raw
            .stops
            .iter()
            .map(|s| s.to_color_stop())
            .collect::<Result<Vec<_>, _>>()?;
        let offset = raw.bounds_offset.unwrap_or(frame.bounds_offset);

        Ok(GradientDescriptor::from_viewport(
            family,
            stops,
            transform,
            offset,
            sweep_rotation_for(family, transform, frame),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapters/structured.rs"]
mod tests;
