//! Input adapters turning source-specific gradient records into [`GradientDescriptor`]s.

pub mod structured;
pub mod svg;
pub mod transform_list;

use crate::{
    foundation::core::{Affine, Vec2},
    foundation::error::ParseError,
    layer::model::{GradientDescriptor, GradientFamily},
    transform::affine::normalized_axis_angle_deg,
};

pub use structured::{StructuredGradient, StructuredMatrixAdapter, parse_family_tag};
pub use transform_list::{TransformListAdapter, TransformListGradient, parse_transform_list};

/// Viewport context a gradient record is read against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceFrame {
    /// Shape width in viewport units.
    pub width: f64,
    /// Shape height in viewport units.
    pub height: f64,
    /// Viewport position of the shape's top-left corner.
    pub bounds_offset: Vec2,
}

impl SourceFrame {
    /// Frame for a shape of `width x height` placed at `bounds_offset`.
    pub const fn new(width: f64, height: f64, bounds_offset: Vec2) -> Self {
        Self {
            width,
            height,
            bounds_offset,
        }
    }
}

/// One source gradient format.
pub trait GradientAdapter {
    /// Raw record type.
    type Input: ?Sized;

    /// Read `raw` into a shape-local descriptor.
    fn parse(&self, raw: &Self::Input, frame: &SourceFrame)
    -> Result<GradientDescriptor, ParseError>;
}

pub(crate) fn sweep_rotation_for(
    family: GradientFamily,
    viewport_transform: Affine,
    frame: &SourceFrame,
) -> Option<f64> {
    (family == GradientFamily::Angular)
        .then(|| normalized_axis_angle_deg(viewport_transform, frame.width, frame.height))
}

/// Gradient record in any supported source format.
///
/// Records carrying `transform` are transform lists; records carrying `matrix` are structured.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum GradientSource {
    /// SVG-style transform list.
    TransformList(TransformListGradient),
    /// Design-tool matrix record.
    Structured(StructuredGradient),
}

impl GradientSource {
    /// Parse with the matching adapter.
    pub fn parse(&self, frame: &SourceFrame) -> Result<GradientDescriptor, ParseError> {
        match self {
            Self::TransformList(raw) => TransformListAdapter.parse(raw, frame),
            Self::Structured(raw) => StructuredMatrixAdapter.parse(raw, frame),
        }
    }

    /// Identity-transform descriptor keeping whatever family and stops can still be read.
    pub fn fallback(&self) -> GradientDescriptor {
        match self {
            Self::TransformList(raw) => GradientDescriptor::identity(
                raw.family,
                raw.stops
                    .iter()
                    .filter_map(|s| s.to_color_stop().ok())
                    .collect(),
            ),
            Self::Structured(raw) => GradientDescriptor::identity(
                parse_family_tag(&raw.family_tag).unwrap_or(GradientFamily::Linear),
                raw.stops
                    .iter()
                    .filter_map(|s| s.to_color_stop().ok())
                    .collect(),
            ),
        }
    }
}

/// Parse `source`, degrading to [`GradientSource::fallback`] on failure.
///
/// A malformed record never aborts a conversion; the failure is logged at warn level.
pub fn resolve_gradient(source: &GradientSource, frame: &SourceFrame) -> GradientDescriptor {
    match source.parse(frame) {
        Ok(desc) => desc,
        Err(err) => {
            tracing::warn!(%err, "gradient could not be read, using identity transform");
            source.fallback()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapters/resolve.rs"]
mod tests;
