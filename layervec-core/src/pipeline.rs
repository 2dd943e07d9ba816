use crate::{
    adapters::svg::import_svg_layer,
    compile::plan::{compile_layer, gradient_node},
    emit::{shape_xml::to_shape_xml, vector_xml},
    foundation::core::IdCounter,
    foundation::error::LayervecResult,
    layer::model::{GradientDescriptor, Layer, ShapeEnvelope},
    layer::source::layer_from_json,
    reproject::engine::{DEFAULT_SWEEP_ZERO_OFFSET_DEG, MIN_COVERAGE_FACTOR},
};

/// Upper bound on the copies drawn for one blurred shadow.
pub const MAX_SHADOW_BLUR_STEPS: u32 = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// What the output format can express.
pub struct TargetCaps {
    /// Sweep gradients with more stops than this degrade to their end colors.
    pub max_sweep_stops: Option<usize>,
    /// Emit a `<shape>` drawable (one paint, three stops) instead of a `<vector>`.
    pub shape_drawable: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Options for one conversion.
///
/// Every field has a default, so a config file only needs the keys it changes.
pub struct ConvertOpts {
    /// Gradient draw-region size as a multiple of the shape's larger side (at least 4).
    pub coverage_factor: f64,
    /// Rotation of the angular sweep's zero angle, in degrees.
    pub sweep_zero_offset_deg: f64,
    /// Copies used to approximate a shadow blur, clamped to `1..=`[`MAX_SHADOW_BLUR_STEPS`].
    pub shadow_blur_steps: u32,
    /// Combined opacity of all blur copies.
    pub shadow_blur_alpha: f64,
    /// Emit XML comments describing each fill and shadow.
    pub emit_comments: bool,
    /// Prefix for generated node names; empty for bare role names.
    pub id_prefix: String,
    /// Output capabilities.
    pub target: TargetCaps,
}

impl Default for ConvertOpts {
    fn default() -> Self {
        Self {
            coverage_factor: MIN_COVERAGE_FACTOR,
            sweep_zero_offset_deg: DEFAULT_SWEEP_ZERO_OFFSET_DEG,
            shadow_blur_steps: 3,
            shadow_blur_alpha: 0.4,
            emit_comments: false,
            id_prefix: String::new(),
            target: TargetCaps::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Serialized drawable plus the advanced name counter.
pub struct ConvertOutput {
    /// Drawable XML.
    pub xml: String,
    /// Counter to pass to the next conversion.
    pub ids: IdCounter,
}

#[tracing::instrument(skip(layer, opts), fields(layer = %layer.name))]
/// Convert an in-memory layer.
pub fn convert_layer(
    layer: &Layer,
    opts: &ConvertOpts,
    ids: IdCounter,
) -> LayervecResult<ConvertOutput> {
    layer.validate()?;

    if opts.target.shape_drawable {
        let visible: Vec<_> = layer.fills.iter().filter(|f| f.visible).collect();
        if visible.len() > 1 {
            tracing::debug!(
                dropped = visible.len() - 1,
                "shape drawables hold one paint, keeping the topmost fill"
            );
        }
        return Ok(ConvertOutput {
            xml: to_shape_xml(layer, visible.last().copied(), opts),
            ids,
        });
    }

    let (doc, ids) = compile_layer(layer, opts, ids);
    tracing::debug!(nodes = doc.children.len(), next_id = ids.value(), "compiled layer");
    Ok(ConvertOutput {
        xml: vector_xml::to_xml(&doc),
        ids,
    })
}

#[tracing::instrument(skip(json, opts))]
/// Parse a JSON layer document and convert it.
pub fn convert_json(
    json: &str,
    opts: &ConvertOpts,
    ids: IdCounter,
) -> LayervecResult<ConvertOutput> {
    let layer = layer_from_json(json)?;
    convert_layer(&layer, opts, ids)
}

#[tracing::instrument(skip(svg, opts))]
/// Import clipboard SVG and convert it.
pub fn convert_svg(
    svg: &str,
    opts: &ConvertOpts,
    ids: IdCounter,
) -> LayervecResult<ConvertOutput> {
    let layer = import_svg_layer(svg)?;
    convert_layer(&layer, opts, ids)
}

/// Encode one gradient as a `<group>`/`<path>` fragment for `envelope`.
///
/// The fragment carries no clip; callers place it inside their own clipped group.
pub fn encode_gradient(
    desc: &GradientDescriptor,
    envelope: &ShapeEnvelope,
    opts: &ConvertOpts,
    ids: IdCounter,
) -> (String, IdCounter) {
    let mut ids = ids;
    let node = gradient_node(desc, envelope, opts, &mut ids, 1.0);
    (vector_xml::nodes_to_xml(&[node], 0), ids)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
