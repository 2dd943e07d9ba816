//! Layervec converts design-tool layers into Android drawables.
//!
//! A layer is a rounded rectangle with a stack of fills and box shadows. Solid fills, shadows and
//! the outline map onto the target almost directly; gradients do not. The target only draws
//! axis ramps, circular radials and circular sweeps, so every gradient transform is rewritten as
//! nested `translate -> rotate -> scale` groups around one of those primitives, painted over an
//! oversized region and clipped back to the shape.
//!
//! # Pipeline overview
//!
//! 1. **Read**: a JSON layer document ([`layer_from_json`]) or clipboard SVG
//!    ([`import_svg_layer`]) becomes a [`Layer`]. Gradient records go through a
//!    [`GradientAdapter`] into shape-local [`GradientDescriptor`]s.
//! 2. **Re-project**: [`reproject`] turns each descriptor into a [`FillTree`].
//! 3. **Compile**: [`compile_layer`] builds a [`VectorDocument`] with shadows, clip, fills and
//!    inner shadows in paint order.
//! 4. **Emit**: [`to_xml`] serializes `<vector>`; [`to_shape_xml`] is the `<shape>` fallback.
//!
//! Conversions are pure. Generated node names come from an explicit [`IdCounter`] that callers
//! pass in and get back, so equal inputs produce byte-identical output.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adapters;
mod compile;
mod emit;
mod foundation;
mod geometry;
mod layer;
mod paint;
mod pipeline;
mod reproject;

/// Walkthrough of the data model and conversion stages.
pub mod guide;
/// Affine helpers and angle utilities.
pub mod transform;

pub use adapters::svg::import_svg_layer;
pub use adapters::{
    GradientAdapter, GradientSource, SourceFrame, StructuredGradient, StructuredMatrixAdapter,
    TransformListAdapter, TransformListGradient, parse_family_tag, parse_transform_list,
    resolve_gradient,
};
pub use adapters::structured::{MatrixFields, StructuredStop};
pub use adapters::transform_list::SvgStop;
pub use compile::plan::{
    ClipPathNode, FillType, GradientNode, GroupNode, Node, PathFill, PathNode, VectorDocument,
    compile_layer, fill_node, gradient_node,
};
pub use emit::shape_xml::to_shape_xml;
pub use emit::vector_xml::{nodes_to_xml, to_xml};
pub use foundation::core::{Affine, IdCounter, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{LayervecError, LayervecResult, ParseError};
pub use geometry::shape::{
    clamp_radii, offset_outline, outline_path, rect_path, ring_path, rounded_rect_path,
};
pub use layer::model::{
    ColorStop, CornerRadii, Fill, FillKind, FillOrder, GradientDescriptor, GradientFamily, Layer,
    Shadow, ShadowKind, ShapeEnvelope,
};
pub use layer::source::{FillDef, LayerDef, ShadowDef, layer_from_json};
pub use paint::color::{ColorDef, parse_color};
pub use paint::stops::{
    ThreeStop, default_stops, endpoints_only, fix_transparent_stops, pad_boundary_stops,
    resolve_stops, sample_at, sort_stops, three_stop, transparent_color_fix, trim_to_unit_range,
};
pub use pipeline::{
    ConvertOpts, ConvertOutput, MAX_SHADOW_BLUR_STEPS, TargetCaps, convert_json, convert_layer,
    convert_svg, encode_gradient,
};
pub use reproject::engine::{
    ContainerNode, DEFAULT_SWEEP_ZERO_OFFSET_DEG, EngineOpts, FillTree, MIN_COVERAGE_FACTOR,
    Primitive, reproject,
};
