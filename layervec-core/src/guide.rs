//! # Layervec guide
//!
//! ## Data model
//!
//! A [`Layer`](crate::Layer) is a [`ShapeEnvelope`](crate::ShapeEnvelope) (width, height and four
//! corner radii, anchored at the origin), a bottom-first stack of [`Fill`](crate::Fill)s, a list
//! of [`Shadow`](crate::Shadow)s and a layer opacity.
//!
//! Gradient fills carry a [`GradientDescriptor`](crate::GradientDescriptor): a family, color
//! stops in percent, and an affine transform mapping the family's unit primitive into
//! shape-local coordinates. For linear gradients the unit primitive is the segment
//! `(0,0) -> (1,0)`; for the others it is the unit circle around the origin.
//!
//! ## Sources
//!
//! Gradient records arrive in one of two shapes, both read by a
//! [`GradientAdapter`](crate::GradientAdapter):
//!
//! - a transform list such as `translate(160 32) rotate(15) scale(160 32)`, folded left to right;
//! - a structured record with six matrix fields, a `GRADIENT_*` tag and `[0, 1]` float stops.
//!
//! Both are expressed in viewport coordinates. Adapters subtract the shape's viewport position
//! (`bounds_offset`) so descriptors are shape-local. Angular gradients also record the sweep
//! angle measured after dividing the primary axis by the shape size, because the design tool
//! squashes the unit circle into the shape's bounding box.
//!
//! A record that cannot be read does not fail the conversion:
//! [`resolve_gradient`](crate::resolve_gradient) logs a warning and substitutes an identity
//! transform, keeping whatever stops were readable.
//!
//! ```
//! use layervec::{SourceFrame, TransformListAdapter, TransformListGradient, GradientAdapter,
//!     GradientFamily, Vec2};
//!
//! let raw = TransformListGradient {
//!     family: GradientFamily::Radial,
//!     transform: "translate(170 32) scale(160 32)".to_owned(),
//!     stops: Vec::new(),
//!     bounds_offset: None,
//! };
//! let frame = SourceFrame::new(320.0, 64.0, Vec2::new(10.0, 0.0));
//! let desc = TransformListAdapter.parse(&raw, &frame).unwrap();
//! assert_eq!(desc.transform.as_coeffs(), [160.0, 0.0, 0.0, 32.0, 160.0, 32.0]);
//! ```
//!
//! ## Re-projection
//!
//! [`reproject`](crate::reproject) decomposes the transform into rotation, per-axis scale and
//! translation and rebuilds it from target-native parts:
//!
//! | family  | containers (outer to inner)                    | primitive                  |
//! |---------|------------------------------------------------|----------------------------|
//! | linear  | none                                           | ramp from `M(0,0)` to `M(1,0)` |
//! | radial  | translate(center), rotate, scale(1, sy/sx)      | circle of radius `sx`      |
//! | diamond | as radial, rotated a further 45 degrees         | circle of radius `sx`      |
//! | angular | as radial, then rotate(zero offset)            | sweep around the origin    |
//!
//! Identity containers are dropped. The primitive is painted over a square large enough to
//! cover the shape after the containers are applied; the shape's clip path trims the rest.
//! Degenerate scales are clamped to a small positive minimum so no output number is NaN or
//! infinite.
//!
//! ## Output
//!
//! [`convert_layer`](crate::convert_layer) compiles and serializes in one step:
//!
//! ```
//! use layervec::{ConvertOpts, IdCounter, convert_json};
//!
//! let json = r##"{"width": 100, "height": 40, "corner_radius": 20,
//!     "fills": [{"type": "solid", "color": "#3366ff"}]}"##;
//! let out = convert_json(json, &ConvertOpts::default(), IdCounter::new(0)).unwrap();
//! assert!(out.xml.contains("android:fillColor=\"#FF3366FF\""));
//! assert_eq!(out.ids.value(), 3);
//! ```
//!
//! Set [`TargetCaps::shape_drawable`](crate::TargetCaps) for the `<shape>` fallback. It keeps the
//! topmost fill only and reduces gradients to start, center and end colors, where the center is
//! sampled from the ramp at 50%.
