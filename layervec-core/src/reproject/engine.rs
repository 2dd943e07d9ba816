//! Gradient coordinate re-projection.
//!
//! The target format only draws axis-aligned linear ramps, circular radials and circular
//! sweeps, all in the local space of whatever groups wrap them. An arbitrary gradient transform
//! is therefore rewritten as `translate -> rotate -> scale` groups around one of those
//! primitives, and the primitive is painted over a region large enough that the shape's clip
//! never reveals its edge.

use crate::{
    foundation::core::{Affine, Point, Rect, Vec2},
    foundation::math::{EPSILON, MIN_SCALE, at_least},
    layer::model::{ColorStop, GradientDescriptor, GradientFamily, ShapeEnvelope},
    paint::stops::resolve_stops,
    transform::{affine, non_linear::normalize_degrees},
};

/// Smallest accepted coverage factor.
pub const MIN_COVERAGE_FACTOR: f64 = 4.0;

/// Sweep zero-angle offset between the source's convention and the target's, in degrees.
pub const DEFAULT_SWEEP_ZERO_OFFSET_DEG: f64 = -90.0;

/// Engine tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineOpts {
    /// Draw-region side as a multiple of the shape's larger dimension; clamped to at least
    /// [`MIN_COVERAGE_FACTOR`].
    pub coverage_factor: f64,
    /// Rotation of the sweep's zero angle, applied innermost so it does not turn the ellipse.
    pub sweep_zero_offset_deg: f64,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            coverage_factor: MIN_COVERAGE_FACTOR,
            sweep_zero_offset_deg: DEFAULT_SWEEP_ZERO_OFFSET_DEG,
        }
    }
}

/// One wrapping group: translate, then rotate, then scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ContainerNode {
    /// Translation in the parent's space.
    pub translate: Vec2,
    /// Rotation in degrees.
    pub rotate_deg: f64,
    /// Per-axis scale.
    pub scale: Vec2,
}

impl ContainerNode {
    const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        rotate_deg: 0.0,
        scale: Vec2::new(1.0, 1.0),
    };

    /// Pure translation.
    pub fn translate(v: Vec2) -> Self {
        Self {
            translate: v,
            ..Self::IDENTITY
        }
    }

    /// Pure rotation.
    pub fn rotate(deg: f64) -> Self {
        Self {
            rotate_deg: deg,
            ..Self::IDENTITY
        }
    }

    /// Pure non-uniform scale.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            scale: Vec2::new(sx, sy),
            ..Self::IDENTITY
        }
    }

    /// `T * R * S`.
    pub fn to_affine(&self) -> Affine {
        affine::fold([
            Affine::translate(self.translate),
            affine::rotate_deg(self.rotate_deg),
            Affine::scale_non_uniform(self.scale.x, self.scale.y),
        ])
    }

    /// `true` when the group would not move anything.
    pub fn is_identity(&self) -> bool {
        self.translate.hypot() < EPSILON
            && normalize_degrees(self.rotate_deg).abs() < EPSILON
            && (self.scale.x - 1.0).abs() < EPSILON
            && (self.scale.y - 1.0).abs() < EPSILON
    }
}

/// Gradient shape the target can draw directly, in the innermost container's space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Primitive {
    /// Axis ramp from `start` (offset 0) to `end` (offset 100).
    Linear {
        /// Ramp start.
        start: Point,
        /// Ramp end.
        end: Point,
    },
    /// Circular ramp.
    Radial {
        /// Center.
        center: Point,
        /// Radius, always finite and positive.
        radius: f64,
    },
    /// Circular sweep starting at the positive x axis.
    Sweep {
        /// Center.
        center: Point,
    },
}

/// Re-projected fill: containers (outermost first) around a primitive painted over
/// `draw_region`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FillTree {
    /// Source family.
    pub family: GradientFamily,
    /// Wrapping groups, outermost first. Identity groups are omitted.
    pub containers: Vec<ContainerNode>,
    /// Leaf gradient.
    pub primitive: Primitive,
    /// Rectangle to fill, in the innermost container's space.
    pub draw_region: Rect,
    /// Resolved stops, offsets in `[0, 100]`.
    pub stops: Vec<ColorStop>,
}

impl FillTree {
    /// Product of all containers, mapping innermost space to shape space.
    pub fn container_affine(&self) -> Affine {
        affine::fold(self.containers.iter().map(ContainerNode::to_affine))
    }
}

/// Rewrite `desc` as containers around a target-native primitive.
///
/// Never fails: non-finite transforms are replaced by identity and degenerate scales are
/// clamped to [`MIN_SCALE`], so every emitted number is finite.
#[tracing::instrument(level = "debug", skip(desc, envelope), fields(family = ?desc.family))]
pub fn reproject(desc: &GradientDescriptor, envelope: &ShapeEnvelope, opts: &EngineOpts) -> FillTree {
    let m = if affine::is_finite(desc.transform) {
        desc.transform
    } else {
        tracing::warn!("non-finite gradient transform, using identity");
        affine::identity()
    };
    let stops = resolve_stops(&desc.stops);
    let coverage = if opts.coverage_factor.is_finite() {
        opts.coverage_factor.max(MIN_COVERAGE_FACTOR)
    } else {
        MIN_COVERAGE_FACTOR
    };
    // Zero-size shapes still get a finite, non-empty region.
    let extent = envelope.max_dim().max(1.0);
    let shape_center = envelope.center();

    if desc.family == GradientFamily::Linear {
        let start = affine::map_point(m, Point::ORIGIN);
        let mut end = affine::map_point(m, Point::new(1.0, 0.0));
        if start.distance(end) < MIN_SCALE {
            tracing::debug!("degenerate linear axis, nudging end point");
            end = start + Vec2::new(MIN_SCALE, 0.0);
        }
        let half = coverage * extent / 2.0;
        return FillTree {
            family: desc.family,
            containers: Vec::new(),
            primitive: Primitive::Linear { start, end },
            draw_region: square(shape_center, half),
            stops,
        };
    }

    let d = affine::decompose(m);
    let radius = at_least(d.scale_x, MIN_SCALE, MIN_SCALE);
    let aspect = at_least(d.scale_y / radius, MIN_SCALE, MIN_SCALE);
    let rotation = match desc.family {
        GradientFamily::Angular => desc.sweep_rotation_deg.unwrap_or(d.rotation_deg),
        GradientFamily::Diamond => d.rotation_deg + 45.0,
        _ => d.rotation_deg,
    };
    // The zero-angle offset turns the sweep inside the squeezed frame, leaving the ellipse alone.
    let zero_offset = match desc.family {
        GradientFamily::Angular => opts.sweep_zero_offset_deg,
        _ => 0.0,
    };
    let center = affine::map_point(m, Point::ORIGIN);

    let containers: Vec<ContainerNode> = [
        ContainerNode::translate(center.to_vec2()),
        ContainerNode::rotate(normalize_degrees(rotation)),
        ContainerNode::scale(1.0, aspect),
        ContainerNode::rotate(normalize_degrees(zero_offset)),
    ]
    .into_iter()
    .filter(|c| !c.is_identity())
    .collect();

    // Rendered half-size needed to cover the shape from the gradient center, brought into the
    // innermost space where the squeezed axis shrinks it.
    let rendered_half = coverage * extent / 2.0 + center.distance(shape_center);
    let local_half = rendered_half / aspect.min(1.0);

    let primitive = if desc.family == GradientFamily::Angular {
        Primitive::Sweep {
            center: Point::ORIGIN,
        }
    } else {
        Primitive::Radial {
            center: Point::ORIGIN,
            radius,
        }
    };

    FillTree {
        family: desc.family,
        containers,
        primitive,
        draw_region: square(Point::ORIGIN, local_half),
        stops,
    }
}

fn square(center: Point, half: f64) -> Rect {
    Rect::new(
        center.x - half,
        center.y - half,
        center.x + half,
        center.y + half,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/reproject/engine.rs"]
mod tests;
