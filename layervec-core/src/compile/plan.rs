//! Layer to drawable node tree, in paint order.

use crate::{
    foundation::core::{IdCounter, Rgba8, Vec2},
    geometry::shape::{offset_outline, outline_path, rect_path, ring_path, rounded_rect_path},
    layer::model::{
        ColorStop, CornerRadii, Fill, FillKind, GradientDescriptor, GradientFamily, Layer, Shadow,
        ShadowKind, ShapeEnvelope,
    },
    paint::stops::endpoints_only,
    pipeline::{ConvertOpts, MAX_SHADOW_BLUR_STEPS},
    reproject::engine::{ContainerNode, EngineOpts, Primitive, reproject},
    transform::non_linear::clamp01,
};

#[derive(Clone, Debug, PartialEq)]
/// Target-format drawable before serialization.
///
/// Children are in paint order: earlier nodes are drawn first.
pub struct VectorDocument {
    /// Source layer name.
    pub name: String,
    /// Intrinsic width (also the viewport width).
    pub width: f64,
    /// Intrinsic height (also the viewport height).
    pub height: f64,
    /// Root opacity.
    pub alpha: f64,
    /// Optional comment emitted before the root element.
    pub header_comment: Option<String>,
    /// Top-level nodes.
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
/// One drawable node.
pub enum Node {
    /// Transform group.
    Group(GroupNode),
    /// Filled path.
    Path(PathNode),
    /// Clip applying to later siblings and their descendants.
    ClipPath(ClipPathNode),
    /// XML comment.
    Comment(String),
}

#[derive(Clone, Debug, PartialEq)]
/// `<group>`.
pub struct GroupNode {
    /// Optional `android:name`.
    pub name: Option<String>,
    /// Group transform.
    pub container: ContainerNode,
    /// Children in paint order.
    pub children: Vec<Node>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Path winding rule.
pub enum FillType {
    /// Non-zero winding.
    NonZero,
    /// Even-odd winding.
    EvenOdd,
}

#[derive(Clone, Debug, PartialEq)]
/// Paint of a path.
pub enum PathFill {
    /// Flat color.
    Color(Rgba8),
    /// Gradient in the path's local space.
    Gradient(GradientNode),
}

#[derive(Clone, Debug, PartialEq)]
/// Target-native gradient.
pub struct GradientNode {
    /// Geometry.
    pub primitive: Primitive,
    /// Stops with offsets in `[0, 100]`.
    pub items: Vec<ColorStop>,
}

#[derive(Clone, Debug, PartialEq)]
/// `<path>`.
pub struct PathNode {
    /// Optional `android:name`.
    pub name: Option<String>,
    /// SVG path data.
    pub path_data: String,
    /// Paint.
    pub fill: PathFill,
    /// Extra opacity in `[0, 1]`.
    pub fill_alpha: f64,
    /// Winding rule.
    pub fill_type: FillType,
}

#[derive(Clone, Debug, PartialEq)]
/// `<clip-path>`.
pub struct ClipPathNode {
    /// Optional `android:name`.
    pub name: Option<String>,
    /// SVG path data.
    pub path_data: String,
}

impl ConvertOpts {
    pub(crate) fn engine(&self) -> EngineOpts {
        EngineOpts {
            coverage_factor: self.coverage_factor,
            sweep_zero_offset_deg: self.sweep_zero_offset_deg,
        }
    }

    fn node_name(&self, ids: &mut IdCounter, role: &str) -> String {
        if self.id_prefix.is_empty() {
            ids.next_name(role)
        } else {
            ids.next_name(&format!("{}_{role}", self.id_prefix))
        }
    }
}

/// Build the drawable tree for `layer`.
///
/// Paint order: drop shadows, then a clipped group holding the fill stack (bottom-first) and
/// inner shadows. Names are drawn from `ids`, which is returned advanced.
pub fn compile_layer(
    layer: &Layer,
    opts: &ConvertOpts,
    ids: IdCounter,
) -> (VectorDocument, IdCounter) {
    let mut ids = ids;
    let envelope = &layer.envelope;
    let mut children = Vec::new();

    for shadow in layer.shadows.iter().filter(|s| drawable_shadow(s, ShadowKind::Drop)) {
        if opts.emit_comments {
            children.push(Node::Comment(format!(
                "drop shadow {},{} blur {}",
                shadow.dx, shadow.dy, shadow.blur
            )));
        }
        children.extend(drop_shadow_paths(shadow, envelope, opts, &mut ids));
    }

    let mut content = Vec::new();
    if envelope.is_degenerate() {
        tracing::warn!(
            layer = %layer.name,
            width = envelope.width,
            height = envelope.height,
            "degenerate shape, skipping clip path"
        );
    } else {
        content.push(Node::ClipPath(ClipPathNode {
            name: Some(opts.node_name(&mut ids, "clip")),
            path_data: outline_path(envelope),
        }));
    }

    for (i, fill) in layer.fills.iter().enumerate() {
        if !fill.visible {
            tracing::debug!(index = i, "skipping hidden fill");
            continue;
        }
        if opts.emit_comments {
            content.push(Node::Comment(fill_comment(i, fill)));
        }
        content.push(fill_node(fill, envelope, opts, &mut ids));
    }

    for shadow in layer.shadows.iter().filter(|s| drawable_shadow(s, ShadowKind::Inner)) {
        if opts.emit_comments {
            content.push(Node::Comment(format!(
                "inner shadow {},{} blur {}",
                shadow.dx, shadow.dy, shadow.blur
            )));
        }
        content.extend(inner_shadow_paths(shadow, envelope, opts, &mut ids));
    }

    children.push(Node::Group(GroupNode {
        name: Some(opts.node_name(&mut ids, "content")),
        container: ContainerNode::translate(Vec2::ZERO),
        children: content,
    }));

    let doc = VectorDocument {
        name: layer.name.clone(),
        width: envelope.width,
        height: envelope.height,
        alpha: clamp01(layer.opacity),
        header_comment: opts
            .emit_comments
            .then(|| format!("layer: {}", layer.name)),
        children,
    };
    (doc, ids)
}

/// Drawable node for one fill: a rectangle path for solids, nested groups around a gradient
/// path otherwise.
pub fn fill_node(
    fill: &Fill,
    envelope: &ShapeEnvelope,
    opts: &ConvertOpts,
    ids: &mut IdCounter,
) -> Node {
    let opacity = clamp01(fill.opacity);
    match &fill.kind {
        FillKind::Solid(color) => Node::Path(PathNode {
            name: Some(opts.node_name(ids, "fill")),
            path_data: rect_path(envelope.bounds()),
            fill: PathFill::Color(*color),
            fill_alpha: opacity,
            fill_type: FillType::NonZero,
        }),
        FillKind::Gradient(desc) => gradient_node(desc, envelope, opts, ids, opacity),
    }
}

/// Nested groups around a gradient-filled path for `desc`.
pub fn gradient_node(
    desc: &GradientDescriptor,
    envelope: &ShapeEnvelope,
    opts: &ConvertOpts,
    ids: &mut IdCounter,
    opacity: f64,
) -> Node {
    let tree = reproject(desc, envelope, &opts.engine());
    let name = opts.node_name(ids, "gradient");

    let mut items = tree.stops;
    if tree.family == GradientFamily::Angular
        && let Some(max) = opts.target.max_sweep_stops
        && items.len() > max
    {
        tracing::debug!(
            stops = items.len(),
            max,
            "target sweep gradients are limited, keeping end colors only"
        );
        items = endpoints_only(&items);
    }

    let mut node = Node::Path(PathNode {
        name: Some(name.clone()),
        path_data: rect_path(tree.draw_region),
        fill: PathFill::Gradient(GradientNode {
            primitive: tree.primitive,
            items,
        }),
        fill_alpha: opacity,
        fill_type: FillType::NonZero,
    });

    for (depth, container) in tree.containers.iter().enumerate().rev() {
        node = Node::Group(GroupNode {
            name: Some(format!("{name}_g{depth}")),
            container: *container,
            children: vec![node],
        });
    }
    node
}

fn drawable_shadow(shadow: &Shadow, kind: ShadowKind) -> bool {
    if shadow.kind != kind || !shadow.visible {
        return false;
    }
    let finite = [shadow.dx, shadow.dy, shadow.blur, shadow.spread]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        tracing::debug!("skipping shadow with non-finite geometry");
    }
    finite
}

// Concentric copies approximating a blur: copy `i` of `n` is grown by `blur/2 * (n-1-i)/(n-1)`
// and all copies share one alpha so that `n` stacked copies reach `shadow_blur_alpha`.
fn blur_copies(blur: f64, opts: &ConvertOpts) -> (Vec<f64>, f64) {
    if blur <= 0.0 {
        return (vec![0.0], 1.0);
    }
    let n = opts.shadow_blur_steps.clamp(1, MAX_SHADOW_BLUR_STEPS) as usize;
    let target = clamp01(opts.shadow_blur_alpha);
    let alpha = 1.0 - (1.0 - target).powf(1.0 / n as f64);
    let outsets = (0..n)
        .map(|i| {
            if n == 1 {
                0.0
            } else {
                blur / 2.0 * (n - 1 - i) as f64 / (n - 1) as f64
            }
        })
        .collect();
    (outsets, alpha)
}

fn drop_shadow_paths(
    shadow: &Shadow,
    envelope: &ShapeEnvelope,
    opts: &ConvertOpts,
    ids: &mut IdCounter,
) -> Vec<Node> {
    let (outsets, alpha) = blur_copies(shadow.blur, opts);
    let offset = Vec2::new(shadow.dx, shadow.dy);
    outsets
        .into_iter()
        .map(|outset| {
            let (rect, radii) = offset_outline(envelope, offset, shadow.spread + outset);
            Node::Path(PathNode {
                name: Some(opts.node_name(ids, "shadow")),
                path_data: rounded_rect_path(rect, radii),
                fill: PathFill::Color(shadow.color),
                fill_alpha: alpha,
                fill_type: FillType::NonZero,
            })
        })
        .collect()
}

fn inner_shadow_paths(
    shadow: &Shadow,
    envelope: &ShapeEnvelope,
    opts: &ConvertOpts,
    ids: &mut IdCounter,
) -> Vec<Node> {
    let (outsets, alpha) = blur_copies(shadow.blur, opts);
    let margin = shadow.dx.abs() + shadow.dy.abs() + shadow.blur + shadow.spread.abs() + 1.0;
    let outer = (envelope.bounds().inflate(margin, margin), CornerRadii::default());
    outsets
        .into_iter()
        .map(|inset| {
            let hole = offset_outline(
                envelope,
                Vec2::new(shadow.dx, shadow.dy),
                -(shadow.spread + inset),
            );
            Node::Path(PathNode {
                name: Some(opts.node_name(ids, "inner_shadow")),
                path_data: ring_path(outer, hole),
                fill: PathFill::Color(shadow.color),
                fill_alpha: alpha,
                fill_type: FillType::EvenOdd,
            })
        })
        .collect()
}

fn fill_comment(index: usize, fill: &Fill) -> String {
    match &fill.kind {
        FillKind::Solid(color) => format!("fill {index}: solid {}", color.to_argb_hex()),
        FillKind::Gradient(desc) => {
            let d = desc.decomposed();
            format!(
                "fill {index}: {:?} gradient, rotation {:.1}, scale {:.1}x{:.1}",
                desc.family, d.rotation_deg, d.scale_x, d.scale_y
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
