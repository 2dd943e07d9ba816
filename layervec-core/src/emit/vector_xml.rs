//! `<vector>` drawable serialization.

use std::fmt::Write as _;

use crate::{
    compile::plan::{
        ClipPathNode, FillType, GradientNode, GroupNode, Node, PathFill, PathNode, VectorDocument,
    },
    emit::{comment_text, escape_attr},
    foundation::math::fmt_num,
    reproject::engine::Primitive,
};

const INDENT: &str = "    ";

/// Serialize `doc`. Equal documents always produce identical bytes.
pub fn to_xml(doc: &VectorDocument) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    if let Some(comment) = &doc.header_comment {
        let _ = writeln!(out, "<!-- {} -->", comment_text(comment));
    }

    // Zero-size viewports are rejected by the target, so sizes are floored at one unit.
    let w = fmt_num(doc.width.max(1.0));
    let h = fmt_num(doc.height.max(1.0));
    out.push_str("<vector xmlns:android=\"http://schemas.android.com/apk/res/android\"\n");
    out.push_str("    xmlns:aapt=\"http://schemas.android.com/aapt\"\n");
    let _ = writeln!(out, "    android:width=\"{w}dp\"");
    let _ = writeln!(out, "    android:height=\"{h}dp\"");
    let _ = writeln!(out, "    android:viewportWidth=\"{w}\"");
    let _ = write!(out, "    android:viewportHeight=\"{h}\"");
    if doc.alpha < 1.0 {
        let _ = write!(out, "\n    android:alpha=\"{}\"", fmt_num(doc.alpha));
    }
    out.push_str(">\n");

    for node in &doc.children {
        write_node(&mut out, node, 1);
    }
    out.push_str("</vector>\n");
    out
}

/// Serialize a fragment (no XML declaration, no root) at the given indent depth.
pub fn nodes_to_xml(nodes: &[Node], depth: usize) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, depth);
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = INDENT.repeat(depth);
    match node {
        Node::Comment(text) => {
            let _ = writeln!(out, "{pad}<!-- {} -->", comment_text(text));
        }
        Node::ClipPath(clip) => write_clip(out, clip, &pad),
        Node::Group(group) => write_group(out, group, depth, &pad),
        Node::Path(path) => write_path(out, path, depth, &pad),
    }
}

fn write_clip(out: &mut String, clip: &ClipPathNode, pad: &str) {
    let _ = write!(out, "{pad}<clip-path");
    if let Some(name) = &clip.name {
        let _ = write!(out, "\n{pad}    android:name=\"{}\"", escape_attr(name));
    }
    let _ = writeln!(out, "\n{pad}    android:pathData=\"{}\" />", clip.path_data);
}

fn write_group(out: &mut String, group: &GroupNode, depth: usize, pad: &str) {
    let c = &group.container;
    let mut attrs = Vec::new();
    if let Some(name) = &group.name {
        attrs.push(format!("android:name=\"{}\"", escape_attr(name)));
    }
    if c.translate.x != 0.0 {
        attrs.push(format!("android:translateX=\"{}\"", fmt_num(c.translate.x)));
    }
    if c.translate.y != 0.0 {
        attrs.push(format!("android:translateY=\"{}\"", fmt_num(c.translate.y)));
    }
    if c.rotate_deg != 0.0 {
        attrs.push(format!("android:rotation=\"{}\"", fmt_num(c.rotate_deg)));
    }
    if c.scale.x != 1.0 {
        attrs.push(format!("android:scaleX=\"{}\"", fmt_num(c.scale.x)));
    }
    if c.scale.y != 1.0 {
        attrs.push(format!("android:scaleY=\"{}\"", fmt_num(c.scale.y)));
    }

    let _ = write!(out, "{pad}<group");
    for attr in &attrs {
        let _ = write!(out, "\n{pad}    {attr}");
    }
    out.push_str(">\n");
    for child in &group.children {
        write_node(out, child, depth + 1);
    }
    let _ = writeln!(out, "{pad}</group>");
}

fn write_path(out: &mut String, path: &PathNode, depth: usize, pad: &str) {
    let _ = write!(out, "{pad}<path");
    if let Some(name) = &path.name {
        let _ = write!(out, "\n{pad}    android:name=\"{}\"", escape_attr(name));
    }
    let _ = write!(out, "\n{pad}    android:pathData=\"{}\"", path.path_data);
    if let PathFill::Color(color) = &path.fill {
        let _ = write!(out, "\n{pad}    android:fillColor=\"{}\"", color.to_argb_hex());
    }
    if path.fill_alpha < 1.0 {
        let _ = write!(
            out,
            "\n{pad}    android:fillAlpha=\"{}\"",
            fmt_num(path.fill_alpha.max(0.0))
        );
    }
    if path.fill_type == FillType::EvenOdd {
        let _ = write!(out, "\n{pad}    android:fillType=\"evenOdd\"");
    }

    match &path.fill {
        PathFill::Color(_) => out.push_str(" />\n"),
        PathFill::Gradient(gradient) => {
            out.push_str(">\n");
            let inner = INDENT.repeat(depth + 1);
            let _ = writeln!(out, "{inner}<aapt:attr name=\"android:fillColor\">");
            write_gradient(out, gradient, &INDENT.repeat(depth + 2));
            let _ = writeln!(out, "{inner}</aapt:attr>");
            let _ = writeln!(out, "{pad}</path>");
        }
    }
}

fn write_gradient(out: &mut String, gradient: &GradientNode, pad: &str) {
    let _ = write!(out, "{pad}<gradient");
    match gradient.primitive {
        Primitive::Linear { start, end } => {
            let _ = write!(out, "\n{pad}    android:type=\"linear\"");
            let _ = write!(out, "\n{pad}    android:startX=\"{}\"", fmt_num(start.x));
            let _ = write!(out, "\n{pad}    android:startY=\"{}\"", fmt_num(start.y));
            let _ = write!(out, "\n{pad}    android:endX=\"{}\"", fmt_num(end.x));
            let _ = write!(out, "\n{pad}    android:endY=\"{}\"", fmt_num(end.y));
        }
        Primitive::Radial { center, radius } => {
            let _ = write!(out, "\n{pad}    android:type=\"radial\"");
            let _ = write!(out, "\n{pad}    android:centerX=\"{}\"", fmt_num(center.x));
            let _ = write!(out, "\n{pad}    android:centerY=\"{}\"", fmt_num(center.y));
            let _ = write!(out, "\n{pad}    android:gradientRadius=\"{}\"", fmt_num(radius));
        }
        Primitive::Sweep { center } => {
            let _ = write!(out, "\n{pad}    android:type=\"sweep\"");
            let _ = write!(out, "\n{pad}    android:centerX=\"{}\"", fmt_num(center.x));
            let _ = write!(out, "\n{pad}    android:centerY=\"{}\"", fmt_num(center.y));
        }
    }
    out.push_str(">\n");
    for item in &gradient.items {
        let _ = writeln!(
            out,
            "{pad}    <item android:offset=\"{}\" android:color=\"{}\" />",
            fmt_num(item.offset / 100.0),
            item.color.to_argb_hex()
        );
    }
    let _ = writeln!(out, "{pad}</gradient>");
}

#[cfg(test)]
#[path = "../../tests/unit/emit/vector_xml.rs"]
mod tests;
