use super::*;
use crate::compile::plan::compile_layer;
use crate::foundation::core::{Affine, IdCounter, Rgba8, Vec2};
use crate::layer::model::{
    ColorStop, CornerRadii, Fill, GradientDescriptor, GradientFamily, Layer, ShapeEnvelope,
};
use crate::pipeline::{ConvertOpts, encode_gradient};
use crate::transform::affine;

const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);

fn desc(family: GradientFamily, m: Affine) -> GradientDescriptor {
    GradientDescriptor {
        transform: m,
        ..GradientDescriptor::identity(
            family,
            vec![ColorStop::new(RED, 0.0), ColorStop::new(BLUE, 100.0)],
        )
    }
}

fn env(w: f64, h: f64) -> ShapeEnvelope {
    ShapeEnvelope::new(w, h, CornerRadii::uniform(h / 2.0))
}

#[test]
fn encoding_is_deterministic_for_equal_counters() {
    let d = desc(
        GradientFamily::Radial,
        affine::fold([
            Affine::translate(Vec2::new(12.5, 3.0)),
            affine::rotate_deg(33.0),
            Affine::scale_non_uniform(40.0, 7.0),
        ]),
    );
    let opts = ConvertOpts::default();
    let (a, next_a) = encode_gradient(&d, &env(80.0, 20.0), &opts, IdCounter::new(41));
    let (b, next_b) = encode_gradient(&d, &env(80.0, 20.0), &opts, IdCounter::new(41));
    assert_eq!(a, b);
    assert_eq!(next_a, next_b);
    assert_eq!(next_a, IdCounter::new(42));
}

#[test]
fn linear_90_emits_vertical_axis() {
    let (xml, _) = encode_gradient(
        &desc(GradientFamily::Linear, affine::rotate_deg(90.0)),
        &env(1.0, 1.0),
        &ConvertOpts::default(),
        IdCounter::new(0),
    );
    assert!(!xml.contains("<group"), "{xml}");
    assert!(xml.contains("android:type=\"linear\""));
    assert!(xml.contains("android:startX=\"0\""));
    assert!(xml.contains("android:startY=\"0\""));
    assert!(xml.contains("android:endX=\"0\""));
    assert!(xml.contains("android:endY=\"1\""));
    assert!(xml.contains("<item android:offset=\"0\" android:color=\"#FFFF0000\" />"));
    assert!(xml.contains("<item android:offset=\"1\" android:color=\"#FF0000FF\" />"));
}

#[test]
fn radial_two_to_one_emits_scale_group() {
    let (xml, _) = encode_gradient(
        &desc(GradientFamily::Radial, Affine::scale_non_uniform(100.0, 50.0)),
        &env(200.0, 100.0),
        &ConvertOpts::default(),
        IdCounter::new(0),
    );
    assert!(xml.contains("android:scaleY=\"0.5\""), "{xml}");
    assert!(!xml.contains("android:scaleX"));
    assert!(!xml.contains("android:rotation"));
    assert!(xml.contains("android:gradientRadius=\"100\""));
}

#[test]
fn all_zero_matrix_emits_only_finite_numbers() {
    let zero = affine::from_coeffs(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    for family in [GradientFamily::Radial, GradientFamily::Angular, GradientFamily::Linear] {
        let (xml, _) = encode_gradient(
            &desc(family, zero),
            &env(50.0, 20.0),
            &ConvertOpts::default(),
            IdCounter::new(0),
        );
        assert!(!xml.contains("NaN") && !xml.contains("inf"), "{xml}");
        if family == GradientFamily::Radial {
            assert!(xml.contains("android:gradientRadius=\"0.0001\""), "{xml}");
        }
    }
}

#[test]
fn document_has_root_attributes_and_clip() {
    let layer = Layer {
        name: "a & b".to_owned(),
        envelope: env(320.0, 64.0),
        fills: vec![Fill::solid(RED)],
        shadows: Vec::new(),
        opacity: 0.5,
    };
    let opts = ConvertOpts {
        emit_comments: true,
        ..ConvertOpts::default()
    };
    let (doc, _) = compile_layer(&layer, &opts, IdCounter::new(0));
    let xml = to_xml(&doc);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!-- layer: a & b -->\n"));
    assert!(xml.contains("android:width=\"320dp\""));
    assert!(xml.contains("android:viewportHeight=\"64\""));
    assert!(xml.contains("android:alpha=\"0.5\""));
    assert!(xml.contains(
        "android:pathData=\"M32,0 H288 A32,32 0 0 1 320,32 V32 A32,32 0 0 1 288,64 H32 A32,32 0 0 1 0,32 V32 A32,32 0 0 1 32,0 Z\""
    ));
    assert!(xml.contains("android:fillColor=\"#FFFF0000\""));
    assert!(xml.ends_with("</vector>\n"));
    assert_eq!(xml, to_xml(&doc));
}

#[test]
fn escaping_keeps_markup_well_formed() {
    assert_eq!(escape_attr("a<\"b\">&"), "a&lt;&quot;b&quot;&gt;&amp;");
    assert_eq!(comment_text("x -- y-"), "x - - y- ");
}
