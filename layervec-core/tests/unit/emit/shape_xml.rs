use super::*;
use crate::foundation::core::Affine;
use crate::layer::model::{CornerRadii, ShapeEnvelope};
use crate::transform::affine::rotate_deg;

const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
const GREEN: Rgba8 = Rgba8::opaque(0, 255, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);

fn layer(radii: CornerRadii) -> Layer {
    Layer {
        name: "chip".to_owned(),
        envelope: ShapeEnvelope::new(120.0, 40.0, radii),
        fills: Vec::new(),
        shadows: Vec::new(),
        opacity: 1.0,
    }
}

fn gradient(family: GradientFamily, m: Affine, stops: Vec<ColorStop>) -> Fill {
    Fill::gradient(GradientDescriptor {
        transform: m,
        ..GradientDescriptor::identity(family, stops)
    })
}

#[test]
fn solid_fill_with_uniform_corners() {
    let l = layer(CornerRadii::uniform(20.0));
    let mut fill = Fill::solid(RED);
    fill.opacity = 0.5;
    let xml = to_shape_xml(&l, Some(&fill), &ConvertOpts::default());
    assert!(xml.contains("android:shape=\"rectangle\""));
    assert!(xml.contains("<corners android:radius=\"20dp\" />"));
    assert!(xml.contains("<solid android:color=\"#80FF0000\" />"), "{xml}");
    assert!(xml.contains("android:width=\"120dp\""));
}

#[test]
fn mixed_corners_are_listed_individually() {
    let radii = CornerRadii {
        top_left: 4.0,
        ..CornerRadii::default()
    };
    let xml = to_shape_xml(&layer(radii), None, &ConvertOpts::default());
    assert!(xml.contains("android:topLeftRadius=\"4dp\""));
    assert!(xml.contains("android:bottomLeftRadius=\"0dp\""));
    assert!(!xml.contains("<solid") && !xml.contains("<gradient"));
}

#[test]
fn linear_angle_snaps_to_45_in_y_up_frame() {
    let fill = gradient(
        GradientFamily::Linear,
        rotate_deg(90.0),
        vec![ColorStop::new(RED, 0.0), ColorStop::new(BLUE, 100.0)],
    );
    let xml = to_shape_xml(&layer(CornerRadii::default()), Some(&fill), &ConvertOpts::default());
    assert!(xml.contains("android:angle=\"270\""), "{xml}");
    assert!(xml.contains("android:startColor=\"#FFFF0000\""));
    assert!(xml.contains("android:endColor=\"#FF0000FF\""));
    assert!(!xml.contains("centerColor"));

    let fill = gradient(
        GradientFamily::Linear,
        rotate_deg(-40.0),
        vec![ColorStop::new(RED, 0.0), ColorStop::new(BLUE, 100.0)],
    );
    let xml = to_shape_xml(&layer(CornerRadii::default()), Some(&fill), &ConvertOpts::default());
    assert!(xml.contains("android:angle=\"45\""), "{xml}");
}

#[test]
fn interior_stops_collapse_to_sampled_center() {
    let fill = gradient(
        GradientFamily::Radial,
        Affine::translate((60.0, 10.0)) * Affine::scale(30.0),
        vec![
            ColorStop::new(RED, 0.0),
            ColorStop::new(GREEN, 40.0),
            ColorStop::new(GREEN, 60.0),
            ColorStop::new(BLUE, 100.0),
        ],
    );
    let xml = to_shape_xml(&layer(CornerRadii::default()), Some(&fill), &ConvertOpts::default());
    assert!(xml.contains("android:type=\"radial\""));
    assert!(xml.contains("android:centerColor=\"#FF00FF00\""), "{xml}");
    assert!(xml.contains("android:gradientRadius=\"30dp\""));
    assert!(xml.contains("android:centerX=\"0.5\""));
    assert!(xml.contains("android:centerY=\"0.25\""));
}

#[test]
fn angular_becomes_sweep_without_radius() {
    let fill = gradient(
        GradientFamily::Angular,
        Affine::IDENTITY,
        vec![ColorStop::new(RED, 0.0), ColorStop::new(BLUE, 100.0)],
    );
    let xml = to_shape_xml(&layer(CornerRadii::default()), Some(&fill), &ConvertOpts::default());
    assert!(xml.contains("android:type=\"sweep\""));
    assert!(!xml.contains("gradientRadius"));
}
