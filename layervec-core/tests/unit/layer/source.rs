use super::*;
use crate::foundation::core::Rgba8;
use crate::layer::model::GradientFamily;

const DOC: &str = r##"{
  "name": "Button",
  "width": 320, "height": 64, "corner_radius": 32,
  "bounds_offset": {"x": 10, "y": 0},
  "fills": [
    {"type": "gradient", "opacity": 0.8, "gradient": {
      "family": "radial", "transform": "translate(170 32) scale(160 32)",
      "stops": [{"color": "#ffffff", "offset": 0}, {"color": "#ffffff", "offset": 1, "opacity": 0}]}},
    {"type": "solid", "color": "#1D2A3B"}
  ],
  "shadows": [{"type": "drop", "y": 4, "blur": 8, "color": "rgba(0,0,0,0.25)"}]
}"##;

#[test]
fn default_fill_order_is_top_first() {
    let layer = layer_from_json(DOC).unwrap();
    assert_eq!(layer.name, "Button");
    assert_eq!(layer.fills.len(), 2);
    assert_eq!(layer.fills[0].kind, FillKind::Solid(Rgba8::opaque(0x1D, 0x2A, 0x3B)));
    let FillKind::Gradient(desc) = &layer.fills[1].kind else {
        panic!("expected gradient on top");
    };
    assert_eq!(desc.family, GradientFamily::Radial);
    assert_eq!(desc.transform.as_coeffs(), [160.0, 0.0, 0.0, 32.0, 160.0, 32.0]);
    assert_eq!(layer.fills[1].opacity, 0.8);
}

#[test]
fn bottom_first_order_is_kept() {
    let json = r#"{"width": 10, "height": 10, "fill_order": "bottom_first",
        "fills": [{"type":"solid","color":"red"}, {"type":"solid","color":"blue","visible":false}]}"#;
    let layer = layer_from_json(json).unwrap();
    assert_eq!(layer.fills[0].kind, FillKind::Solid(Rgba8::opaque(255, 0, 0)));
    assert!(!layer.fills[1].visible);
    assert_eq!(layer.name, "Layer");
    assert_eq!(layer.envelope.corner_radii, CornerRadii::default());
}

#[test]
fn shadows_and_radii_are_read() {
    let layer = layer_from_json(DOC).unwrap();
    assert_eq!(layer.envelope.corner_radii, CornerRadii::uniform(32.0));
    let s = layer.shadows[0];
    assert_eq!(s.kind, ShadowKind::Drop);
    assert_eq!((s.dx, s.dy, s.blur, s.spread), (0.0, 4.0, 8.0, 0.0));
    assert_eq!(s.color, Rgba8::new(0, 0, 0, 64));
    assert!(s.visible);

    let json = r#"{"width": 10, "height": 10, "corner_radius": 2,
        "corner_radii": {"top_left": 5, "bottom_right": 1}}"#;
    let layer = layer_from_json(json).unwrap();
    assert_eq!(layer.envelope.corner_radii.top_left, 5.0);
    assert_eq!(layer.envelope.corner_radii.top_right, 0.0);
}

#[test]
fn unreadable_gradient_degrades_instead_of_failing() {
    let json = r#"{"width": 10, "height": 10, "fills": [
        {"type":"gradient","gradient":{"family":"linear","transform":"skew(3)"}}]}"#;
    let layer = layer_from_json(json).unwrap();
    let FillKind::Gradient(desc) = &layer.fills[0].kind else {
        panic!("expected gradient");
    };
    assert_eq!(desc.transform, crate::foundation::core::Affine::IDENTITY);
}

#[test]
fn structural_errors_are_reported() {
    assert!(layer_from_json("{").is_err());
    assert!(layer_from_json(r#"{"width": -1, "height": 10}"#).is_err());
    assert!(layer_from_json(r#"{"width": 1, "height": 1, "colour": "red"}"#).is_err());
}
