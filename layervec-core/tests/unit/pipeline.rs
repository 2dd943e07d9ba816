use super::*;
use crate::foundation::error::LayervecError;

const DOC: &str = r##"{
  "name": "Card",
  "width": 200, "height": 80, "corner_radius": 12,
  "fills": [
    {"type": "gradient", "gradient": {"type": "GRADIENT_LINEAR",
      "matrix": {"a": 0, "b": 80, "c": -80, "d": 0, "tx": 100, "ty": 0},
      "stops": [{"r": 1, "g": 1, "b": 1, "a": 1, "position": 0},
                {"r": 1, "g": 1, "b": 1, "a": 0, "position": 1}]}},
    {"type": "solid", "color": "#202020"}
  ],
  "shadows": [{"type": "drop", "y": 2, "blur": 6, "color": "#00000040"}]
}"##;

#[test]
fn options_deserialize_from_partial_config() {
    let opts: ConvertOpts =
        serde_json::from_str(r#"{"coverage_factor": 6, "target": {"max_sweep_stops": 2}}"#)
            .unwrap();
    assert_eq!(opts.coverage_factor, 6.0);
    assert_eq!(opts.target.max_sweep_stops, Some(2));
    assert!(!opts.target.shape_drawable);
    assert_eq!(opts.shadow_blur_steps, 3);
    assert_eq!(opts.sweep_zero_offset_deg, -90.0);
}

#[test]
fn json_converts_to_vector_and_advances_ids() {
    let out = convert_json(DOC, &ConvertOpts::default(), IdCounter::new(100)).unwrap();
    assert!(out.xml.contains("<vector"));
    // 3 shadow copies, clip, solid, gradient, content
    assert_eq!(out.ids.value(), 107);

    // The solid is listed last in the panel, so it is painted first.
    let solid = out.xml.find("#FF202020").unwrap();
    let gradient = out.xml.find("android:type=\"linear\"").unwrap();
    assert!(solid < gradient);
    assert!(out.xml.contains("android:startX=\"100\""));
    assert!(out.xml.contains("android:endY=\"80\""));

    let again = convert_json(DOC, &ConvertOpts::default(), IdCounter::new(100)).unwrap();
    assert_eq!(out, again);
}

#[test]
fn shape_target_keeps_topmost_fill() {
    let opts = ConvertOpts {
        target: TargetCaps {
            shape_drawable: true,
            ..TargetCaps::default()
        },
        ..ConvertOpts::default()
    };
    let out = convert_json(DOC, &opts, IdCounter::new(0)).unwrap();
    assert!(out.xml.contains("<shape"));
    assert!(out.xml.contains("android:type=\"linear\""));
    assert!(!out.xml.contains("#FF202020"));
    assert_eq!(out.ids.value(), 0);
}

#[test]
fn invalid_documents_are_errors() {
    let err = convert_json("[]", &ConvertOpts::default(), IdCounter::new(0)).unwrap_err();
    assert!(matches!(err, LayervecError::Serde(_)), "{err:?}");

    let err = convert_svg("<svg", &ConvertOpts::default(), IdCounter::new(0)).unwrap_err();
    assert!(matches!(err, LayervecError::Parse(_)), "{err:?}");

    let mut layer = layer_from_json(DOC).unwrap();
    layer.opacity = f64::NAN;
    let err = convert_layer(&layer, &ConvertOpts::default(), IdCounter::new(0)).unwrap_err();
    assert!(matches!(err, LayervecError::Validation(_)), "{err:?}");
}
