use super::*;
use crate::foundation::core::{Point, Rgba8};
use crate::transform::affine::map_point;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn frame() -> SourceFrame {
    SourceFrame::new(300.0, 50.0, Vec2::ZERO)
}

#[test]
fn empty_list_is_identity() {
    assert_eq!(parse_transform_list("").unwrap(), Affine::IDENTITY);
    assert_eq!(parse_transform_list("  \n ").unwrap(), Affine::IDENTITY);
}

#[test]
fn calls_fold_left_to_right() {
    let m = parse_transform_list("translate(10 20) rotate(90), scale(2,3)").unwrap();
    let p = map_point(m, Point::new(1.0, 0.0));
    assert!(close(p.x, 10.0) && close(p.y, 22.0), "{p:?}");
}

#[test]
fn rotate_about_a_pivot_fixes_the_pivot() {
    let m = parse_transform_list("rotate(90 10 0)").unwrap();
    let pivot = map_point(m, Point::new(10.0, 0.0));
    assert!(close(pivot.x, 10.0) && close(pivot.y, 0.0), "{pivot:?}");
    let p = map_point(m, Point::new(11.0, 0.0));
    assert!(close(p.x, 10.0) && close(p.y, 1.0), "{p:?}");
}

#[test]
fn numbers_accept_signs_fractions_and_exponents() {
    let m = parse_transform_list("matrix(1e1 0 0 -.5 +3 4.)").unwrap();
    assert_eq!(m.as_coeffs(), [10.0, 0.0, 0.0, -0.5, 3.0, 4.0]);
}

#[test]
fn unknown_function_reports_name_and_offset() {
    let err = parse_transform_list("scale(2) shear(1)").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownFunction {
            name: "shear".to_owned(),
            offset: 9,
        }
    );
}

#[test]
fn wrong_arity_is_rejected() {
    let err = parse_transform_list("translate(1,2,3)").unwrap_err();
    assert!(matches!(err, ParseError::ArgCount { got: 3, .. }), "{err:?}");
    let err = parse_transform_list("matrix(1 0 0 1)").unwrap_err();
    assert!(matches!(err, ParseError::ArgCount { got: 4, .. }), "{err:?}");
}

#[test]
fn malformed_input_is_an_error_not_a_panic() {
    assert_eq!(
        parse_transform_list("scale(1x)").unwrap_err(),
        ParseError::InvalidNumber { offset: 7 }
    );
    assert!(matches!(
        parse_transform_list("rotate(45").unwrap_err(),
        ParseError::Syntax { .. }
    ));
    assert!(matches!(
        parse_transform_list("(1 2)").unwrap_err(),
        ParseError::Syntax { .. }
    ));
    assert!(matches!(
        parse_transform_list("scale 2").unwrap_err(),
        ParseError::Syntax { .. }
    ));
}

#[test]
fn adapter_subtracts_the_bounds_offset() {
    let raw = TransformListGradient {
        family: GradientFamily::Radial,
        transform: "translate(160 25) scale(150 25)".to_owned(),
        stops: vec![
            SvgStop {
                color: "#ff0000".to_owned(),
                offset: 0.0,
                opacity: None,
            },
            SvgStop {
                color: "blue".to_owned(),
                offset: 1.0,
                opacity: Some(0.5),
            },
        ],
        bounds_offset: None,
    };
    let frame = SourceFrame::new(300.0, 50.0, Vec2::new(10.0, 0.0));
    let desc = TransformListAdapter.parse(&raw, &frame).unwrap();

    let center = map_point(desc.transform, Point::ORIGIN);
    assert!(close(center.x, 150.0) && close(center.y, 25.0), "{center:?}");
    assert_eq!(desc.source_bounds_offset, Vec2::new(10.0, 0.0));
    assert_eq!(desc.sweep_rotation_deg, None);
    assert_eq!(desc.stops[0], ColorStop::new(Rgba8::opaque(255, 0, 0), 0.0));
    assert_eq!(desc.stops[1], ColorStop::new(Rgba8::new(0, 0, 255, 128), 100.0));
}

#[test]
fn angular_records_normalized_sweep_angle() {
    let raw = TransformListGradient {
        family: GradientFamily::Angular,
        transform: "matrix(300 10 -10 50 150 25)".to_owned(),
        stops: Vec::new(),
        bounds_offset: None,
    };
    let desc = TransformListAdapter.parse(&raw, &frame()).unwrap();
    let expected = (10.0f64 / 50.0).atan2(300.0 / 300.0).to_degrees();
    let got = desc.sweep_rotation_deg.unwrap();
    assert!(close(got, expected), "got {got}, expected {expected}");
    assert!(!close(got, 10.0f64.atan2(300.0).to_degrees()));
}

#[test]
fn bad_stop_color_fails_the_adapter() {
    let raw = TransformListGradient {
        family: GradientFamily::Linear,
        transform: String::new(),
        stops: vec![SvgStop {
            color: "notacolor".to_owned(),
            offset: 0.0,
            opacity: None,
        }],
        bounds_offset: None,
    };
    assert!(matches!(
        TransformListAdapter.parse(&raw, &frame()),
        Err(ParseError::InvalidColor(_))
    ));
}
