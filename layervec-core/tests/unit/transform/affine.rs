use super::*;
use crate::transform::non_linear::normalize_degrees;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rotate_round_trips_every_octant() {
    for theta in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
        let d = decompose(rotate_deg(theta));
        let diff = normalize_degrees(d.rotation_deg - theta);
        assert!(diff.abs() < 1e-9, "theta={theta} got={}", d.rotation_deg);
        assert!(close(d.scale_x, 1.0));
        assert!(close(d.scale_y, 1.0));
    }
}

#[test]
fn fold_post_multiplies_left_to_right() {
    let m = fold([
        Affine::translate(Vec2::new(10.0, 20.0)),
        rotate_deg(90.0),
        Affine::scale_non_uniform(2.0, 3.0),
    ]);
    // (1, 0) -> scale (2, 0) -> rotate (0, 2) -> translate (10, 22)
    let p = map_point(m, Point::new(1.0, 0.0));
    assert!(close(p.x, 10.0) && close(p.y, 22.0), "{p:?}");

    let d = decompose(m);
    assert!(close(d.rotation_deg, 90.0));
    assert!(close(d.scale_x, 2.0));
    assert!(close(d.scale_y, 3.0));
    assert_eq!(d.translate, Vec2::new(10.0, 20.0));
}

#[test]
fn compose_matches_kurbo_product() {
    let a = from_coeffs(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let b = from_coeffs(-1.0, 0.5, 0.25, 2.0, -3.0, 7.0);
    assert_eq!(compose(a, b), a * b);
    assert_eq!(fold([a]), a);
    assert_eq!(fold(std::iter::empty()), identity());
}

#[test]
fn scales_are_never_negative() {
    for m in [
        from_coeffs(-3.0, 0.0, 0.0, -4.0, 0.0, 0.0),
        from_coeffs(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        from_coeffs(1.0, -1.0, -2.0, 0.5, 9.0, 9.0),
    ] {
        let d = decompose(m);
        assert!(d.scale_x >= 0.0 && d.scale_y >= 0.0);
        assert!(d.rotation_deg.is_finite());
    }
}

#[test]
fn axis_angle_is_normalized_by_shape_size() {
    let m = from_coeffs(300.0, 10.0, 0.0, 50.0, 150.0, 25.0);
    let expected = (10.0_f64 / 50.0).atan2(300.0 / 300.0).to_degrees();
    let got = normalized_axis_angle_deg(m, 300.0, 50.0);
    assert!(close(got, expected), "got {got} expected {expected}");
    assert!((got - 10.0_f64.atan2(300.0).to_degrees()).abs() > 5.0);

    // Degenerate shapes keep the raw direction.
    assert!(close(
        normalized_axis_angle_deg(m, 0.0, 50.0),
        10.0_f64.atan2(300.0).to_degrees()
    ));
}

#[test]
fn finiteness_check() {
    assert!(is_finite(identity()));
    assert!(!is_finite(from_coeffs(f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0)));
}
