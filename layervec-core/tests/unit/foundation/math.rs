use super::*;

#[test]
fn fmt_num_trims_and_normalizes_zero() {
    assert_eq!(fmt_num(1.0), "1");
    assert_eq!(fmt_num(0.5), "0.5");
    assert_eq!(fmt_num(12.34567), "12.3457");
    assert_eq!(fmt_num(-0.00001), "0");
    assert_eq!(fmt_num(-2.25), "-2.25");
    assert_eq!(fmt_num(f64::NAN), "0");
}

#[test]
fn unit_to_u8_rounds() {
    assert_eq!(unit_to_u8(0.0), 0);
    assert_eq!(unit_to_u8(0.5), 128);
    assert_eq!(unit_to_u8(1.0), 255);
    assert_eq!(unit_to_u8(f64::NAN), 0);
}

#[test]
fn lerp_u8_endpoints() {
    assert_eq!(lerp_u8(10, 200, 0.0), 10);
    assert_eq!(lerp_u8(10, 200, 1.0), 200);
    assert_eq!(lerp_u8(0, 255, 0.5), 128);
}

#[test]
fn at_least_substitutes_degenerate_values() {
    assert_eq!(at_least(0.0, MIN_SCALE, MIN_SCALE), MIN_SCALE);
    assert_eq!(at_least(f64::INFINITY, MIN_SCALE, 1.0), 1.0);
    assert_eq!(at_least(3.0, MIN_SCALE, 1.0), 3.0);
}
