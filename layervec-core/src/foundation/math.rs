/// Smallest scale factor the engine divides by.
pub(crate) const MIN_SCALE: f64 = 1e-4;

/// Tolerance used when comparing offsets and coefficients.
pub(crate) const EPSILON: f64 = 1e-9;

pub(crate) fn unit_to_u8(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t.clamp(0.0, 1.0);
    v.round().clamp(0.0, 255.0) as u8
}

/// Replace NaN/infinite values and tiny magnitudes with `fallback`.
pub(crate) fn at_least(x: f64, min: f64, fallback: f64) -> f64 {
    if !x.is_finite() || x.abs() < min {
        fallback
    } else {
        x
    }
}

/// Format a number for XML attributes: at most four decimals, trailing zeros trimmed and
/// negative zero printed as `0`.
pub(crate) fn fmt_num(x: f64) -> String {
    let x = if x.is_finite() { x } else { 0.0 };
    let mut s = format!("{x:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
