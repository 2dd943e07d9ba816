//! Affine transform helpers.
//!
//! Matrices use kurbo's coefficient order `[a, b, c, d, tx, ty]`, mapping
//! `(x, y) -> (a*x + c*y + tx, b*x + d*y + ty)`.

use crate::foundation::core::{Affine, Point, Vec2};
use crate::transform::non_linear::normalize_degrees;

/// `a * b`: `b` is applied to points first.
#[inline]
pub fn compose(a: Affine, b: Affine) -> Affine {
    a * b
}

/// The identity matrix.
#[inline]
pub fn identity() -> Affine {
    Affine::IDENTITY
}

/// Matrix from its six coefficients in `[a, b, c, d, tx, ty]` order.
#[inline]
pub fn from_coeffs(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Affine {
    Affine::new([a, b, c, d, tx, ty])
}

/// Apply `m` to `p`.
#[inline]
pub fn map_point(m: Affine, p: Point) -> Point {
    m * p
}

/// Rotation by `deg` degrees (positive turns +x toward +y).
#[inline]
pub fn rotate_deg(deg: f64) -> Affine {
    Affine::rotate(deg.to_radians())
}

/// Fold a transform list left to right, post-multiplying each step onto identity.
///
/// The last step is applied to points first, matching SVG `transform` attribute semantics.
pub fn fold<I>(steps: I) -> Affine
where
    I: IntoIterator<Item = Affine>,
{
    steps.into_iter().fold(identity(), compose)
}

/// `true` when every coefficient is finite.
pub fn is_finite(m: Affine) -> bool {
    m.as_coeffs().iter().all(|v| v.is_finite())
}

/// Rotation, non-uniform scale and translation extracted from a matrix.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Decomposed {
    /// `atan2(b, a)` in degrees, in `(-180, 180]`.
    pub rotation_deg: f64,
    /// Length of the first column, always `>= 0`.
    pub scale_x: f64,
    /// Length of the second column, always `>= 0`.
    pub scale_y: f64,
    /// Image of the origin.
    pub translate: Vec2,
}

/// Split `m` into rotation, scale and translation.
///
/// Shear is not represented; for `m = T * R * S` the result is exact.
pub fn decompose(m: Affine) -> Decomposed {
    let [a, b, c, d, tx, ty] = m.as_coeffs();
    Decomposed {
        rotation_deg: b.atan2(a).to_degrees(),
        scale_x: a.hypot(b),
        scale_y: c.hypot(d),
        translate: Vec2::new(tx, ty),
    }
}

/// Angle of the primary axis `(a, b)` after dividing it by the shape size.
///
/// Angular gradients are exported with the shape's aspect ratio baked into the matrix, so the
/// sweep direction only shows up once the axis is brought back into a square frame. A
/// degenerate size keeps the raw angle.
pub fn normalized_axis_angle_deg(m: Affine, width: f64, height: f64) -> f64 {
    let [a, b, ..] = m.as_coeffs();
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return normalize_degrees(b.atan2(a).to_degrees());
    }
    normalize_degrees((b / height).atan2(a / width).to_degrees())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
