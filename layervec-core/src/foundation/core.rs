pub use kurbo::{Affine, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Build a color from `[0, 1]` floats, rounding to the nearest byte.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(
            crate::foundation::math::unit_to_u8(r),
            crate::foundation::math::unit_to_u8(g),
            crate::foundation::math::unit_to_u8(b),
            crate::foundation::math::unit_to_u8(a),
        )
    }

    /// Same RGB with a replaced alpha byte.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Multiply alpha by `factor` (clamped to `[0, 1]`).
    pub fn scale_alpha(self, factor: f64) -> Self {
        let a = crate::foundation::math::unit_to_u8(
            f64::from(self.a) / 255.0 * crate::transform::non_linear::clamp01(factor),
        );
        self.with_alpha(a)
    }

    /// `true` when the RGB channels are all zero, regardless of alpha.
    pub const fn is_black_rgb(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Alpha as a `[0, 1]` float.
    pub fn alpha_unit(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Android color literal `#AARRGGBB` (upper-case hex).
    pub fn to_argb_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

/// Monotonic counter used to name generated drawable nodes.
///
/// The counter is a plain value: callers pass it in and receive the advanced value back, so two
/// conversions started from the same counter produce identical names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdCounter(pub u64);

impl IdCounter {
    /// Start counting after `last_used`.
    pub const fn new(last_used: u64) -> Self {
        Self(last_used)
    }

    /// Advance the counter and return `"{prefix}_{n}"`.
    pub fn next_name(&mut self, prefix: &str) -> String {
        self.0 = self.0.saturating_add(1);
        format!("{prefix}_{}", self.0)
    }

    /// Last value handed out.
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
