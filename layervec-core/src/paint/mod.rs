//! Colors and color ramps.

pub mod color;
pub mod stops;
