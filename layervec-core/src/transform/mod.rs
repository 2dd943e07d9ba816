//! Shared transform helpers (affine algebra and angle utilities).

pub mod affine;
pub mod non_linear;
