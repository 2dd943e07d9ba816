//! Shape geometry used for clip masks, solid fills and shadows.

pub mod shape;
