//! Value types for light control parameters.

mod hsv;

pub use hsv::Hsv;
