//! Vector math kernel
//!
//! Branch-free 3D helpers used by the batch kernel and by requesters that
//! evaluate distances on their own. Vectors are `glam::Vec3`.

mod vector;

pub use vector::{
    sqr_distance, distance, sqr_magnitude, magnitude,
    dot, cross, normalize, normalize_and_magnitude, is_in_range,
};
