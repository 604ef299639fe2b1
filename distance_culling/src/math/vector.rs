//! Scalar vector operations.
//!
//! Every function is total over finite floats and never allocates.
//! Degenerate input is not trapped: normalizing a zero-length vector
//! divides by zero and the NaN propagates to the caller.

use glam::Vec3;

/// Squared Euclidean distance between `a` and `b`.
///
/// This is the value the batch kernel produces; compare it against a
/// squared threshold to avoid the square root.
#[inline]
pub fn sqr_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    dx * dx + dy * dy + dz * dz
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    sqr_distance(a, b).sqrt()
}

/// Squared length of `v`.
#[inline]
pub fn sqr_magnitude(v: Vec3) -> f32 {
    v.x * v.x + v.y * v.y + v.z * v.z
}

/// Length of `v`.
#[inline]
pub fn magnitude(v: Vec3) -> f32 {
    sqr_magnitude(v).sqrt()
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Unit vector in the direction of `v`.
///
/// A zero-length input yields NaN components.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    normalize_and_magnitude(v).0
}

/// Unit vector in the direction of `v`, together with the length of `v`.
///
/// Computes the square root once for callers that need both.
#[inline]
pub fn normalize_and_magnitude(v: Vec3) -> (Vec3, f32) {
    let mag = magnitude(v);
    (Vec3::new(v.x / mag, v.y / mag, v.z / mag), mag)
}

/// Whether `a` and `b` are at most `threshold` apart.
///
/// A distance exactly equal to the threshold counts as in range.
#[inline]
pub fn is_in_range(a: Vec3, b: Vec3, threshold: f32) -> bool {
    sqr_distance(a, b) <= threshold * threshold
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
