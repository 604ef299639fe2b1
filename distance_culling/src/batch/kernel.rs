/// Squared-distance kernel over flat position buffers.
///
/// Each output element depends only on the inputs at the same index, so
/// the parallel variant splits the three buffers into aligned chunks and
/// hands each chunk triple to the rayon pool.

use glam::Vec3;
use rayon::prelude::*;
use crate::math::sqr_distance;

/// `out[i] = sqr_distance(positions1[i], positions2[i])`, serially.
///
/// # Panics
///
/// Panics if the three slices differ in length.
pub fn compute_sqr_distances(positions1: &[Vec3], positions2: &[Vec3], out: &mut [f32]) {
    assert_eq!(positions1.len(), out.len(), "position-1 buffer not index-aligned with results");
    assert_eq!(positions2.len(), out.len(), "position-2 buffer not index-aligned with results");

    for ((result, a), b) in out.iter_mut().zip(positions1).zip(positions2) {
        *result = sqr_distance(*a, *b);
    }
}

/// Same as [`compute_sqr_distances`], split into `chunk_size`-element work
/// items executed on the rayon thread pool.
///
/// # Panics
///
/// Panics if the three slices differ in length or `chunk_size` is zero.
pub fn compute_sqr_distances_parallel(
    positions1: &[Vec3],
    positions2: &[Vec3],
    out: &mut [f32],
    chunk_size: usize,
) {
    assert_eq!(positions1.len(), out.len(), "position-1 buffer not index-aligned with results");
    assert_eq!(positions2.len(), out.len(), "position-2 buffer not index-aligned with results");

    out.par_chunks_mut(chunk_size)
        .zip(positions1.par_chunks(chunk_size))
        .zip(positions2.par_chunks(chunk_size))
        .for_each(|((results, a), b)| compute_sqr_distances(a, b, results));
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;
