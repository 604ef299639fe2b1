/// DistanceGate - squared-distance visibility threshold.

/// Visible while the squared distance is at most the squared threshold.
///
/// The threshold is stored squared so the per-tick check never takes a
/// square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceGate {
    sqr_threshold: f32,
}

impl DistanceGate {
    /// Visibility distance used by the stock requester kinds
    pub const DEFAULT_DISTANCE: f32 = 10.0;

    /// Gate at `distance` world units
    pub fn new(distance: f32) -> Self {
        Self {
            sqr_threshold: distance * distance,
        }
    }

    /// Gate from an already squared threshold
    pub fn from_sqr_threshold(sqr_threshold: f32) -> Self {
        Self { sqr_threshold }
    }

    pub fn sqr_threshold(&self) -> f32 {
        self.sqr_threshold
    }

    pub fn distance(&self) -> f32 {
        self.sqr_threshold.sqrt()
    }

    /// `sqr_distance <= threshold²`. Exactly on the threshold is visible.
    pub fn is_visible(&self, sqr_distance: f32) -> bool {
        sqr_distance <= self.sqr_threshold
    }
}

impl Default for DistanceGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DISTANCE)
    }
}

#[cfg(test)]
#[path = "distance_gate_tests.rs"]
mod tests;
