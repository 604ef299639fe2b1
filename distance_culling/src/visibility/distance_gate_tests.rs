/// Tests for DistanceGate

use super::*;

#[test]
fn test_default_gate_is_ten_units() {
    let gate = DistanceGate::default();
    assert_eq!(gate.sqr_threshold(), 100.0);
    assert_eq!(gate.distance(), 10.0);
}

#[test]
fn test_far_is_hidden_near_is_visible() {
    let gate = DistanceGate::new(10.0);
    assert!(!gate.is_visible(400.0));
    assert!(gate.is_visible(25.0));
}

#[test]
fn test_threshold_is_inclusive() {
    let gate = DistanceGate::new(10.0);
    assert!(gate.is_visible(100.0));
    assert!(!gate.is_visible(100.001));
}

#[test]
fn test_from_sqr_threshold() {
    let gate = DistanceGate::from_sqr_threshold(16.0);
    assert_eq!(gate, DistanceGate::new(4.0));
    assert_eq!(gate.distance(), 4.0);
}

#[test]
fn test_zero_gate_only_shows_coincident() {
    let gate = DistanceGate::new(0.0);
    assert!(gate.is_visible(0.0));
    assert!(!gate.is_visible(f32::EPSILON));
}
