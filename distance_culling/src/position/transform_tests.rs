/// Tests for TransformStore
///
/// Validates handle lifecycle and the batched read contract.

use super::*;
use crate::error::Error;

// ============================================================================
// Tests: Handle lifecycle
// ============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = TransformStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_insert_and_read_back() {
    let mut store = TransformStore::new();
    let h = store.insert(Vec3::new(3.0, 0.0, 4.0));

    assert!(store.contains(h));
    assert_eq!(store.position(h), Some(Vec3::new(3.0, 0.0, 4.0)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_set_position() {
    let mut store = TransformStore::new();
    let h = store.insert(Vec3::ZERO);

    assert!(store.set_position(h, Vec3::ONE));
    assert_eq!(store.position(h), Some(Vec3::ONE));
}

#[test]
fn test_removed_handle_is_invalid() {
    let mut store = TransformStore::new();
    let h = store.insert(Vec3::X);

    assert_eq!(store.remove(h), Some(Vec3::X));
    assert!(!store.contains(h));
    assert!(!store.set_position(h, Vec3::Y));
    assert_eq!(store.remove(h), None);
}

#[test]
fn test_handles_stay_valid_after_other_removals() {
    let mut store = TransformStore::new();
    let a = store.insert(Vec3::X);
    let b = store.insert(Vec3::Y);
    let c = store.insert(Vec3::Z);

    store.remove(b);

    assert_eq!(store.position(a), Some(Vec3::X));
    assert_eq!(store.position(c), Some(Vec3::Z));
}

// ============================================================================
// Tests: Batched read
// ============================================================================

#[test]
fn test_read_positions_preserves_order() {
    let mut store = TransformStore::new();
    let a = store.insert(Vec3::new(1.0, 0.0, 0.0));
    let b = store.insert(Vec3::new(2.0, 0.0, 0.0));

    let handles = [b, a, b];
    let mut out = [Vec3::ZERO; 3];
    store.read_positions(&handles, &mut out).unwrap();

    assert_eq!(out[0].x, 2.0);
    assert_eq!(out[1].x, 1.0);
    assert_eq!(out[2].x, 2.0);
}

#[test]
fn test_read_positions_empty_batch() {
    let store = TransformStore::new();
    let mut out: [Vec3; 0] = [];
    assert!(store.read_positions(&[], &mut out).is_ok());
}

#[test]
fn test_read_positions_stale_handle_fails() {
    let mut store = TransformStore::new();
    let live = store.insert(Vec3::X);
    let stale = store.insert(Vec3::Y);
    store.remove(stale);

    let mut out = [Vec3::ZERO; 2];
    let result = store.read_positions(&[live, stale], &mut out);

    assert!(matches!(result, Err(Error::InvalidHandle(_))));
}
