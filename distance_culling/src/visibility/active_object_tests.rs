/// Tests for ActiveDistanceObject, alone and through the manager

use super::*;
use std::sync::{Arc, Mutex};
use crate::batch::{DistanceManager, FrameContext};
use crate::position::{SharedReferencePoint, TransformStore};
use crate::visibility::ActiveFlag;

fn object_at_origin(active: bool) -> ActiveDistanceObject<ActiveFlag> {
    ActiveDistanceObject::new(Vec3::ZERO, 10.0, ActiveFlag::new(active))
}

// ============================================================================
// Tests: Requester contract
// ============================================================================

#[test]
fn test_requests_own_position_against_reference_point() {
    let object = ActiveDistanceObject::new(Vec3::new(1.0, 2.0, 3.0), 10.0, ActiveFlag::new(true));
    let request = object.produce_request();

    assert_eq!(request.position1, PositionSource::Manual(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(request.position2, PositionSource::ReferencePoint);
}

#[test]
fn test_far_result_hides_object() {
    let mut object = object_at_origin(true);
    object.accept_result(400.0);

    assert!(!object.is_visible());
    assert_eq!(object.last_sqr_distance(), Some(400.0));
}

#[test]
fn test_near_result_shows_object() {
    let mut object = object_at_origin(false);
    object.accept_result(25.0);

    assert!(object.is_visible());
}

#[test]
fn test_repeated_result_toggles_once() {
    let mut object = object_at_origin(true);
    object.accept_result(400.0);
    object.accept_result(400.0);

    assert_eq!(object.target().toggles(), 1);
}

#[test]
fn test_set_position_changes_next_request() {
    let mut object = object_at_origin(true);
    object.set_position(Vec3::X);

    assert_eq!(object.produce_request().position1, PositionSource::Manual(Vec3::X));
}

// ============================================================================
// Tests: Through the manager
// ============================================================================

#[test]
fn test_manager_hides_far_and_shows_near() {
    let camera = SharedReferencePoint::new(Vec3::new(0.0, 0.0, 20.0));
    let store = TransformStore::new();
    let object = Arc::new(Mutex::new(object_at_origin(true)));
    let mut manager = DistanceManager::new();
    manager.register(&object);

    manager.tick(&FrameContext::new(&camera, &store)).unwrap();
    assert!(!object.lock().unwrap().is_visible());

    camera.set(Vec3::new(0.0, 0.0, 5.0));
    manager.tick(&FrameContext::new(&camera, &store)).unwrap();
    assert!(object.lock().unwrap().is_visible());
    assert_eq!(object.lock().unwrap().target().toggles(), 2);
}

#[test]
fn test_manager_steady_far_toggles_once() {
    let camera = SharedReferencePoint::new(Vec3::new(0.0, 0.0, 20.0));
    let store = TransformStore::new();
    let object = Arc::new(Mutex::new(object_at_origin(true)));
    let mut manager = DistanceManager::new();
    manager.register(&object);

    manager.tick(&FrameContext::new(&camera, &store)).unwrap();
    manager.tick(&FrameContext::new(&camera, &store)).unwrap();

    assert_eq!(object.lock().unwrap().target().toggles(), 1);
}
