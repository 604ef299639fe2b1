use super::*;

#[test]
fn test_no_rate_before_first_interval() {
    let mut counter = FpsCounter::new();
    assert!(!counter.update(0.1));
    assert_eq!(counter.fps(), 0.0);
}

#[test]
fn test_rate_after_interval() {
    let mut counter = FpsCounter::with_interval(0.5);
    let mut recomputed = false;
    for _ in 0..4 {
        recomputed = counter.update(0.125);
    }
    assert!(recomputed);
    assert_eq!(counter.fps(), 8.0);
}

#[test]
fn test_rate_holds_until_next_interval() {
    let mut counter = FpsCounter::with_interval(1.0);
    counter.update(0.5);
    counter.update(0.5);
    assert_eq!(counter.fps(), 2.0);

    // A slow frame inside the next window does not change the reported rate yet
    counter.update(0.75);
    assert_eq!(counter.fps(), 2.0);

    counter.update(0.25);
    assert_eq!(counter.fps(), 2.0);

    counter.update(1.0);
    assert_eq!(counter.fps(), 1.0);
}

#[test]
fn test_default_interval() {
    assert_eq!(FpsCounter::default().update_interval, 0.5);
}
