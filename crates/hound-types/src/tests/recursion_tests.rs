use super::*;

#[test]
fn test_enter_leave_tracks_depth() {
    let mut guard: RecursionGuard<u32> = RecursionGuard::with_profile(RecursionProfile::ShapeComparison);
    assert_eq!(guard.enter(1), RecursionResult::Entered);
    assert_eq!(guard.enter(2), RecursionResult::Entered);
    assert_eq!(guard.depth(), 2);
    guard.leave(2);
    guard.leave(1);
    assert_eq!(guard.depth(), 0);
}

#[test]
fn test_reentering_key_is_a_cycle() {
    let mut guard: RecursionGuard<(u32, u32)> = RecursionGuard::new(10, 100);
    assert_eq!(guard.enter((1, 2)), RecursionResult::Entered);
    assert_eq!(guard.enter((1, 2)), RecursionResult::Cycle);
    assert_eq!(guard.depth(), 1);
    guard.leave((1, 2));
    assert_eq!(guard.enter((1, 2)), RecursionResult::Entered);
    guard.leave((1, 2));
}

#[test]
fn test_depth_limit() {
    let mut guard: RecursionGuard<u32> = RecursionGuard::new(2, 100);
    assert_eq!(guard.enter(1), RecursionResult::Entered);
    assert_eq!(guard.enter(2), RecursionResult::Entered);
    assert_eq!(guard.enter(3), RecursionResult::DepthExceeded);
    guard.leave(2);
    assert_eq!(guard.enter(3), RecursionResult::Entered);
    guard.leave(3);
    guard.leave(1);
}

#[test]
fn test_iteration_limit() {
    let mut guard: RecursionGuard<u32> = RecursionGuard::new(10, 3);
    for key in 0..3 {
        assert_eq!(guard.enter(key), RecursionResult::Entered);
        guard.leave(key);
    }
    assert_eq!(guard.enter(99), RecursionResult::IterationExceeded);
}

#[test]
fn test_profiles() {
    assert_eq!(RecursionProfile::ShapeComparison.max_depth(), 100);
    assert_eq!(RecursionProfile::AccessPath.max_depth(), 20);
}
