use alloc::vec;

use super::UndeliverableErrors;
use crate::core::{StreamError, testing::capture_undeliverable_errors};

#[test]
fn reports_reach_the_installed_hook() {
  let ((), errors) = capture_undeliverable_errors(|| {
    assert!(UndeliverableErrors::is_installed());
    UndeliverableErrors::report(StreamError::failed("late"));
  });
  assert!(errors.contains(&StreamError::failed("late")));
}

#[test]
fn capture_restores_the_previous_state() {
  let ((), first) = capture_undeliverable_errors(|| UndeliverableErrors::report(StreamError::InvalidDemand(0)));
  let ((), second) = capture_undeliverable_errors(|| {});
  assert_eq!(first, vec![StreamError::InvalidDemand(0)]);
  assert!(!second.contains(&StreamError::InvalidDemand(0)));
}
