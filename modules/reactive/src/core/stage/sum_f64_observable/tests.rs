use alloc::{boxed::Box, sync::Arc, vec, vec::Vec};

use super::SumF64Observable;
use crate::core::{
  ObservableSource, StreamError,
  testing::{TestObservable, TestSubscriber, capture_undeliverable_errors},
};

fn summed(items: Vec<f64>) -> (Arc<TestObservable<f64>>, TestSubscriber<f64>) {
  let source = Arc::new(TestObservable::new(items));
  let observer = TestSubscriber::new();
  SumF64Observable::new(source.clone()).subscribe(Box::new(observer.clone()));
  (source, observer)
}

#[test]
fn pushes_the_sum_on_completion() {
  let (source, observer) = summed(vec![2.0, 3.5, -1.5]);
  assert!(observer.values().is_empty());

  source.complete();

  assert_eq!(observer.values(), vec![4.0]);
  assert_eq!(observer.completions(), 1);
  assert_eq!(observer.subscriptions(), 1);
}

#[test]
fn empty_input_completes_without_a_value() {
  let (source, observer) = summed(Vec::new());
  source.complete();

  assert!(observer.values().is_empty());
  assert_eq!(observer.completions(), 1);
}

#[test]
fn failure_is_forwarded_without_a_sum() {
  let (source, observer) = summed(vec![1.0]);
  source.fail(StreamError::failed("upstream"));

  assert!(observer.values().is_empty());
  assert_eq!(observer.errors(), vec![StreamError::failed("upstream")]);
}

#[test]
fn disposal_reaches_the_upstream_and_suppresses_the_sum() {
  let (source, observer) = summed(vec![1.0, 2.0]);
  observer.cancel();
  assert_eq!(source.resource().disposals(), 1);

  source.complete();

  assert!(observer.values().is_empty());
  assert_eq!(observer.terminal_signals(), 0);
}

#[test]
fn error_after_disposal_is_reported() {
  let (source, observer) = summed(vec![1.0]);
  observer.cancel();

  let ((), errors) = capture_undeliverable_errors(|| source.fail(StreamError::failed("late")));

  assert!(errors.contains(&StreamError::failed("late")));
  assert!(observer.errors().is_empty());
}
