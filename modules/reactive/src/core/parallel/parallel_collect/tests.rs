use alloc::{boxed::Box, vec, vec::Vec};

use portable_atomic::{AtomicUsize, Ordering};

use super::ParallelCollect;
use crate::core::{
  StreamError, Subscriber,
  parallel::{ParallelFromRails, ParallelPublisher},
  source::{IterSource, UnicastSource},
  testing::TestSubscriber,
};

type RailProbe = TestSubscriber<Vec<i32>>;

fn probes(count: usize) -> Vec<RailProbe> {
  (0..count).map(|_| TestSubscriber::new()).collect()
}

fn boxed(probes: &[RailProbe]) -> Vec<Box<dyn Subscriber<Vec<i32>>>> {
  probes.iter().map(|probe| -> Box<dyn Subscriber<Vec<i32>>> { Box::new(probe.clone()) }).collect()
}

fn push(collection: &mut Vec<i32>, value: i32) {
  collection.push(value);
}

struct RecordingRails {
  parallelism: usize,
  subscribed:  AtomicUsize,
}

impl ParallelPublisher<i32> for RecordingRails {
  fn parallelism(&self) -> usize {
    self.parallelism
  }

  fn subscribe(&self, _subscribers: Vec<Box<dyn Subscriber<i32>>>) {
    self.subscribed.fetch_add(1, Ordering::SeqCst);
  }
}

#[test]
fn each_rail_emits_its_own_collection() {
  let rails = ParallelFromRails::new(vec![IterSource::new(vec![1, 2]), IterSource::new(vec![3, 4, 5])]);
  let collect = ParallelCollect::new(rails, Vec::new, push);
  let consumers = probes(2);
  collect.subscribe(boxed(&consumers));

  assert_eq!(collect.parallelism(), 2);
  assert_eq!(consumers[0].values(), vec![vec![1, 2]]);
  assert_eq!(consumers[1].values(), vec![vec![3, 4, 5]]);
  assert!(consumers.iter().all(|consumer| consumer.completions() == 1));
}

#[test]
fn collection_waits_for_rail_demand() {
  let rails = ParallelFromRails::new(vec![IterSource::new(vec![7])]);
  let collect = ParallelCollect::new(rails, Vec::new, push);
  let consumer = TestSubscriber::new().with_initial_request(0);
  collect.subscribe(boxed(&[consumer.clone()]));
  assert!(consumer.values().is_empty());

  consumer.request(1);
  assert_eq!(consumer.values(), vec![vec![7]]);
}

#[test]
fn factory_failure_aborts_every_rail_before_subscribing_upstream() {
  let upstream = RecordingRails { parallelism: 3, subscribed: AtomicUsize::new(0) };
  let calls = AtomicUsize::new(0);
  let collect = ParallelCollect::try_new(
    upstream,
    move || -> Result<Option<Vec<i32>>, StreamError> {
      if calls.fetch_add(1, Ordering::SeqCst) == 1 {
        return Err(StreamError::callback("no capacity"));
      }
      Ok(Some(Vec::new()))
    },
    |collection: &mut Vec<i32>, value: i32| -> Result<(), StreamError> {
      collection.push(value);
      Ok(())
    },
  );
  let consumers = probes(3);
  collect.subscribe(boxed(&consumers));

  for consumer in &consumers {
    assert_eq!(consumer.errors(), vec![StreamError::callback("no capacity")]);
    assert!(consumer.values().is_empty());
  }
  assert_eq!(collect.upstream.subscribed.load(Ordering::SeqCst), 0);
}

#[test]
fn absent_initial_value_aborts_startup() {
  let upstream = RecordingRails { parallelism: 2, subscribed: AtomicUsize::new(0) };
  let collect = ParallelCollect::try_new(
    upstream,
    || -> Result<Option<Vec<i32>>, StreamError> { Ok(None) },
    |collection: &mut Vec<i32>, value: i32| -> Result<(), StreamError> {
      collection.push(value);
      Ok(())
    },
  );
  let consumers = probes(2);
  collect.subscribe(boxed(&consumers));

  for consumer in &consumers {
    assert_eq!(consumer.errors(), vec![StreamError::MissingValue("initial value factory")]);
  }
  assert_eq!(collect.upstream.subscribed.load(Ordering::SeqCst), 0);
}

#[test]
fn collector_failure_is_isolated_to_its_rail() {
  let first = UnicastSource::default();
  let second = UnicastSource::default();
  let rails = ParallelFromRails::new(vec![first.clone(), second.clone()]);
  let collect = ParallelCollect::try_new(
    rails,
    || -> Result<Option<Vec<i32>>, StreamError> { Ok(Some(Vec::new())) },
    |collection: &mut Vec<i32>, value: i32| -> Result<(), StreamError> {
      if value < 0 {
        return Err(StreamError::callback("negative reading"));
      }
      collection.push(value);
      Ok(())
    },
  );
  let consumers = probes(2);
  collect.subscribe(boxed(&consumers));

  first.emit(1);
  first.emit(-1);
  second.emit(10);
  second.emit(20);
  second.complete();

  assert!(first.is_cancelled());
  assert_eq!(consumers[0].errors(), vec![StreamError::callback("negative reading")]);
  assert!(consumers[0].values().is_empty());
  assert_eq!(consumers[1].values(), vec![vec![10, 20]]);
  assert_eq!(consumers[1].completions(), 1);
}

#[test]
fn cancelling_one_rail_leaves_siblings_running() {
  let first = UnicastSource::default();
  let second = UnicastSource::default();
  let rails = ParallelFromRails::new(vec![first.clone(), second.clone()]);
  let collect = ParallelCollect::new(rails, Vec::new, push);
  let consumers = probes(2);
  collect.subscribe(boxed(&consumers));

  consumers[0].cancel();
  second.emit(3);
  second.complete();

  assert!(first.is_cancelled());
  assert!(!second.is_cancelled());
  assert_eq!(consumers[0].terminal_signals(), 0);
  assert_eq!(consumers[1].values(), vec![vec![3]]);
}

#[test]
fn rail_count_mismatch_fails_all_subscribers() {
  let rails = ParallelFromRails::new(vec![IterSource::new(vec![1])]);
  let collect = ParallelCollect::new(rails, Vec::new, push);
  let consumers = probes(2);
  collect.subscribe(boxed(&consumers));

  let expected = StreamError::RailCountMismatch { expected: 1, actual: 2 };
  assert!(consumers.iter().all(|consumer| consumer.errors() == vec![expected.clone()]));
}
