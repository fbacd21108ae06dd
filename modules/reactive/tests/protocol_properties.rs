use std::{convert::Infallible, sync::Arc, thread};

use fraktor_reactive_rs::core::{
  DeferredScalarCell, FusionMode, FusionRequest, Publisher, StreamError, Subscriber, Subscription,
  parallel::{ParallelCollect, ParallelFromRails, ParallelPublisher},
  source::{IterSource, UnicastSource},
  stage::{CompletionFromSingle, Filter, SumF64},
  testing::{ScriptedSingle, TestSubscriber, capture_undeliverable_errors},
};

fn is_even(value: &i32) -> bool {
  value % 2 == 0
}

fn boxed<T: Send + 'static>(probes: &[TestSubscriber<T>]) -> Vec<Box<dyn Subscriber<T>>> {
  probes.iter().map(|probe| -> Box<dyn Subscriber<T>> { Box::new(probe.clone()) }).collect()
}

#[test]
fn concurrent_termination_reaches_the_consumer_at_most_once() {
  for round in 0..200 {
    let source = UnicastSource::default();
    let probe = TestSubscriber::new();
    Filter::new(source.clone(), is_even).subscribe(Box::new(probe.clone()));

    let workers: Vec<_> = (0..3)
      .map(|worker| {
        let source = source.clone();
        let probe = probe.clone();
        thread::spawn(move || match worker {
          | 0 => {
            (0..20).for_each(|value| source.emit(value));
            source.complete();
          },
          | 1 => {
            let ((), _) = capture_undeliverable_errors(|| source.fail(StreamError::failed("racing failure")));
          },
          | _ => {
            if round % 4 == 0 {
              probe.cancel();
            }
          },
        })
      })
      .collect();
    for worker in workers {
      worker.join().unwrap();
    }

    assert!(probe.terminal_signals() <= 1);
    assert_eq!(probe.late_signals(), 0);
    if round % 4 != 0 {
      assert_eq!(probe.terminal_signals(), 1);
    }
  }
}

#[test]
fn concurrent_deferred_signals_keep_a_single_outcome() {
  for round in 0..200_u64 {
    let probe = TestSubscriber::new().with_initial_request(0);
    let cell = Arc::new(DeferredScalarCell::new());
    cell.start(Box::new(probe.clone()));

    let producer = {
      let cell = cell.clone();
      thread::spawn(move || {
        let _ = cell.produce(round);
      })
    };
    let failer = {
      let cell = cell.clone();
      thread::spawn(move || {
        let ((), _) = capture_undeliverable_errors(|| cell.fail(StreamError::failed("racing failure")));
      })
    };
    let requester = {
      let cell = cell.clone();
      thread::spawn(move || cell.request(1))
    };
    for worker in [producer, failer, requester] {
      worker.join().unwrap();
    }

    assert_eq!(probe.terminal_signals(), 1);
    assert!(probe.values().len() <= 1);
    assert_eq!(probe.late_signals(), 0);
  }
}

#[test]
fn sum_of_empty_input_completes_without_a_value() {
  let probe = TestSubscriber::new();
  SumF64::new(IterSource::new(Vec::<f64>::new())).subscribe(Box::new(probe.clone()));

  assert!(probe.values().is_empty());
  assert_eq!(probe.completions(), 1);
  assert!(probe.errors().is_empty());
}

#[test]
fn sum_emits_the_total_as_its_only_element() {
  let probe = TestSubscriber::new();
  SumF64::new(IterSource::new(vec![2.0, 3.5, -1.5])).subscribe(Box::new(probe.clone()));

  assert_eq!(probe.values(), vec![4.0]);
  assert_eq!(probe.completions(), 1);
}

#[test]
fn push_and_fused_filtering_agree() {
  let input = vec![1, 2, 3, 4, 5, 6];

  let pushed = TestSubscriber::new();
  Filter::new(IterSource::new(input.clone()), is_even).subscribe(Box::new(pushed.clone()));

  let fused = TestSubscriber::new().with_fusion(FusionRequest::new(FusionMode::Sync));
  Filter::new(IterSource::new(input), is_even).subscribe(Box::new(fused.clone()));

  assert_eq!(pushed.fusion_mode(), FusionMode::None);
  assert_eq!(fused.fusion_mode(), FusionMode::Sync);
  assert_eq!(pushed.values(), vec![2, 4, 6]);
  assert_eq!(fused.values(), pushed.values());
  assert_eq!(fused.completions(), 1);
}

#[test]
fn fused_poll_keeps_pulling_past_rejected_elements() {
  let probe = TestSubscriber::new().with_fusion(FusionRequest::new(FusionMode::Sync)).with_manual_drain();
  Filter::new(IterSource::new(vec![1, 3, 5, 2, 7, 4]), is_even).subscribe(Box::new(probe.clone()));

  let handle = probe.subscription().unwrap();
  let queue = handle.queue().unwrap();
  assert_eq!(queue.poll(), Ok(Some(2)));
  assert_eq!(queue.poll(), Ok(Some(4)));
  assert_eq!(queue.poll(), Ok(None));
}

#[test]
fn failing_factory_fails_every_rail_without_elements() {
  let calls = std::sync::atomic::AtomicUsize::new(0);
  let rails = ParallelFromRails::new(vec![
    IterSource::new(vec![1, 2]),
    IterSource::new(vec![3]),
    IterSource::new(vec![4, 5, 6]),
  ]);
  let collect = ParallelCollect::try_new(
    rails,
    move || -> Result<Option<Vec<i32>>, StreamError> {
      if calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 1 {
        return Err(StreamError::callback("factory exhausted"));
      }
      Ok(Some(Vec::new()))
    },
    |collection: &mut Vec<i32>, value: i32| -> Result<(), StreamError> {
      collection.push(value);
      Ok(())
    },
  );
  let consumers: Vec<TestSubscriber<Vec<i32>>> = (0..3).map(|_| TestSubscriber::new()).collect();
  collect.subscribe(boxed(&consumers));

  for consumer in &consumers {
    assert!(consumer.values().is_empty());
    assert_eq!(consumer.errors(), vec![StreamError::callback("factory exhausted")]);
  }
}

#[test]
fn failing_collector_only_fails_its_own_rail() {
  let rails = ParallelFromRails::new(vec![IterSource::new(vec![1, 2, 3]), IterSource::new(vec![10, 20, 30])]);
  let collect = ParallelCollect::try_new(
    rails,
    || -> Result<Option<Vec<i32>>, StreamError> { Ok(Some(Vec::new())) },
    |collection: &mut Vec<i32>, value: i32| -> Result<(), StreamError> {
      if value == 2 {
        return Err(StreamError::callback("cannot collect 2"));
      }
      collection.push(value);
      Ok(())
    },
  );
  let consumers: Vec<TestSubscriber<Vec<i32>>> = (0..2).map(|_| TestSubscriber::new()).collect();
  collect.subscribe(boxed(&consumers));

  assert_eq!(consumers[0].errors(), vec![StreamError::callback("cannot collect 2")]);
  assert!(consumers[0].values().is_empty());
  assert_eq!(consumers[1].values(), vec![vec![10, 20, 30]]);
  assert_eq!(consumers[1].completions(), 1);
}

#[test]
fn second_subscriber_is_rejected_and_the_first_is_unaffected() {
  let source = UnicastSource::default();
  let first = TestSubscriber::new();
  let second = TestSubscriber::new();
  source.subscribe(Box::new(first.clone()));
  source.emit(1);
  source.subscribe(Box::new(second.clone()));
  source.emit(2);
  source.complete();

  assert_eq!(first.values(), vec![1, 2]);
  assert_eq!(first.completions(), 1);
  assert!(first.errors().is_empty());
  assert!(second.values().is_empty());
  assert_eq!(second.errors(), vec![StreamError::SingleSubscriberOnly]);
  assert!(second.errors()[0].is_protocol_violation());
}

#[test]
fn single_result_becomes_a_bare_completion() {
  let success = TestSubscriber::<Infallible>::new();
  CompletionFromSingle::new(ScriptedSingle::succeeding("payload")).subscribe(Box::new(success.clone()));
  assert_eq!(success.completions(), 1);
  assert!(success.errors().is_empty());

  let failure = TestSubscriber::<Infallible>::new();
  CompletionFromSingle::new(ScriptedSingle::<&str>::failing(StreamError::failed("lookup failed")))
    .subscribe(Box::new(failure.clone()));
  assert_eq!(failure.errors(), vec![StreamError::failed("lookup failed")]);
  assert_eq!(failure.completions(), 0);
}

#[test]
fn rail_count_follows_the_upstream() {
  let rails = ParallelFromRails::new(vec![IterSource::new(vec![1]), IterSource::new(vec![2])]);
  let collect = ParallelCollect::new(rails, Vec::new, |collection: &mut Vec<i32>, value: i32| collection.push(value));
  assert_eq!(collect.parallelism(), 2);
}
