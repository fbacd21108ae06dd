use alloc::{boxed::Box, sync::Arc, vec};
use core::convert::Infallible;

use super::CompletionFromSingle;
use crate::core::{
  FusionMode, FusionRequest, Publisher, StreamError,
  testing::{ScriptedSingle, TestSubscriber, capture_undeliverable_errors},
};

fn completion_of(source: &Arc<ScriptedSingle<u32>>) -> CompletionFromSingle<u32, Arc<ScriptedSingle<u32>>> {
  CompletionFromSingle::new(source.clone())
}

#[test]
fn success_completes_without_elements() {
  let source = Arc::new(ScriptedSingle::succeeding(42));
  let probe = TestSubscriber::<Infallible>::new();
  completion_of(&source).subscribe(Box::new(probe.clone()));

  assert_eq!(probe.subscriptions(), 1);
  assert_eq!(probe.completions(), 1);
  assert!(probe.errors().is_empty());
}

#[test]
fn failure_is_forwarded_unchanged() {
  let source = Arc::new(ScriptedSingle::failing(StreamError::failed("lookup failed")));
  let probe = TestSubscriber::<Infallible>::new();
  completion_of(&source).subscribe(Box::new(probe.clone()));

  assert_eq!(probe.errors(), vec![StreamError::failed("lookup failed")]);
  assert_eq!(probe.completions(), 0);
}

#[test]
fn cancellation_disposes_the_resource_and_silences_the_result() {
  let source = Arc::new(ScriptedSingle::pending());
  let probe = TestSubscriber::<Infallible>::new();
  completion_of(&source).subscribe(Box::new(probe.clone()));

  probe.cancel();
  probe.cancel();
  source.resolve(Ok(1));

  assert_eq!(source.resource().disposals(), 1);
  assert_eq!(probe.terminal_signals(), 0);
}

#[test]
fn error_after_cancellation_is_reported() {
  let source = Arc::new(ScriptedSingle::pending());
  let probe = TestSubscriber::<Infallible>::new();
  completion_of(&source).subscribe(Box::new(probe.clone()));
  probe.cancel();

  let ((), errors) = capture_undeliverable_errors(|| source.resolve(Err(StreamError::failed("late"))));

  assert!(errors.contains(&StreamError::failed("late")));
  assert!(probe.errors().is_empty());
}

#[test]
fn grants_asynchronous_fusion_with_an_empty_queue() {
  let source = Arc::new(ScriptedSingle::pending());
  let probe = TestSubscriber::<Infallible>::new().with_fusion(FusionRequest::new(FusionMode::Any)).with_manual_drain();
  completion_of(&source).subscribe(Box::new(probe.clone()));
  assert_eq!(probe.fusion_mode(), FusionMode::Async);

  let handle = probe.subscription().unwrap();
  let queue = handle.queue().unwrap();
  assert!(queue.is_empty());
  assert_eq!(queue.poll(), Ok(None));

  source.resolve(Ok(5));
  assert_eq!(probe.completions(), 1);
}
