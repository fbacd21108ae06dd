use alloc::{boxed::Box, vec, vec::Vec};

use super::validate_rails;
use crate::core::{StreamError, Subscriber, testing::TestSubscriber};

fn boxed(probes: &[TestSubscriber<u8>]) -> Vec<Box<dyn Subscriber<u8>>> {
  probes.iter().map(|probe| -> Box<dyn Subscriber<u8>> { Box::new(probe.clone()) }).collect()
}

#[test]
fn matching_count_passes_untouched() {
  let probes = vec![TestSubscriber::new(), TestSubscriber::new()];
  let mut subscribers = boxed(&probes);

  assert!(validate_rails(2, &mut subscribers));
  assert!(probes.iter().all(|probe| probe.subscriptions() == 0));
}

#[test]
fn mismatch_fails_every_subscriber() {
  let probes = vec![TestSubscriber::new(), TestSubscriber::new(), TestSubscriber::new()];
  let mut subscribers = boxed(&probes);

  assert!(!validate_rails(2, &mut subscribers));
  let expected = StreamError::RailCountMismatch { expected: 2, actual: 3 };
  for probe in &probes {
    assert_eq!(probe.errors(), vec![expected.clone()]);
  }
}
