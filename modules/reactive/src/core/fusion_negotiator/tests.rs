use super::FusionNegotiator;
use crate::core::FusionMode;

#[test]
fn grant_is_fixed_after_first_negotiation() {
  let negotiator = FusionNegotiator::new();
  assert!(!negotiator.is_negotiated());
  assert_eq!(negotiator.negotiate(|| FusionMode::Sync), FusionMode::Sync);
  assert_eq!(negotiator.negotiate(|| FusionMode::Async), FusionMode::Sync);
  assert_eq!(negotiator.granted(), FusionMode::Sync);
  assert!(negotiator.is_negotiated());
}

#[test]
fn later_requests_do_not_rerun_the_negotiation() {
  let negotiator = FusionNegotiator::new();
  negotiator.negotiate(|| FusionMode::None);
  let mut invoked = false;
  let granted = negotiator.negotiate(|| {
    invoked = true;
    FusionMode::Async
  });
  assert!(!invoked);
  assert_eq!(granted, FusionMode::None);
}

#[test]
fn any_is_never_stored_as_a_grant() {
  let negotiator = FusionNegotiator::new();
  assert_eq!(negotiator.negotiate(|| FusionMode::Any), FusionMode::None);
  assert_eq!(negotiator.granted(), FusionMode::None);
}

#[test]
fn mode_capabilities() {
  assert!(FusionMode::Any.accepts_sync());
  assert!(FusionMode::Any.accepts_async());
  assert!(!FusionMode::Sync.accepts_async());
  assert!(!FusionMode::Async.accepts_sync());
  assert!(!FusionMode::None.is_fused());
}
