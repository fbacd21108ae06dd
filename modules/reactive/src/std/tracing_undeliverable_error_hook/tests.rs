extern crate std;

use alloc::{borrow::ToOwned, format, string::String, vec::Vec};
use std::{
  fmt,
  sync::{Arc, Mutex},
};

use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
  subscriber::with_default,
};

use super::TracingUndeliverableErrorHook;
use crate::core::{StreamError, UndeliverableErrorHook};

#[test]
fn forwards_reports_to_tracing() {
  let collector = RecordingSubscriber::default();
  let shared = collector.clone();
  with_default(shared, || {
    TracingUndeliverableErrorHook.on_undeliverable(&StreamError::failed("disk full"));
  });

  let events = collector.events();
  assert_eq!(events.len(), 1);
  let event = &events[0];
  assert_eq!(event.level, Level::ERROR);
  assert_eq!(event.target, TracingUndeliverableErrorHook::DEFAULT_TARGET);
  assert_eq!(event.message, "stream failed: disk full");
  assert_eq!(event.protocol_violation, Some(false));
}

#[test]
fn flags_protocol_violations() {
  let collector = RecordingSubscriber::default();
  let shared = collector.clone();
  with_default(shared, || {
    TracingUndeliverableErrorHook.on_undeliverable(&StreamError::InvalidDemand(0));
  });

  let events = collector.events();
  assert_eq!(events.len(), 1);
  assert_eq!(events[0].message, "invalid demand request: 0");
  assert_eq!(events[0].protocol_violation, Some(true));
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
  events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
  fn events(&self) -> Vec<CapturedEvent> {
    self.events.lock().expect("lock").clone()
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _: &Id, _: &Record<'_>) {}

  fn record_follows_from(&self, _: &Id, _: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let metadata = event.metadata();
    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);
    let captured = CapturedEvent {
      level:              *metadata.level(),
      target:             metadata.target().to_owned(),
      message:            visitor.message.unwrap_or_default(),
      protocol_violation: visitor.protocol_violation,
    };
    self.events.lock().expect("lock").push(captured);
  }

  fn enter(&self, _: &Id) {}

  fn exit(&self, _: &Id) {}
}

#[derive(Clone, Debug)]
struct CapturedEvent {
  level:              Level,
  target:             String,
  message:            String,
  protocol_violation: Option<bool>,
}

#[derive(Default)]
struct EventVisitor {
  message:            Option<String>,
  protocol_violation: Option<bool>,
}

impl Visit for EventVisitor {
  fn record_bool(&mut self, field: &Field, value: bool) {
    if field.name() == "protocol_violation" {
      self.protocol_violation = Some(value);
    }
  }

  fn record_str(&mut self, field: &Field, value: &str) {
    if field.name() == "message" {
      self.message = Some(value.to_owned());
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
    if field.name() == "message" && self.message.is_none() {
      self.message = Some(format_value(value));
    }
  }
}

fn format_value(value: &dyn fmt::Debug) -> String {
  let rendered = format!("{value:?}");
  rendered.trim_matches('"').to_owned()
}
