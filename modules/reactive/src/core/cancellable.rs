use alloc::boxed::Box;

/// Handle whose underlying upstream resource can be released.
pub trait Cancellable: Send + Sync {
  /// Releases the resource. Must tolerate repeated calls.
  fn cancel(&self);
}

impl<C: Cancellable + ?Sized> Cancellable for Box<C> {
  fn cancel(&self) {
    (**self).cancel();
  }
}
