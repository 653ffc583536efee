/// Errors that may arise while operating on a [`StringQueue`](super::StringQueue).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
  /// Storage for an element or for its text copy could not be obtained.
  #[error("failed to allocate queue storage")]
  AllocError,
  /// The queue has no elements to remove.
  #[error("queue is empty")]
  Empty,
}
