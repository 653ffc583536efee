//! Entry points for callers that track queues as optional handles.
//!
//! Every function accepts an absent queue. Mutating calls on an absent queue report failure and
//! queries report an empty queue, so a caller never has to check for presence first. Failures
//! collapse to `false`; use the [`StringQueue`] methods directly to learn why an operation failed.

use super::StringQueue;


/// Creates an empty queue.
///
/// An empty queue owns no storage, so creation always yields a queue. Use
/// [`StringQueue::try_with_capacity`] to pre-allocate and observe allocation failure.
#[must_use]
pub const fn create() -> Option<StringQueue> {
  Some(StringQueue::new())
}

/// Releases `queue` together with every text it still holds. An absent queue is ignored.
pub fn destroy(queue: Option<StringQueue>) {
  if let Some(queue) = queue {
    tracing::trace!(len = queue.len(), "destroying queue");
    drop(queue);
  }
}

/// Copies `text` into `queue` as its new head. Returns `false` for an absent queue or when storage
/// cannot be obtained.
pub fn insert_head(queue: Option<&mut StringQueue>, text: &str) -> bool {
  queue.is_some_and(|queue| queue.insert_head(text).is_ok())
}

/// Copies `text` into `queue` as its new tail. Returns `false` for an absent queue or when storage
/// cannot be obtained.
pub fn insert_tail(queue: Option<&mut StringQueue>, text: &str) -> bool {
  queue.is_some_and(|queue| queue.insert_tail(text).is_ok())
}

/// Removes the head of `queue`, copying it into `out` when supplied.
///
/// Returns `false` and leaves `out` untouched when the queue is absent or empty. See
/// [`StringQueue::remove_head`] for the copy semantics.
pub fn remove_head(queue: Option<&mut StringQueue>, out: Option<&mut [u8]>) -> bool {
  queue.is_some_and(|queue| queue.remove_head(out).is_ok())
}

/// Returns the number of texts in `queue`, or `0` for an absent queue.
#[must_use]
pub fn size(queue: Option<&StringQueue>) -> usize {
  queue.map_or(0, StringQueue::len)
}

/// Reverses `queue` in place. An absent queue is ignored.
pub fn reverse(queue: Option<&mut StringQueue>) {
  if let Some(queue) = queue {
    queue.reverse();
  }
}
