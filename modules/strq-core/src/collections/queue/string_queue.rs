use alloc::boxed::Box;
use core::{fmt, iter};

use super::{
  element_arena::ElementArena,
  element_index::ElementIndex,
  queue_element::QueueElement,
  text_copy::{copy_terminated, terminated_len, try_clone_text},
  QueueError, RemoveOutcome,
};


/// Queue of owned strings supporting FIFO and LIFO access.
///
/// Texts can be inserted at either end and are always removed from the head. Inserting at the
/// tail and removing from the head gives FIFO order; inserting at the head gives LIFO order.
/// Insertion, removal and [`len`](Self::len) run in constant time, [`reverse`](Self::reverse) in
/// linear time without allocating.
///
/// Every inserted text is copied into storage owned by the queue. Dropping the queue releases all
/// remaining texts.
pub struct StringQueue {
  arena: ElementArena,
  head:  Option<ElementIndex>,
  tail:  Option<ElementIndex>,
  len:   usize,
}

impl StringQueue {
  /// Creates an empty queue. No storage is allocated until the first insertion.
  #[must_use]
  pub const fn new() -> Self {
    Self { arena: ElementArena::new(), head: None, tail: None, len: 0 }
  }

  /// Creates an empty queue with room for `capacity` elements.
  ///
  /// # Errors
  /// Returns [`QueueError::AllocError`] when the element storage cannot be reserved.
  pub fn try_with_capacity(capacity: usize) -> Result<Self, QueueError> {
    let arena = ElementArena::try_with_capacity(capacity).inspect_err(|_| {
      tracing::warn!(capacity, "failed to reserve queue storage");
    })?;
    Ok(Self { arena, head: None, tail: None, len: 0 })
  }

  /// Returns the number of stored texts.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` when the queue holds no texts.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Copies `text` into the queue as the new head.
  ///
  /// # Errors
  /// Returns [`QueueError::AllocError`] when storage for the element or the copy cannot be
  /// obtained. The queue is left unchanged in that case.
  pub fn insert_head(&mut self, text: &str) -> Result<(), QueueError> {
    let text = self.prepare(text)?;
    let index = self.arena.insert(QueueElement::with_next(text, self.head));
    self.head = Some(index);
    if self.tail.is_none() {
      self.tail = Some(index);
    }
    self.len += 1;
    Ok(())
  }

  /// Copies `text` into the queue as the new tail.
  ///
  /// # Errors
  /// Returns [`QueueError::AllocError`] when storage for the element or the copy cannot be
  /// obtained. The queue is left unchanged in that case.
  pub fn insert_tail(&mut self, text: &str) -> Result<(), QueueError> {
    let text = self.prepare(text)?;
    let index = self.arena.insert(QueueElement::new(text));
    match self.tail.and_then(|tail| self.arena.get_mut(tail)) {
      | Some(tail) => tail.set_next(Some(index)),
      | None => self.head = Some(index),
    }
    self.tail = Some(index);
    self.len += 1;
    Ok(())
  }

  /// Removes the head text, copying it into `out` when a non-empty buffer is supplied.
  ///
  /// The copy holds at most `out.len() - 1` content bytes followed by a
  /// [`TERMINATOR`](super::TERMINATOR); longer text is truncated. Without a buffer the text is
  /// released without copying. Removing the last text returns the queue to the state of a freshly
  /// created one.
  ///
  /// # Errors
  /// Returns [`QueueError::Empty`] when there is nothing to remove; `out` is not touched.
  pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<RemoveOutcome, QueueError> {
    let Some(element) = self.head.and_then(|head| self.arena.remove(head)) else {
      tracing::debug!("remove_head called on an empty queue");
      return Err(QueueError::Empty);
    };
    let (text, next) = element.into_parts();
    self.head = next;
    self.len -= 1;
    if self.head.is_none() {
      self.tail = None;
      self.arena.reset();
    }
    debug_assert_eq!(self.arena.occupied(), self.len);

    let outcome = match out {
      | Some(out) if !out.is_empty() => {
        let written = copy_terminated(&text, out);
        RemoveOutcome::Copied { written, truncated: written + 1 < terminated_len(&text) }
      },
      | _ => RemoveOutcome::Discarded,
    };
    Ok(outcome)
  }

  /// Reverses the order of the stored texts in place.
  ///
  /// Only links are rewritten; no text is copied, allocated or released.
  pub fn reverse(&mut self) {
    if self.len < 2 {
      return;
    }
    let mut previous = None;
    let mut current = self.head;
    while let Some(index) = current {
      let Some(element) = self.arena.get_mut(index) else {
        break;
      };
      current = element.replace_next(previous);
      previous = Some(index);
    }
    core::mem::swap(&mut self.head, &mut self.tail);
    tracing::trace!(len = self.len, "reversed queue");
  }

  fn prepare(&mut self, text: &str) -> Result<Box<str>, QueueError> {
    self.arena.try_reserve_slot().and_then(|()| try_clone_text(text)).inspect_err(|_| {
      tracing::warn!(text_len = text.len(), queue_len = self.len, "failed to allocate queue element");
    })
  }

  fn texts(&self) -> impl Iterator<Item = &str> + '_ {
    iter::successors(self.head, |&index| self.arena.get(index).and_then(QueueElement::next))
      .filter_map(|index| self.arena.get(index).map(QueueElement::text))
  }
}

impl Default for StringQueue {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for StringQueue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.texts()).finish()
  }
}

#[cfg(test)]
impl StringQueue {
  /// Walks the chain and checks every structural invariant of the queue.
  fn assert_invariants(&self) {
    assert_eq!(self.head.is_none(), self.len == 0, "head presence must follow len");
    assert_eq!(self.tail.is_none(), self.len == 0, "tail presence must follow len");
    if self.len == 1 {
      assert_eq!(self.head, self.tail, "single element must be both head and tail");
    }

    let mut visited = 0;
    let mut last = None;
    let mut current = self.head;
    while let Some(index) = current {
      visited += 1;
      assert!(visited <= self.len, "chain is longer than len or cyclic");
      last = Some(index);
      current = self.arena.get(index).expect("linked slot must be occupied").next();
    }
    assert_eq!(visited, self.len, "reachable elements must match len");
    assert_eq!(last, self.tail, "chain must end at tail");
    assert_eq!(self.arena.occupied(), self.len, "arena must hold exactly the linked elements");
  }
}
