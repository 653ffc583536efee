use alloc::boxed::Box;

use super::element_index::ElementIndex;

/// One stored text together with the link to its successor.
#[derive(Debug)]
pub(crate) struct QueueElement {
  text: Box<str>,
  next: Option<ElementIndex>,
}

impl QueueElement {
  /// Creates an element that is not yet linked to a successor.
  pub(crate) const fn new(text: Box<str>) -> Self {
    Self::with_next(text, None)
  }

  pub(crate) const fn with_next(text: Box<str>, next: Option<ElementIndex>) -> Self {
    Self { text, next }
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }

  pub(crate) const fn next(&self) -> Option<ElementIndex> {
    self.next
  }

  pub(crate) fn set_next(&mut self, next: Option<ElementIndex>) {
    self.next = next;
  }

  /// Points the element at `next` and returns the link it held before.
  pub(crate) fn replace_next(&mut self, next: Option<ElementIndex>) -> Option<ElementIndex> {
    core::mem::replace(&mut self.next, next)
  }

  pub(crate) fn into_parts(self) -> (Box<str>, Option<ElementIndex>) {
    (self.text, self.next)
  }
}
