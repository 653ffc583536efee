use alloc::vec::Vec;

use super::{element_index::ElementIndex, queue_element::QueueElement, QueueError};


/// Slot storage owning every element of a queue.
///
/// Vacated slots are recycled through a free list. The free list always has room for every slot,
/// so releasing an element never allocates.
#[derive(Debug)]
pub(crate) struct ElementArena {
  slots:  Vec<Option<QueueElement>>,
  vacant: Vec<ElementIndex>,
}

impl ElementArena {
  pub(crate) const fn new() -> Self {
    Self { slots: Vec::new(), vacant: Vec::new() }
  }

  /// Creates an arena able to hold `capacity` elements without growing.
  pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, QueueError> {
    let mut arena = Self::new();
    arena.slots.try_reserve_exact(capacity).map_err(|_| QueueError::AllocError)?;
    arena.vacant.try_reserve_exact(capacity).map_err(|_| QueueError::AllocError)?;
    Ok(arena)
  }

  /// Makes sure the next [`insert`](Self::insert) and its later removal need no allocation.
  pub(crate) fn try_reserve_slot(&mut self) -> Result<(), QueueError> {
    if !self.vacant.is_empty() {
      return Ok(());
    }
    self.slots.try_reserve(1).map_err(|_| QueueError::AllocError)?;
    self.vacant.try_reserve(self.slots.len() + 1).map_err(|_| QueueError::AllocError)
  }

  /// Stores `element` and returns its index. Call [`try_reserve_slot`](Self::try_reserve_slot) first.
  pub(crate) fn insert(&mut self, element: QueueElement) -> ElementIndex {
    match self.vacant.pop() {
      | Some(index) => {
        self.slots[index.get()] = Some(element);
        index
      },
      | None => {
        let index = ElementIndex::new(self.slots.len());
        self.slots.push(Some(element));
        index
      },
    }
  }

  /// Takes the element out of its slot and recycles the slot.
  pub(crate) fn remove(&mut self, index: ElementIndex) -> Option<QueueElement> {
    let element = self.slots.get_mut(index.get())?.take()?;
    self.vacant.push(index);
    Some(element)
  }

  pub(crate) fn get(&self, index: ElementIndex) -> Option<&QueueElement> {
    self.slots.get(index.get())?.as_ref()
  }

  pub(crate) fn get_mut(&mut self, index: ElementIndex) -> Option<&mut QueueElement> {
    self.slots.get_mut(index.get())?.as_mut()
  }

  /// Drops every remaining element and forgets all slots.
  pub(crate) fn reset(&mut self) {
    self.slots.clear();
    self.vacant.clear();
  }

  /// Number of slots currently holding an element.
  pub(crate) fn occupied(&self) -> usize {
    self.slots.len() - self.vacant.len()
  }
}
