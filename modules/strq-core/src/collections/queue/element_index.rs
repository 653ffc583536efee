/// Slot position of an element inside the element arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ElementIndex(usize);

impl ElementIndex {
  pub(crate) const fn new(raw: usize) -> Self {
    Self(raw)
  }

  pub(crate) const fn get(self) -> usize {
    self.0
  }
}
