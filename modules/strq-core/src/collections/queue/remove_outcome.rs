/// Result of a successful head removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
  /// The removed text was copied into the caller's buffer and terminated.
  Copied {
    /// Number of content bytes written, excluding the terminator.
    written:   usize,
    /// Whether the buffer was too small to hold the whole text.
    truncated: bool,
  },
  /// No usable buffer was supplied; the text was released without being copied.
  Discarded,
}

impl RemoveOutcome {
  /// Returns the number of content bytes written to the caller's buffer.
  #[must_use]
  pub const fn written(&self) -> usize {
    match self {
      | Self::Copied { written, .. } => *written,
      | Self::Discarded => 0,
    }
  }

  /// Returns `true` when the copy was cut short by the buffer capacity.
  #[must_use]
  pub const fn is_truncated(&self) -> bool {
    matches!(self, Self::Copied { truncated: true, .. })
  }
}
