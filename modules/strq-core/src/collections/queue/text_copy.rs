//! Helpers for copying stored text in and out of the queue.
//!
//! Stored copies own the full content of the inserted `&str`. Copies handed back to callers are
//! terminated byte strings, so their content ends at the first [`TERMINATOR`] byte.

use alloc::{boxed::Box, string::String};

use super::QueueError;


/// Byte written after the content of every copy placed in a caller buffer.
pub const TERMINATOR: u8 = 0;

/// Returns the storage size needed for a terminated copy of `text`, terminator included.
#[must_use]
pub fn terminated_len(text: &str) -> usize {
  content_len(text.as_bytes()) + 1
}

/// Copies `text` into `out` as a terminated byte string.
///
/// At most `out.len() - 1` content bytes are written and a [`TERMINATOR`] always follows them.
/// Longer text is truncated silently. An empty `out` is left untouched. Returns the number of
/// content bytes written.
pub fn copy_terminated(text: &str, out: &mut [u8]) -> usize {
  let Some(room) = out.len().checked_sub(1) else {
    return 0;
  };
  let bytes = text.as_bytes();
  let written = content_len(bytes).min(room);
  out[..written].copy_from_slice(&bytes[..written]);
  out[written] = TERMINATOR;
  written
}

/// Makes an owned copy of `text` sized to its full content.
///
/// # Errors
/// Returns [`QueueError::AllocError`] when storage for the copy cannot be reserved.
pub fn try_clone_text(text: &str) -> Result<Box<str>, QueueError> {
  let mut copy = String::new();
  copy.try_reserve_exact(text.len()).map_err(|_| QueueError::AllocError)?;
  copy.push_str(text);
  Ok(copy.into_boxed_str())
}

fn content_len(bytes: &[u8]) -> usize {
  bytes.iter().position(|&byte| byte == TERMINATOR).unwrap_or(bytes.len())
}
