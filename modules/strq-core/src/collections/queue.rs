//! Owned string queue backed by an element arena.

mod element_arena;
mod element_index;
pub mod handle;
mod queue_element;
mod queue_error;
mod remove_outcome;
mod string_queue;
pub mod text_copy;

pub use queue_error::QueueError;
pub use remove_outcome::RemoveOutcome;
pub use string_queue::StringQueue;
pub use text_copy::TERMINATOR;
