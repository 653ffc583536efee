/// String queue and its supporting storage.
pub mod queue;

pub use queue::{QueueError, RemoveOutcome, StringQueue};
