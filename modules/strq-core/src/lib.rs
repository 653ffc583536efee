#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Owned string queue with FIFO and LIFO access.
//!
//! The crate provides [`StringQueue`], a singly linked sequence of owned strings that supports
//! insertion at either end, removal from the head into a bounded caller buffer, constant-time size
//! queries and in-place reversal. Elements are kept in an index arena, so links are plain indices
//! and no element is ever shared. The [`handle`](collections::queue::handle) module exposes the same
//! operations for callers that track queues as optional handles.
//!
//! The crate is `no_std` compatible when the default `std` feature is disabled; it only requires
//! `alloc`.

extern crate alloc;

/// Collection data structures.
pub mod collections;

pub use collections::queue::{handle, QueueError, RemoveOutcome, StringQueue, TERMINATOR};
