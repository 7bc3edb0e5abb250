#![forbid(unsafe_code)]
//! boxing-linq: `select` / `select_many` over `Boxed` containers.
//!
//! The second operand of a composition decides which algebra runs, and since
//! Rust has no return-type overloading each target gets its own operation:
//! - `select_many`: the second operand yields another `Boxed` (flat_map).
//! - `select_many_seq`: it yields a finite sequence; the result is a lazy
//!   flattened iterator.
//! - `select_many_stream`: it yields a push stream; the result is a stream.
//!
//! [`ops`] has the same surface with `Option` arguments and argument errors.

pub mod ops;
pub mod query;

pub use query::{BoxQuery, SelectMany};
