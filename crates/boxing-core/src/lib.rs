#![forbid(unsafe_code)]
//! boxing-core: the single-value container and everything that is pure about it.
//!
//! Responsibilities:
//! - `Boxed<T>`: exactly one value, structural equality/hash/display.
//! - The container algebra (bind/map/flat_map/defer/apply), both as total
//!   methods and as argument-checked free functions in [`algebra`].
//! - The restartable one-element sequence adapter ([`Sequence`] / [`Cursor`]).
//! - The canonical error type and the configuration shared by higher crates.
//!
//! No I/O, no threads, no logging here. Streams live in `boxing-rx`, query
//! operators in `boxing-linq`.

pub mod algebra;
pub mod boxed;
pub mod config;
pub mod error;
pub mod prelude;
pub mod sequence;

pub use boxed::Boxed;
pub use config::{CallbackPolicy, RxConfig};
pub use error::{require, Error, Result};
pub use sequence::{Cursor, CursorState, Sequence};
