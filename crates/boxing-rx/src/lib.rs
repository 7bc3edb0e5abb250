#![forbid(unsafe_code)]
//! boxing-rx: a minimal, synchronous push-stream primitive.
//!
//! Design intent:
//! - Everything runs on the calling thread; `subscribe` returns only after the
//!   subscription function (and every notification it sends) has finished.
//! - Failures of a subscription function never reach the caller of `subscribe`;
//!   they are routed once into the observer's `on_error`.
//! - Disposal is advisory. A `Disposable` runs its release action at most once;
//!   nothing here stops a subscription function that ignores it.
//!
//! No schedulers, buffering or multi-value operators.

pub mod convert;
pub mod disposable;
pub mod observable;
pub mod observer;
pub mod ops;

pub use boxing_core::{Error, Result};
pub use convert::ToStream;
pub use disposable::Disposable;
pub use observable::{Observable, Stream};
pub use observer::{Observer, Subscriber};
