//! Convenient re-exports for downstream crates.

pub use crate::boxed::Boxed;
pub use crate::config::{CallbackPolicy, RxConfig};
pub use crate::error::{Error, Result};
pub use crate::sequence::{Cursor, CursorState, Sequence};
