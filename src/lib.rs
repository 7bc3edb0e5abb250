#![forbid(unsafe_code)]
//! boxing: one value in a box, composable with sequences and push streams.
//!
//! Facade over the workspace crates:
//! - `boxing-core`: [`Boxed`], the container algebra, the one-element
//!   sequence adapter, errors and configuration.
//! - `boxing-rx`: the synchronous push-stream primitive ([`rx`]).
//! - `boxing-linq`: `select` / `select_many` across all three ([`linq`]).
//!
//! ```
//! use boxing::prelude::*;
//!
//! let doubled: Vec<i32> = Boxed::new(42)
//!     .select_many_seq(|_| vec![1, 2, 3], |x, y| x * y)
//!     .collect();
//! assert_eq!(doubled, vec![42, 84, 126]);
//! ```

pub use boxing_core::{algebra, config, error, sequence};
pub use boxing_core::{Boxed, CallbackPolicy, Cursor, CursorState, Error, Result, RxConfig, Sequence};

pub mod rx {
    //! Push streams; see `boxing-rx`.
    pub use boxing_rx::*;
}

pub mod linq {
    //! Query operators; see `boxing-linq`.
    pub use boxing_linq::*;
}

pub mod prelude {
    //! Convenient re-exports for client code.
    pub use boxing_core::prelude::*;
    pub use boxing_linq::BoxQuery;
    pub use boxing_rx::{Disposable, Observable, Observer, Stream, Subscriber, ToStream};
}
