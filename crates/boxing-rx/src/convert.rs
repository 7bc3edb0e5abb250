//! Container-to-stream conversion.

use boxing_core::Boxed;

use crate::disposable::Disposable;
use crate::observable::Stream;

pub trait ToStream<T> {
    /// One-element stream: `on_next(value)` then `on_completed()`, delivered
    /// synchronously on every subscription.
    fn to_stream(&self) -> Stream<T>;
}

impl<T: Clone + 'static> ToStream<T> for Boxed<T> {
    fn to_stream(&self) -> Stream<T> {
        let value = self.value().clone();
        Stream::create(move |observer| {
            observer.on_next(value.clone());
            observer.on_completed();
            Ok(Disposable::nop())
        })
    }
}
