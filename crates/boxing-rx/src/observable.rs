//! The subscription contract and the function-backed [`Stream`].
//!
//! `try_subscribe` is the raw contract an implementation provides; it may fail.
//! `subscribe` is the defensive entry point callers use: a failure is handed to
//! the observer's `on_error` and the no-op [`Disposable`] comes back instead.

use std::fmt;

use boxing_core::{Error, Result};

use crate::disposable::Disposable;
use crate::observer::Observer;

pub trait Observable<T> {
    /// Run the subscription synchronously against `observer`.
    fn try_subscribe(&self, observer: &mut dyn Observer<T>) -> Result<Disposable>;

    /// Like [`try_subscribe`](Self::try_subscribe), but a subscription failure
    /// becomes an `on_error` notification and never reaches the caller.
    ///
    /// The observer sees at most one terminal notification and nothing after
    /// it; a failure reported after completion is dropped. Only returned
    /// errors are routed. A panic in the subscription unwinds through this
    /// call.
    fn subscribe(&self, observer: &mut dyn Observer<T>) -> Disposable {
        #[cfg(feature = "tracing")]
        tracing::trace!("subscribe");

        let mut guard = Terminal::new(observer);
        match self.try_subscribe(&mut guard) {
            Ok(disposable) => disposable,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %e, "subscription failed; routing to observer");
                guard.on_error(e);
                Disposable::nop()
            }
        }
    }
}

type SubscribeFn<T> = dyn Fn(&mut dyn Observer<T>) -> Result<Disposable>;

/// Push stream backed by a subscription function. Each `subscribe` call
/// invokes the function once, on the calling thread.
pub struct Stream<T> {
    subscribe_fn: Box<SubscribeFn<T>>,
}

impl<T> Stream<T> {
    pub fn create<F>(subscribe_fn: F) -> Self
    where
        F: Fn(&mut dyn Observer<T>) -> Result<Disposable> + 'static,
    {
        Self {
            subscribe_fn: Box::new(subscribe_fn),
        }
    }
}

impl<T> Observable<T> for Stream<T> {
    fn try_subscribe(&self, observer: &mut dyn Observer<T>) -> Result<Disposable> {
        let mut guard = Terminal::new(observer);
        (self.subscribe_fn)(&mut guard)
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

/// Forwards to the wrapped observer until the first terminal notification,
/// then drops everything.
struct Terminal<'a, T> {
    inner: &'a mut dyn Observer<T>,
    stopped: bool,
}

impl<'a, T> Terminal<'a, T> {
    fn new(inner: &'a mut dyn Observer<T>) -> Self {
        Self {
            inner,
            stopped: false,
        }
    }
}

impl<T> Observer<T> for Terminal<'_, T> {
    fn on_next(&mut self, value: T) {
        if !self.stopped {
            self.inner.on_next(value);
        }
    }

    fn on_error(&mut self, error: Error) {
        if !self.stopped {
            self.stopped = true;
            self.inner.on_error(error);
        }
    }

    fn on_completed(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.inner.on_completed();
        }
    }
}
