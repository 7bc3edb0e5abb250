//! Observer trait and the callback-based [`Subscriber`].

use std::fmt;

use boxing_core::Error;

/// Receiver of push notifications: `on_next*` then at most one of
/// `on_error` / `on_completed`.
pub trait Observer<T> {
    fn on_next(&mut self, value: T);
    fn on_error(&mut self, error: Error);
    fn on_completed(&mut self);
}

type NextFn<'a, T> = Box<dyn FnMut(T) + 'a>;
type ErrorFn<'a> = Box<dyn FnMut(Error) + 'a>;
type CompletedFn<'a> = Box<dyn FnMut() + 'a>;

/// Observer built from three optional callbacks. Missing callbacks are no-ops,
/// so an error delivered to a subscriber without `on_error` is dropped.
pub struct Subscriber<'a, T> {
    on_next: Option<NextFn<'a, T>>,
    on_error: Option<ErrorFn<'a>>,
    on_completed: Option<CompletedFn<'a>>,
}

impl<'a, T> Subscriber<'a, T> {
    pub fn new() -> Self {
        Self {
            on_next: None,
            on_error: None,
            on_completed: None,
        }
    }

    pub fn from_callbacks<N, E, C>(
        on_next: Option<N>,
        on_error: Option<E>,
        on_completed: Option<C>,
    ) -> Self
    where
        N: FnMut(T) + 'a,
        E: FnMut(Error) + 'a,
        C: FnMut() + 'a,
    {
        Self {
            on_next: on_next.map(|f| Box::new(f) as NextFn<'a, T>),
            on_error: on_error.map(|f| Box::new(f) as ErrorFn<'a>),
            on_completed: on_completed.map(|f| Box::new(f) as CompletedFn<'a>),
        }
    }

    pub fn with_next<N>(mut self, on_next: N) -> Self
    where
        N: FnMut(T) + 'a,
    {
        self.on_next = Some(Box::new(on_next));
        self
    }

    pub fn with_error<E>(mut self, on_error: E) -> Self
    where
        E: FnMut(Error) + 'a,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }

    pub fn with_completed<C>(mut self, on_completed: C) -> Self
    where
        C: FnMut() + 'a,
    {
        self.on_completed = Some(Box::new(on_completed));
        self
    }
}

impl<T> Default for Subscriber<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observer<T> for Subscriber<'_, T> {
    fn on_next(&mut self, value: T) {
        if let Some(f) = self.on_next.as_mut() {
            f(value);
        }
    }

    fn on_error(&mut self, error: Error) {
        if let Some(f) = self.on_error.as_mut() {
            f(error);
        }
    }

    fn on_completed(&mut self) {
        if let Some(f) = self.on_completed.as_mut() {
            f();
        }
    }
}

impl<T> fmt::Debug for Subscriber<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("on_next", &self.on_next.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_completed", &self.on_completed.is_some())
            .finish()
    }
}
