//! Query operators as an extension trait on `Boxed`.

use boxing_core::{Boxed, Cursor, Error};
use boxing_rx::{Observable, Observer, Stream};

pub trait BoxQuery<T>: Sized {
    /// Same as `map`.
    fn select<R, F>(self, selector: F) -> Boxed<R>
    where
        F: FnOnce(T) -> R;

    /// Container to container; same as `flat_map`.
    fn select_many<U, R, S, C>(self, second_selector: S, result_selector: C) -> Boxed<R>
    where
        S: FnOnce(&T) -> Boxed<U>,
        C: FnOnce(T, U) -> R;

    /// Container to finite sequence. Nothing runs until the first `next`.
    fn select_many_seq<I, R, S, C>(
        self,
        second_selector: S,
        result_selector: C,
    ) -> SelectMany<T, I, S, C>
    where
        I: IntoIterator,
        S: FnOnce(&T) -> I,
        C: FnMut(&T, I::Item) -> R;

    /// Container to push stream. Each subscription asks `second_selector` for
    /// a fresh inner stream and forwards its notifications, combining every
    /// value with the container's.
    fn select_many_stream<U, R, O, S, C>(self, second_selector: S, result_selector: C) -> Stream<R>
    where
        T: 'static,
        U: 'static,
        R: 'static,
        O: Observable<U> + 'static,
        S: Fn(&T) -> O + 'static,
        C: Fn(&T, U) -> R + 'static;
}

impl<T> BoxQuery<T> for Boxed<T> {
    fn select<R, F>(self, selector: F) -> Boxed<R>
    where
        F: FnOnce(T) -> R,
    {
        self.map(selector)
    }

    fn select_many<U, R, S, C>(self, second_selector: S, result_selector: C) -> Boxed<R>
    where
        S: FnOnce(&T) -> Boxed<U>,
        C: FnOnce(T, U) -> R,
    {
        self.flat_map(second_selector, result_selector)
    }

    fn select_many_seq<I, R, S, C>(
        self,
        second_selector: S,
        result_selector: C,
    ) -> SelectMany<T, I, S, C>
    where
        I: IntoIterator,
        S: FnOnce(&T) -> I,
        C: FnMut(&T, I::Item) -> R,
    {
        SelectMany {
            outer: Cursor::new(self.into_inner()),
            second_selector: Some(second_selector),
            inner: None,
            result_selector,
        }
    }

    fn select_many_stream<U, R, O, S, C>(self, second_selector: S, result_selector: C) -> Stream<R>
    where
        T: 'static,
        U: 'static,
        R: 'static,
        O: Observable<U> + 'static,
        S: Fn(&T) -> O + 'static,
        C: Fn(&T, U) -> R + 'static,
    {
        let value = self.into_inner();
        Stream::create(move |observer| {
            let inner = second_selector(&value);
            let mut project = Project {
                outer: observer,
                value: &value,
                result_selector: &result_selector,
            };
            Ok(inner.subscribe(&mut project))
        })
    }
}

/// Lazy flattening of a one-element container over an inner sequence.
pub struct SelectMany<T, I, S, C>
where
    I: IntoIterator,
{
    outer: Cursor<T>,
    second_selector: Option<S>,
    inner: Option<I::IntoIter>,
    result_selector: C,
}

impl<T, I, S, C, R> Iterator for SelectMany<T, I, S, C>
where
    I: IntoIterator,
    S: FnOnce(&T) -> I,
    C: FnMut(&T, I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(item) = inner.next() {
                    let value = self.outer.current().ok()?;
                    return Some((self.result_selector)(value, item));
                }
                self.inner = None;
            }

            if !self.outer.advance() {
                return None;
            }
            // The outer side holds a single value, so the selector runs once.
            let second_selector = self.second_selector.take()?;
            let value = self.outer.current().ok()?;
            self.inner = Some(second_selector(value).into_iter());
        }
    }
}

/// Inner-stream observer that combines each value with the container's.
struct Project<'a, T, R, C> {
    outer: &'a mut dyn Observer<R>,
    value: &'a T,
    result_selector: &'a C,
}

impl<T, U, R, C> Observer<U> for Project<'_, T, R, C>
where
    C: Fn(&T, U) -> R,
{
    fn on_next(&mut self, item: U) {
        let result = (self.result_selector)(self.value, item);
        self.outer.on_next(result);
    }

    fn on_error(&mut self, error: Error) {
        self.outer.on_error(error);
    }

    fn on_completed(&mut self) {
        self.outer.on_completed();
    }
}
