//! Argument-checked query operators.
//!
//! Both selectors are validated before either is invoked; an absent one is
//! reported as `Error::Argument` with its parameter name.

use boxing_core::{require, Boxed, Result};
use boxing_rx::{Observable, Stream};

use crate::query::{BoxQuery, SelectMany};

pub fn select<T, R, F>(boxed: Boxed<T>, selector: Option<F>) -> Result<Boxed<R>>
where
    F: FnOnce(T) -> R,
{
    let selector = require(selector, "selector")?;
    Ok(boxed.select(selector))
}

pub fn select_many<T, U, R, S, C>(
    boxed: Boxed<T>,
    second_selector: Option<S>,
    result_selector: Option<C>,
) -> Result<Boxed<R>>
where
    S: FnOnce(&T) -> Boxed<U>,
    C: FnOnce(T, U) -> R,
{
    let second_selector = require(second_selector, "second_selector")?;
    let result_selector = require(result_selector, "result_selector")?;
    Ok(boxed.select_many(second_selector, result_selector))
}

pub fn select_many_seq<T, I, R, S, C>(
    boxed: Boxed<T>,
    second_selector: Option<S>,
    result_selector: Option<C>,
) -> Result<SelectMany<T, I, S, C>>
where
    I: IntoIterator,
    S: FnOnce(&T) -> I,
    C: FnMut(&T, I::Item) -> R,
{
    let second_selector = require(second_selector, "second_selector")?;
    let result_selector = require(result_selector, "result_selector")?;
    Ok(boxed.select_many_seq(second_selector, result_selector))
}

pub fn select_many_stream<T, U, R, O, S, C>(
    boxed: Boxed<T>,
    second_selector: Option<S>,
    result_selector: Option<C>,
) -> Result<Stream<R>>
where
    T: 'static,
    U: 'static,
    R: 'static,
    O: Observable<U> + 'static,
    S: Fn(&T) -> O + 'static,
    C: Fn(&T, U) -> R + 'static,
{
    let second_selector = require(second_selector, "second_selector")?;
    let result_selector = require(result_selector, "result_selector")?;
    Ok(boxed.select_many_stream(second_selector, result_selector))
}
