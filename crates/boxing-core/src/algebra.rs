//! Argument-checked container algebra.
//!
//! Every function here takes its function arguments as `Option`s and fails with
//! [`Error::Argument`](crate::Error::Argument) naming the first absent one,
//! before invoking anything. The checks run in parameter order, so each
//! parameter is reported by name when it is the only one missing.

use crate::boxed::Boxed;
use crate::error::{require, Result};
use crate::sequence::Sequence;

/// `return`.
pub fn ret<T>(value: T) -> Boxed<T> {
    Boxed::new(value)
}

pub fn value<T>(boxed: Boxed<T>) -> T {
    boxed.into_inner()
}

pub fn bind<T, R, F>(boxed: Boxed<T>, function: Option<F>) -> Result<Boxed<R>>
where
    F: FnOnce(T) -> Boxed<R>,
{
    let function = require(function, "function")?;
    Ok(boxed.bind(function))
}

pub fn map<T, R, F>(boxed: Boxed<T>, mapper: Option<F>) -> Result<Boxed<R>>
where
    F: FnOnce(T) -> R,
{
    let mapper = require(mapper, "mapper")?;
    Ok(boxed.map(mapper))
}

pub fn flat_map<T, U, R, M, C>(
    boxed: Boxed<T>,
    mapper: Option<M>,
    resultor: Option<C>,
) -> Result<Boxed<R>>
where
    M: FnOnce(&T) -> Boxed<U>,
    C: FnOnce(T, U) -> R,
{
    let mapper = require(mapper, "mapper")?;
    let resultor = require(resultor, "resultor")?;
    Ok(boxed.flat_map(mapper, resultor))
}

pub fn run_map<T, R, F>(arg: T, mapper: Option<F>) -> Result<R>
where
    F: FnOnce(Boxed<T>) -> Boxed<R>,
{
    let mapper = require(mapper, "mapper")?;
    Ok(Boxed::run_map(arg, mapper))
}

/// Lift a function of any arity into a container.
pub fn defer<F>(function: Option<F>) -> Result<Boxed<F>> {
    require(function, "function").map(Boxed::defer)
}

pub fn to_sequence<T>(boxed: Boxed<T>) -> Sequence<T> {
    boxed.into_sequence()
}
