//! Argument-checked entry points.
//!
//! Argument errors are returned to the caller before anything is subscribed.
//! Once a subscription starts, failures only travel through `on_error`.

use boxing_core::{require, CallbackPolicy, Error, Result, RxConfig};

use crate::disposable::Disposable;
use crate::observable::{Observable, Stream};
use crate::observer::{Observer, Subscriber};

pub fn create<T, F>(subscription_fn: Option<F>) -> Result<Stream<T>>
where
    F: Fn(&mut dyn Observer<T>) -> Result<Disposable> + 'static,
{
    require(subscription_fn, "subscription_fn").map(Stream::create)
}

pub fn subscribe_observer<T, S>(
    source: &S,
    observer: Option<&mut dyn Observer<T>>,
) -> Result<Disposable>
where
    S: Observable<T> + ?Sized,
{
    let observer = require(observer, "observer")?;
    Ok(source.subscribe(observer))
}

/// Subscribe with loose callbacks under the default (lenient) policy: every
/// callback may be absent.
pub fn subscribe<T, S, N, E, C>(
    source: Option<&S>,
    on_next: Option<N>,
    on_error: Option<E>,
    on_completed: Option<C>,
) -> Result<Disposable>
where
    S: Observable<T> + ?Sized,
    N: FnMut(T),
    E: FnMut(Error),
    C: FnMut(),
{
    subscribe_with_config(&RxConfig::default(), source, on_next, on_error, on_completed)
}

/// Subscribe with loose callbacks, enforcing `config.callback_policy`.
///
/// The source is validated first, then the callbacks in parameter order; the
/// subscriber is only built once every check has passed.
pub fn subscribe_with_config<T, S, N, E, C>(
    config: &RxConfig,
    source: Option<&S>,
    on_next: Option<N>,
    on_error: Option<E>,
    on_completed: Option<C>,
) -> Result<Disposable>
where
    S: Observable<T> + ?Sized,
    N: FnMut(T),
    E: FnMut(Error),
    C: FnMut(),
{
    let source = require(source, "source")?;
    check_callbacks(
        config.callback_policy,
        on_next.is_some(),
        on_error.is_some(),
        on_completed.is_some(),
    )?;

    let mut subscriber = Subscriber::from_callbacks(on_next, on_error, on_completed);
    Ok(source.subscribe(&mut subscriber))
}

fn check_callbacks(
    policy: CallbackPolicy,
    has_next: bool,
    has_error: bool,
    has_completed: bool,
) -> Result<()> {
    if policy.requires_on_next() && !has_next {
        return Err(Error::Argument("on_next"));
    }
    if policy.requires_terminal_callbacks() {
        if !has_error {
            return Err(Error::Argument("on_error"));
        }
        if !has_completed {
            return Err(Error::Argument("on_completed"));
        }
    }
    Ok(())
}
