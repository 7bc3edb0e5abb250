//! The single-value container.
//!
//! `Boxed<T>` is never empty: construction always supplies a value. Equality,
//! ordering and hashing are structural and delegate to `T`, so
//! `hash(Boxed::new(v)) == hash(v)` under the same hasher. The methods here are
//! total; argument-checked variants live in [`crate::algebra`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sequence::Sequence;

/// Immutable holder of exactly one value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Boxed<T>(T);

impl<T> Boxed<T> {
    /// `return`: wrap a value.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// Apply `function` to the wrapped value and return its container as is.
    pub fn bind<R, F>(self, function: F) -> Boxed<R>
    where
        F: FnOnce(T) -> Boxed<R>,
    {
        function(self.0)
    }

    pub fn map<R, F>(self, mapper: F) -> Boxed<R>
    where
        F: FnOnce(T) -> R,
    {
        self.bind(|x| Boxed::new(mapper(x)))
    }

    /// Bind through `mapper`, then combine the original and the produced value.
    pub fn flat_map<U, R, M, C>(self, mapper: M, resultor: C) -> Boxed<R>
    where
        M: FnOnce(&T) -> Boxed<U>,
        C: FnOnce(T, U) -> R,
    {
        self.bind(|a| {
            let b = mapper(&a);
            b.map(|b| resultor(a, b))
        })
    }

    /// Lift `arg`, run a container-to-container `mapper` over it and unwrap.
    pub fn run_map<R, F>(arg: T, mapper: F) -> R
    where
        F: FnOnce(Boxed<T>) -> Boxed<R>,
    {
        mapper(Boxed::new(arg)).into_inner()
    }

    /// Lift a function into a container for later [`apply0`](Self::apply0),
    /// [`apply1`](Self::apply1) or [`apply2`](Self::apply2).
    pub const fn defer(function: T) -> Self {
        Self(function)
    }

    pub fn apply0<R>(self) -> Boxed<R>
    where
        T: FnOnce() -> R,
    {
        self.bind(|f| Boxed::new(f()))
    }

    pub fn apply1<A, R>(self, arg: Boxed<A>) -> Boxed<R>
    where
        T: FnOnce(A) -> R,
    {
        self.bind(|f| Boxed::new(f(arg.into_inner())))
    }

    pub fn apply2<A, B, R>(self, a: Boxed<A>, b: Boxed<B>) -> Boxed<R>
    where
        T: FnOnce(A, B) -> R,
    {
        self.bind(|f| Boxed::new(f(a.into_inner(), b.into_inner())))
    }

    /// One-element, restartable sequence over a copy of the value.
    pub fn to_sequence(&self) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence::new(self.0.clone())
    }

    pub fn into_sequence(self) -> Sequence<T> {
        Sequence::new(self.0)
    }
}

impl<T> From<T> for Boxed<T> {
    fn from(value: T) -> Self {
        Boxed::new(value)
    }
}

impl<T> AsRef<T> for Boxed<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Boxed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_return_and_value() {
        assert_eq!(*Boxed::new(42).value(), 42);
        assert_eq!(Boxed::new(42).into_inner(), 42);
        assert_eq!(Boxed::from(42), Boxed::new(42));
    }

    #[test]
    fn test_hash_matches_value_hash() {
        assert_eq!(hash_of(&Boxed::new(42)), hash_of(&42));
        assert_eq!(hash_of(&Boxed::new("foo")), hash_of(&"foo"));
    }

    proptest! {
        #[test]
        fn test_hash_and_display_delegate(v in any::<i64>(), s in ".*") {
            prop_assert_eq!(hash_of(&Boxed::new(v)), hash_of(&v));
            prop_assert_eq!(Boxed::new(v).to_string(), v.to_string());
            prop_assert_eq!(hash_of(&Boxed::new(s.clone())), hash_of(&s));
            prop_assert_eq!(Boxed::new(s.clone()).to_string(), s);
        }

        #[test]
        fn test_equality_is_structural(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(Boxed::new(a) == Boxed::new(b), a == b);
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(Boxed::new(42), Boxed::new(42));
        assert_ne!(Boxed::new(4), Boxed::new(2));
    }

    #[test]
    fn test_absent_value_is_a_valid_value() {
        let boxed: Boxed<Option<i32>> = Boxed::new(None);
        assert_eq!(*boxed.value(), None);
        assert_eq!(boxed.map(|v| v.is_none()), Boxed::new(true));
    }

    #[test]
    fn test_string_representation() {
        assert_eq!(Boxed::new(42).to_string(), "42");
        assert_eq!(format!("{:>4}", Boxed::new(7)), "   7");
    }

    #[test]
    fn test_bind() {
        let result = Boxed::new(40).bind(|x| Boxed::new(x + 2));
        assert_eq!(result, Boxed::new(42));
    }

    #[test]
    fn test_map() {
        let result = Boxed::new(40).map(|x| x + 2);
        assert_eq!(result, Boxed::new(42));
    }

    #[test]
    fn test_flat_map() {
        let result = Boxed::new(20).flat_map(|x| Boxed::new(x + 2), |x, y| x + y);
        assert_eq!(result, Boxed::new(42));
    }

    #[test]
    fn test_flat_map_moves_non_copy_values() {
        let result = Boxed::new(String::from("foo"))
            .flat_map(|s| Boxed::new(s.len()), |s, n| format!("{s}:{n}"));
        assert_eq!(result.into_inner(), "foo:3");
    }

    #[test]
    fn test_run_map() {
        assert_eq!(Boxed::run_map(40, |b| b.map(|x| x + 2)), 42);
    }

    #[test]
    fn test_apply_arities() {
        assert_eq!(Boxed::defer(|| 42).apply0(), Boxed::new(42));
        assert_eq!(
            Boxed::defer(|x: i32| x + 2).apply1(Boxed::new(40)),
            Boxed::new(42)
        );
        assert_eq!(
            Boxed::defer(|x: i32, y: i32| x + y).apply2(Boxed::new(40), Boxed::new(2)),
            Boxed::new(42)
        );
    }

    #[test]
    fn test_serializes_transparently() {
        let json = serde_json::to_string(&Boxed::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: Boxed<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Boxed::new(42));
    }
}
