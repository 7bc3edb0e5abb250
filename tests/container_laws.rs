//! Property tests for the container contract and the monad laws.

use boxing::algebra;
use boxing::prelude::*;
use proptest::prelude::*;

fn half(x: i64) -> Boxed<i64> {
    Boxed::new(x / 2)
}

fn inc(x: i64) -> Boxed<i64> {
    Boxed::new(x.wrapping_add(1))
}

proptest! {
    #[test]
    fn test_value_of_return(v in any::<i64>()) {
        prop_assert_eq!(algebra::value(algebra::ret(v)), v);
        prop_assert_eq!(*Boxed::new(v).value(), v);
    }

    #[test]
    fn test_left_identity(v in any::<i64>()) {
        prop_assert_eq!(Boxed::new(v).bind(inc), inc(v));
    }

    #[test]
    fn test_right_identity(v in any::<i64>()) {
        prop_assert_eq!(Boxed::new(v).bind(Boxed::new), Boxed::new(v));
    }

    #[test]
    fn test_associativity(v in any::<i64>()) {
        let left = Boxed::new(v).bind(inc).bind(half);
        let right = Boxed::new(v).bind(|x| inc(x).bind(half));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn test_map_is_bind_then_return(v in any::<i64>()) {
        prop_assert_eq!(Boxed::new(v).map(|x| x / 3), Boxed::new(v / 3));
    }

    #[test]
    fn test_sequence_yields_value_once(v in any::<u16>()) {
        let seq = Boxed::new(v).to_sequence();
        prop_assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![v]);
        prop_assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![v]);
    }
}

#[test]
fn test_flat_map_example() {
    let result = Boxed::new(20).flat_map(|x| Boxed::new(x + 2), |x, y| x + y);
    assert_eq!(result, Boxed::new(42));
}

#[test]
fn test_apply_examples() {
    assert_eq!(Boxed::defer(|| 42).apply0(), Boxed::new(42));
    assert_eq!(Boxed::defer(|x: i32| x + 2).apply1(Boxed::new(40)), Boxed::new(42));
    assert_eq!(
        Boxed::defer(|x: i32, y: i32| x + y).apply2(Boxed::new(40), Boxed::new(2)),
        Boxed::new(42)
    );
}

#[test]
fn test_cursor_contract() {
    let seq = Boxed::new(42).to_sequence();
    let mut cursor = seq.iter();
    assert!(matches!(cursor.current(), Err(Error::InvalidState(_))));
    assert!(cursor.advance());
    assert_eq!(cursor.current().copied(), Ok(&42));
    assert!(!cursor.advance());
    assert!(!cursor.advance());
    assert!(matches!(cursor.current(), Err(Error::InvalidState(_))));
    cursor.reset();
    assert!(cursor.advance());
    assert_eq!(cursor.state(), CursorState::Value);
}
