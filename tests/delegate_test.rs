//! Tests for callable dispatch through `Delegate`.

use simple_delegation::Callable;
use simple_delegation::prelude::*;
use std::cell::{Cell, RefCell};

// =============================================================================
// Fixtures
// =============================================================================

fn scale(x: i64, factor: i64) -> i64 {
    x * factor
}

struct Scaler {
    calls: Cell<u32>,
}

impl Scaler {
    fn scale(&self, x: i64, factor: i64) -> i64 {
        self.calls.set(self.calls.get() + 1);
        x * factor
    }
}

#[derive(Clone)]
struct Offset {
    by: i64,
}

impl Offset {
    fn apply(&mut self, x: i64) -> i64 {
        x + self.by
    }
}

impl Callable<(i64,), i64> for Offset {
    fn call_with(&mut self, (x,): (i64,)) -> i64 {
        self.apply(x)
    }
}

// =============================================================================
// Substitutability
// =============================================================================

#[test]
fn test_variants_are_substitutable() {
    let scaler = Scaler {
        calls: Cell::new(0),
    };
    type Scale<'a> = Delegate<'a, (i64, i64), i64>;
    let mut handles = [
        Scale::function(scale),
        Scale::member(&scaler, Scaler::scale),
        Scale::object(|x: i64, factor: i64| x * factor),
    ];

    for (x, factor) in [(0, 5), (3, 4), (-7, 2), (i64::MAX / 2, 2)] {
        let results: Vec<i64> = handles.iter_mut().map(|h| h.invoke((x, factor))).collect();
        assert!(results.iter().all(|r| *r == scale(x, factor)));
    }
    assert_eq!(scaler.calls.get(), 4);
}

#[test]
fn test_generic_over_invoke() {
    fn twice<I: Invoke<(i64, i64), i64>>(target: &mut I) -> i64 {
        target.invoke((1, 2)) + target.invoke((3, 4))
    }

    let mut direct = Delegate::<(i64, i64), i64>::function(scale);
    assert_eq!(twice(&mut direct), 14);
}

// =============================================================================
// Side effects
// =============================================================================

#[test]
fn test_member_mut_side_effects() {
    let mut offset = Offset { by: 10 };
    {
        let mut apply = Delegate::<(i64,), i64>::member_mut(&mut offset, Offset::apply);
        assert_eq!(apply.invoke((5,)), 15);
    }
    offset.by = 20;
    let mut apply = Delegate::<(i64,), i64>::member_mut(&mut offset, Offset::apply);
    assert_eq!(apply.invoke((5,)), 25);
}

#[test]
fn test_stateful_object_keeps_state() {
    let mut total = 0;
    let mut accumulate = Delegate::<(i32,), i32>::object(move |x: i32| {
        total += x;
        total
    });
    assert_eq!(accumulate.invoke((1,)), 1);
    assert_eq!(accumulate.invoke((2,)), 3);
    assert_eq!(accumulate.invoke((3,)), 6);
}

#[test]
fn test_action_side_effect() {
    let log = RefCell::new(Vec::new());
    let mut action = Action::object(|| log.borrow_mut().push("fired"));
    action.invoke(());
    action.invoke(());
    drop(action);
    assert_eq!(*log.borrow(), ["fired", "fired"]);
}

// =============================================================================
// Copy isolation
// =============================================================================

#[test]
fn test_object_copy_isolation() {
    let mut original = Offset { by: 1 };
    let mut handle = Delegate::<(i64,), i64>::object(original.clone());

    original.by = 100;
    assert_eq!(handle.invoke((1,)), 2);
    assert_eq!(original.apply(1), 101);
}

#[test]
fn test_captured_copy_isolation() {
    let mut original = Offset { by: 1 };
    let mut stored = original.clone();
    let mut handle = Delegate::<(i64,), i64>::object(move |x: i64| stored.apply(x));

    original.by = 100;
    assert_eq!(handle.invoke((1,)), 2);
}

// =============================================================================
// Failure propagation
// =============================================================================

type Parsed = Result<u32, std::num::ParseIntError>;

fn parse(text: &'static str) -> Parsed {
    text.parse()
}

#[test]
fn test_error_passes_through() {
    let mut direct = Delegate::<(&'static str,), Parsed>::function(parse);
    assert_eq!(direct.invoke(("42",)), Ok(42));

    let expected = "x".parse::<u32>().unwrap_err();
    assert_eq!(direct.invoke(("x",)).unwrap_err(), expected);
}

#[test]
#[should_panic(expected = "target failed")]
fn test_panic_passes_through() {
    let mut failing = Action::object(|| panic!("target failed"));
    failing.invoke(());
}

// =============================================================================
// Arity
// =============================================================================

#[test]
fn test_zero_and_max_arity() {
    let mut zero = Getter::<u8>::function(|| 9);
    assert_eq!(zero.invoke(()), 9);

    fn sum8(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8) -> u32 {
        [a, b, c, d, e, f, g, h].iter().map(|v| *v as u32).sum()
    }
    let mut eight = Delegate::<(u8, u8, u8, u8, u8, u8, u8, u8), u32>::function(sum8);
    assert_eq!(eight.invoke((1, 2, 3, 4, 5, 6, 7, 8)), 36);
}

#[test]
fn test_setter_alias() {
    let seen = Cell::new(0);
    let mut set = Setter::<i32>::object(|v: i32| seen.set(v));
    set.invoke((5,));
    assert_eq!(seen.get(), 5);
}
