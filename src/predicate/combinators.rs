//! Core predicate trait and logical combinators over [`Value`]

use crate::value::Value;

/// A boolean test over a normalized [`Value`].
///
/// Every predicate is total: invalid or nil inputs make it return `false`
/// rather than fault.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
/// use weir::ToValue;
///
/// let in_range = greater_than(0).and(less_than(10));
/// assert!(in_range.check(&5_u8.to_value()));
/// assert!(!in_range.check(&10.5_f64.to_value()));
/// ```
pub trait Predicate {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &Value) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> bool,
{
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self(value)
    }
}

/// Method chaining for combining predicates.
///
/// These compose *inside* a single fragment, so the combined predicate
/// raises one error key. Use `Context::or`/`Context::not` to compose
/// fragments that each carry their own message.
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must hold.
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        !self.0.check(value)
    }
}
