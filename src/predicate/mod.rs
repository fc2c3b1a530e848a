//! Predicates evaluated by validation fragments
//!
//! A [`Predicate`] is a total boolean test over a normalized
//! [`Value`](crate::Value). Each check appended to a
//! [`Context`](crate::Context) wraps exactly one predicate; the
//! combinators here ([`PredicateExt::and`], [`PredicateExt::or`],
//! [`PredicateExt::not`]) build compound predicates that still raise a
//! single error key.
//!
//! # Example
//!
//! ```rust
//! use weir::predicate::*;
//! use weir::{Context, ToValue, Value};
//!
//! let even = |v: &Value| v.as_f64() % 2.0 == 0.0;
//! assert!(even.and(greater_than(0)).check(&4_u32.to_value()));
//!
//! let session = weir::is(Context::new(3).passing(even.or(equal_to(3))));
//! assert!(session.valid());
//! ```

mod collection;
mod combinators;
mod compare;
mod text;

// Re-export core trait
pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use compare::{
    between, equal_to, greater_or_equal_to, greater_than, is_false, is_true, less_or_equal_to,
    less_than, nil, zero, Between, EqualTo, GreaterOrEqualTo, GreaterThan, IsBool, LessOrEqualTo,
    LessThan, Nil, Zero,
};

pub use text::{
    blank, empty, length, length_between, matching_to, max_length, min_length, Blank, Empty,
    LengthBetween, MatchingTo,
};

pub use collection::{contains_element, in_slice, ContainsElement, InSlice};
