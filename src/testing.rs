//! Testing utilities for code that validates with weir
//!
//! Assertion macros over [`Session`](crate::Session) results, plus a proptest
//! `Arbitrary` implementation for [`Value`](crate::Value) behind the
//! `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use weir::{assert_field_messages, assert_invalid, assert_valid, Context};
//!
//! assert_valid!(weir::is(Context::new(5).between(1, 10)));
//!
//! let session = weir::check(Context::new(0).named("qty").greater_than(0));
//! assert_invalid!(session);
//! assert_field_messages!(session, "qty", ["Qty must be greater than \"0\""]);
//! ```

/// Assert that a session recorded no failure.
///
/// Panics with the recorded errors otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($session:expr) => {{
        let session: &$crate::Session = &$session;
        if !session.valid() {
            panic!("Expected valid session, got errors: {:?}", session.errors());
        }
    }};
}

/// Assert that a session failed.
#[macro_export]
macro_rules! assert_invalid {
    ($session:expr) => {{
        let session: &$crate::Session = &$session;
        if session.valid() {
            panic!("Expected invalid session, got valid");
        }
    }};
}

/// Assert the exact messages recorded for one field, in order.
///
/// # Example
///
/// ```rust
/// use weir::{assert_field_messages, Context};
///
/// let session = weir::check(Context::new("").named("name").not().blank().min_length(2));
/// assert_field_messages!(
///     session,
///     "name",
///     ["Name can't be blank", "Name must not have a length shorter than \"2\""]
/// );
/// ```
#[macro_export]
macro_rules! assert_field_messages {
    ($session:expr, $field:expr, $expected:expr) => {{
        let session: &$crate::Session = &$session;
        match session.error_by_key($field) {
            Some(messages) => {
                let actual: Vec<&str> = messages.iter().map(String::as_str).collect();
                let expected: &[&str] = &$expected;
                assert_eq!(actual, expected, "messages for field {:?}", $field);
            }
            None => {
                panic!(
                    "Expected messages for field {:?}, got none (recorded: {:?})",
                    $field,
                    session.errors().keys().collect::<Vec<_>>()
                );
            }
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::value::{ToValue, Value};

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    /// Scalars of every kind, some behind `Option`, and short lists of them.
    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let scalar = prop_oneof![
            Just(Value::nil()),
            any::<bool>().prop_map(|v| v.to_value()),
            any::<i8>().prop_map(|v| v.to_value()),
            any::<i32>().prop_map(|v| v.to_value()),
            any::<i64>().prop_map(|v| v.to_value()),
            any::<u16>().prop_map(|v| v.to_value()),
            any::<u64>().prop_map(|v| v.to_value()),
            (-1.0e6_f64..1.0e6_f64).prop_map(|v| v.to_value()),
            "[a-z0-9 ]{0,8}".prop_map(|v| v.to_value()),
            any::<Option<i32>>().prop_map(|v| v.to_value()),
        ]
        .boxed();
        prop_oneof![
            4 => scalar.clone(),
            1 => prop::collection::vec(scalar, 0..4).prop_map(|v| v.to_value()),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Context, Session};

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Session::new());
        assert_valid!(crate::is(Context::new(1).equal_to(1)));
    }

    #[test]
    fn assert_invalid_macro() {
        let mut session = Session::new();
        session.add_error_message("x", "bad");
        assert_invalid!(session);
    }

    #[test]
    fn assert_field_messages_macro() {
        let mut session = Session::new();
        session.add_error_message("x", "first");
        session.add_error_message("x", "second");
        assert_field_messages!(session, "x", ["first", "second"]);
    }

    #[test]
    #[should_panic(expected = "Expected valid session, got errors")]
    fn assert_valid_panics_on_failure() {
        let mut session = Session::new();
        session.add_error_message("x", "bad");
        assert_valid!(session);
    }

    #[test]
    #[should_panic(expected = "Expected invalid session, got valid")]
    fn assert_invalid_panics_on_success() {
        assert_invalid!(Session::new());
    }

    #[test]
    #[should_panic(expected = "Expected messages for field")]
    fn assert_field_messages_panics_on_missing_field() {
        assert_field_messages!(Session::new(), "x", ["anything"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::predicate::{self, Predicate};
        use crate::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn comparisons_are_total(a in any::<Value>(), b in any::<Value>()) {
                let _ = a.equal_to(&b);
                let _ = a.greater_than(&b);
                let _ = a.less_or_equal_to(&b);
                let _ = a.as_f64();
                let _ = a.as_string();
            }

            #[test]
            fn nil_never_orders(v in any::<Value>()) {
                let nil = Value::nil();
                prop_assert!(!nil.greater_than(&v));
                prop_assert!(!v.less_than(&nil));
                prop_assert!(!predicate::greater_or_equal_to(Value::nil()).check(&v));
            }
        }
    }
}
