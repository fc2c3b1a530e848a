//! Property-based tests for value coercion

use proptest::prelude::*;
use weir::predicate::{self, Predicate};
use weir::{named_value, ToValue, Value};

#[derive(Debug, Clone, Copy)]
struct Meters(i32);
named_value!(Meters(i32));

proptest! {
    #[test]
    fn prop_integer_widths_compare_equal(v in any::<i16>()) {
        let narrow = v.to_value();
        prop_assert!(narrow.equal_to(&(v as i64).to_value()));
        prop_assert!(narrow.equal_to(&f64::from(v).to_value()));
        prop_assert!(narrow.equal_to(&Meters(i32::from(v)).to_value()));
    }

    #[test]
    fn prop_named_type_orders_like_repr(a in any::<i32>(), b in any::<i32>()) {
        let named = Meters(a).to_value();
        let literal = b.to_value();
        prop_assert_eq!(named.greater_than(&literal), a > b);
        prop_assert_eq!(named.less_or_equal_to(&literal), a <= b);
    }

    #[test]
    fn prop_number_never_equals_its_text(v in any::<i32>()) {
        prop_assert!(!v.to_value().equal_to(&v.to_string().to_value()));
    }

    #[test]
    fn prop_strings_order_lexicographically(a in "[a-z]{0,6}", b in "[a-z]{0,6}") {
        prop_assert_eq!(a.to_value().less_than(&b.to_value()), a < b);
    }

    #[test]
    fn prop_nil_is_unordered(v in any::<i64>()) {
        let nil = Value::nil();
        let value = v.to_value();
        prop_assert!(!nil.greater_than(&value));
        prop_assert!(!nil.less_than(&value));
        prop_assert!(!value.greater_or_equal_to(&nil));
        prop_assert!(!nil.less_or_equal_to(&nil));
        prop_assert!(!value.equal_to(&nil));
    }

    #[test]
    fn prop_indirection_is_transparent(v in any::<u32>()) {
        prop_assert!(Some(v).to_value().equal_to(&v.to_value()));
        prop_assert!(predicate::between(v, v).check(&Box::new(v).to_value()));
    }

    #[test]
    fn prop_numeric_strings_parse(v in -1.0e9f64..1.0e9) {
        prop_assert_eq!(v.to_string().to_value().as_f64(), v);
    }

    #[test]
    fn prop_garbage_strings_coerce_to_zero(s in "[a-z]{1,8}") {
        // "inf" and "nan" parse as floats
        prop_assume!(!["inf", "infinity", "nan"].contains(&s.as_str()));
        prop_assert_eq!(s.to_value().as_f64(), 0.0);
    }

    #[test]
    fn prop_char_length_not_bytes(s in "[äöüß]{0,10}") {
        let len = s.chars().count();
        prop_assert!(predicate::length(len).check(&s.to_value()));
        prop_assert_eq!(s.to_value().len(), Some(len));
    }
}
