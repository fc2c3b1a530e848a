//! Comparison predicates
//!
//! Every comparison coerces through [`Value`]'s rules, so `greater_than(0)`
//! works the same against an `u8`, an `f32` or a newtype over `i64`.

use super::combinators::{And, Predicate, PredicateExt};
use crate::value::{Absolute, ToValue, Value};

/// Predicate for coercing equality.
#[derive(Clone, Debug)]
pub struct EqualTo(pub Value);

impl Predicate for EqualTo {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.equal_to(&self.0)
    }
}

/// Create a predicate that checks for equality.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
/// use weir::ToValue;
///
/// assert!(equal_to(5).check(&5.0_f32.to_value()));
/// assert!(!equal_to(5).check(&"5".to_value()));
/// ```
pub fn equal_to(expected: impl ToValue) -> EqualTo {
    EqualTo(expected.to_value())
}

/// Predicate for greater than.
#[derive(Clone, Debug)]
pub struct GreaterThan(pub Value);

impl Predicate for GreaterThan {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.greater_than(&self.0)
    }
}

/// Create a predicate that checks if value is greater than threshold.
pub fn greater_than(threshold: impl ToValue) -> GreaterThan {
    GreaterThan(threshold.to_value())
}

/// Predicate for greater than or equal.
#[derive(Clone, Debug)]
pub struct GreaterOrEqualTo(pub Value);

impl Predicate for GreaterOrEqualTo {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.greater_or_equal_to(&self.0)
    }
}

/// Create a predicate that checks if value is greater than or equal to threshold.
pub fn greater_or_equal_to(threshold: impl ToValue) -> GreaterOrEqualTo {
    GreaterOrEqualTo(threshold.to_value())
}

/// Predicate for less than.
#[derive(Clone, Debug)]
pub struct LessThan(pub Value);

impl Predicate for LessThan {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.less_than(&self.0)
    }
}

/// Create a predicate that checks if value is less than threshold.
pub fn less_than(threshold: impl ToValue) -> LessThan {
    LessThan(threshold.to_value())
}

/// Predicate for less than or equal.
#[derive(Clone, Debug)]
pub struct LessOrEqualTo(pub Value);

impl Predicate for LessOrEqualTo {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.less_or_equal_to(&self.0)
    }
}

/// Create a predicate that checks if value is less than or equal to threshold.
pub fn less_or_equal_to(threshold: impl ToValue) -> LessOrEqualTo {
    LessOrEqualTo(threshold.to_value())
}

/// Inclusive range check, built from the two bound predicates.
pub type Between = And<GreaterOrEqualTo, LessOrEqualTo>;

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
/// use weir::ToValue;
///
/// let p = between(1, 10);
/// assert!(p.check(&1_u8.to_value()));
/// assert!(p.check(&9.5_f64.to_value()));
/// assert!(!p.check(&11_i64.to_value()));
/// ```
pub fn between(min: impl ToValue, max: impl ToValue) -> Between {
    greater_or_equal_to(min).and(less_or_equal_to(max))
}

/// Predicate for the zero value of its kind: `0`, `""` or `false`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Zero;

impl Predicate for Zero {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match value.absolute() {
            Absolute::Number(_, n) => n.to_f64() == 0.0,
            Absolute::Str(s) => s.is_empty(),
            Absolute::Bool(b) => !b,
            _ => false,
        }
    }
}

/// Create a predicate that checks for the zero value of the underlying kind.
pub fn zero() -> Zero {
    Zero
}

/// Predicate for an absent value.
#[derive(Clone, Copy, Default, Debug)]
pub struct Nil;

impl Predicate for Nil {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_nil()
    }
}

/// Create a predicate that checks for an absent value.
pub fn nil() -> Nil {
    Nil
}

/// Predicate for a specific boolean.
#[derive(Clone, Copy, Debug)]
pub struct IsBool(pub bool);

impl Predicate for IsBool {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_bool() == Some(self.0)
    }
}

/// Create a predicate that checks the value is the boolean `true`.
pub fn is_true() -> IsBool {
    IsBool(true)
}

/// Create a predicate that checks the value is the boolean `false`.
pub fn is_false() -> IsBool {
    IsBool(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_to() {
        assert!(equal_to(5).check(&5_i64.to_value()));
        assert!(!equal_to(5).check(&4_i64.to_value()));
        assert!(equal_to("a").check(&String::from("a").to_value()));
    }

    #[test]
    fn test_ordering() {
        assert!(greater_than(5).check(&6_u8.to_value()));
        assert!(!greater_than(5).check(&5_u8.to_value()));
        assert!(greater_or_equal_to(5).check(&5.0_f64.to_value()));
        assert!(less_than(5).check(&4.9_f32.to_value()));
        assert!(less_or_equal_to(5).check(&5_usize.to_value()));
        assert!(!less_or_equal_to(5).check(&Value::nil()));
    }

    #[test]
    fn test_between_strings() {
        let p = between("b", "d");
        assert!(p.check(&"c".to_value()));
        assert!(!p.check(&"a".to_value()));
        assert!(!p.check(&1_i32.to_value()));
    }

    #[test]
    fn test_zero() {
        assert!(zero().check(&0_u16.to_value()));
        assert!(zero().check(&0.0_f64.to_value()));
        assert!(zero().check(&"".to_value()));
        assert!(zero().check(&false.to_value()));
        assert!(!zero().check(&Value::nil()));
        assert!(!zero().check(&1_i32.to_value()));
    }

    #[test]
    fn test_nil_and_booleans() {
        assert!(nil().check(&None::<i32>.to_value()));
        assert!(!nil().check(&Some(0_i32).to_value()));
        assert!(is_true().check(&true.to_value()));
        assert!(!is_true().check(&1_i32.to_value()));
        assert!(is_false().check(&Some(false).to_value()));
    }
}
