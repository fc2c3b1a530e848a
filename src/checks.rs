//! Fluent checks on [`Context`]
//!
//! Every method here appends exactly one fragment raising the matching key
//! from [`crate::keys`], with the template parameters the bundled messages
//! use (`value`, `min`, `max`, `length`, `regexp`).
//!
//! The text checks (`blank`, `matching_to` and the length family) are only
//! meaningful for strings. Calling one on a value that is neither a string
//! nor nil is a programming error and panics when the check is appended.

use regex::Regex;

use crate::context::Context;
use crate::keys;
use crate::predicate::{self, Predicate};
use crate::template::Params;
use crate::value::{Absolute, ToValue, Value};

fn params<const N: usize>(pairs: [(&str, Value); N]) -> Params {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}

impl<'a> Context<'a> {
    /// Equal to `expected`, coercing numbers of different widths.
    pub fn equal_to(self, expected: impl ToValue) -> Self {
        let expected = expected.to_value();
        let p = params([("value", expected.clone())]);
        self.append(predicate::EqualTo(expected), keys::EQUAL_TO, p)
    }

    /// Strictly greater than `threshold`.
    pub fn greater_than(self, threshold: impl ToValue) -> Self {
        let threshold = threshold.to_value();
        let p = params([("value", threshold.clone())]);
        self.append(predicate::GreaterThan(threshold), keys::GREATER_THAN, p)
    }

    /// Greater than or equal to `threshold`.
    pub fn greater_or_equal_to(self, threshold: impl ToValue) -> Self {
        let threshold = threshold.to_value();
        let p = params([("value", threshold.clone())]);
        self.append(
            predicate::GreaterOrEqualTo(threshold),
            keys::GREATER_OR_EQUAL_TO,
            p,
        )
    }

    /// Strictly less than `threshold`.
    pub fn less_than(self, threshold: impl ToValue) -> Self {
        let threshold = threshold.to_value();
        let p = params([("value", threshold.clone())]);
        self.append(predicate::LessThan(threshold), keys::LESS_THAN, p)
    }

    /// Less than or equal to `threshold`.
    pub fn less_or_equal_to(self, threshold: impl ToValue) -> Self {
        let threshold = threshold.to_value();
        let p = params([("value", threshold.clone())]);
        self.append(
            predicate::LessOrEqualTo(threshold),
            keys::LESS_OR_EQUAL_TO,
            p,
        )
    }

    /// Between `min` and `max`, both inclusive.
    pub fn between(self, min: impl ToValue, max: impl ToValue) -> Self {
        let (min, max) = (min.to_value(), max.to_value());
        let p = params([("min", min.clone()), ("max", max.clone())]);
        self.append(predicate::between(min, max), keys::BETWEEN, p)
    }

    /// Equal to one of `candidates`.
    pub fn in_slice<I, T>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToValue,
    {
        let check = predicate::in_slice(candidates);
        let listed = Value::from_absolute(Absolute::List(check.0.clone()));
        let p = params([("value", listed)]);
        self.append(check, keys::IN_SLICE, p)
    }

    /// Zero for its kind: `0`, `""` or `false`.
    pub fn zero(self) -> Self {
        self.append(predicate::zero(), keys::ZERO, Params::new())
    }

    /// Absent.
    pub fn nil(self) -> Self {
        self.append(predicate::nil(), keys::NIL, Params::new())
    }

    /// Boolean `true`.
    pub fn is_true(self) -> Self {
        self.append(predicate::is_true(), keys::TRUE, Params::new())
    }

    /// Boolean `false`.
    pub fn is_false(self) -> Self {
        self.append(predicate::is_false(), keys::FALSE, Params::new())
    }

    /// Empty string, list or map. Nil counts as empty.
    pub fn empty(self) -> Self {
        self.append(predicate::empty(), keys::EMPTY, Params::new())
    }

    /// Accepted by a caller-supplied predicate.
    ///
    /// ```
    /// use weir::{Context, Value};
    ///
    /// let even = |v: &Value| v.as_f64() % 2.0 == 0.0;
    /// assert!(weir::is(Context::new(4).passing(even)).valid());
    /// assert!(!weir::is(Context::new(5).passing(even)).valid());
    /// ```
    pub fn passing(self, check: impl Predicate + 'a) -> Self {
        self.append(check, keys::PASSING, Params::new())
    }

    /// Empty or whitespace only. String only.
    pub fn blank(self) -> Self {
        self.expect_text("blank");
        self.append(predicate::blank(), keys::BLANK, Params::new())
    }

    /// Matching `pattern`. String only.
    pub fn matching_to(self, pattern: &Regex) -> Self {
        self.expect_text("matching_to");
        let p = params([("regexp", pattern.as_str().to_value())]);
        self.append(predicate::matching_to(pattern), keys::MATCHING_TO, p)
    }

    /// Exactly `len` characters long. String only.
    pub fn length(self, len: usize) -> Self {
        self.expect_text("length");
        let p = params([("length", len.to_value())]);
        self.append(predicate::length(len), keys::LENGTH, p)
    }

    /// At least `len` characters long. String only.
    pub fn min_length(self, len: usize) -> Self {
        self.expect_text("min_length");
        let p = params([("length", len.to_value())]);
        self.append(predicate::min_length(len), keys::MIN_LENGTH, p)
    }

    /// At most `len` characters long. String only.
    pub fn max_length(self, len: usize) -> Self {
        self.expect_text("max_length");
        let p = params([("length", len.to_value())]);
        self.append(predicate::max_length(len), keys::MAX_LENGTH, p)
    }

    /// Between `min` and `max` characters long, both inclusive. String only.
    pub fn length_between(self, min: usize, max: usize) -> Self {
        self.expect_text("length_between");
        let p = params([("min", min.to_value()), ("max", max.to_value())]);
        self.append(predicate::length_between(min, max), keys::LENGTH_BETWEEN, p)
    }

    fn expect_text(&self, check: &str) {
        let value = self.value();
        if !value.is_string() && !value.is_nil() {
            panic!(
                "weir: `{check}` only applies to strings, got {:?}",
                value.absolute()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::context::{Context, Mode};
    use regex::Regex;

    fn valid(ctx: Context<'_>) -> bool {
        ctx.evaluate(Mode::Exhaustive).is_valid()
    }

    #[test]
    fn test_comparisons_coerce_numbers() {
        assert!(valid(Context::new(10_u8).equal_to(10.0)));
        assert!(valid(Context::new(10_i64).greater_than(9.5)));
        assert!(valid(Context::new(3_i16).less_or_equal_to(3_u64)));
        assert!(!valid(Context::new(10).equal_to("10")));
        assert!(valid(Context::new("b").greater_than("a")));
    }

    #[test]
    fn test_between_is_inclusive() {
        assert!(valid(Context::new(5).between(5, 10)));
        assert!(valid(Context::new(10).between(5, 10)));
        assert!(!valid(Context::new(11).between(5, 10)));

        let ctx = Context::new(1).between(2, 3);
        let params = ctx.fragments()[0].params();
        assert_eq!(params["min"].as_string(), "2");
        assert_eq!(params["max"].as_string(), "3");
    }

    #[test]
    fn test_in_slice_renders_candidates() {
        let ctx = Context::new("b").in_slice(["a", "b"]);
        assert!(valid(ctx));

        let ctx = Context::new(4).in_slice([1, 2, 3]);
        assert_eq!(ctx.fragments()[0].params()["value"].as_string(), "[1, 2, 3]");
        assert!(!valid(ctx));
    }

    #[test]
    fn test_kind_checks() {
        assert!(valid(Context::new(0.0).zero()));
        assert!(valid(Context::new("").zero()));
        assert!(valid(Context::new(None::<i32>).nil()));
        assert!(!valid(Context::new(Some(0)).nil()));
        assert!(valid(Context::new(true).is_true()));
        assert!(valid(Context::new(false).is_false()));
        assert!(valid(Context::new(Vec::<i32>::new()).empty()));
        assert!(!valid(Context::new(vec![1]).empty()));
    }

    #[test]
    fn test_text_checks_count_chars() {
        assert!(valid(Context::new("ñandú").length(5)));
        assert!(valid(Context::new("abc").min_length(3).max_length(3)));
        assert!(!valid(Context::new("abcd").max_length(3)));
        assert!(valid(Context::new("  ").blank()));
        assert!(valid(Context::new("x").not().blank()));
    }

    #[test]
    fn test_matching_to_records_pattern() {
        let re = Regex::new(r"^[a-z]+$").unwrap();
        let ctx = Context::new("abc").matching_to(&re);
        assert_eq!(ctx.fragments()[0].params()["regexp"].as_string(), "^[a-z]+$");
        assert!(valid(ctx));
        assert!(!valid(Context::new("ab1").matching_to(&re)));
    }

    #[test]
    fn test_text_checks_accept_nil() {
        assert!(valid(Context::new(None::<&str>).blank()));
        assert!(!valid(Context::new(None::<&str>).min_length(0)));
    }

    #[test]
    #[should_panic(expected = "only applies to strings")]
    fn test_blank_on_number_panics() {
        let _ = Context::new(1).blank();
    }

    #[test]
    #[should_panic(expected = "`length_between` only applies to strings")]
    fn test_length_on_list_panics() {
        let _ = Context::new(vec![1, 2]).length_between(1, 2);
    }
}
