//! Error keys raised by the built-in checks
//!
//! A failing fragment renders the template registered under its key. When the
//! fragment was negated with `Context::not`, the key is prefixed with
//! [`NEGATION_PREFIX`] (`blank` becomes `not_blank`).

use std::borrow::Cow;

/// Prefix applied to the key of a negated fragment.
pub const NEGATION_PREFIX: &str = "not_";

/// Value between `{{min}}` and `{{max}}`.
pub const BETWEEN: &str = "between";
/// Blank string.
pub const BLANK: &str = "blank";
/// Empty string or container.
pub const EMPTY: &str = "empty";
/// Equal to `{{value}}`.
pub const EQUAL_TO: &str = "equal_to";
/// Boolean `false`.
pub const FALSE: &str = "false";
/// Greater than or equal to `{{value}}`.
pub const GREATER_OR_EQUAL_TO: &str = "greater_or_equal_to";
/// Greater than `{{value}}`.
pub const GREATER_THAN: &str = "greater_than";
/// One of `{{value}}`.
pub const IN_SLICE: &str = "in_slice";
/// Length equal to `{{length}}`.
pub const LENGTH: &str = "length";
/// Length between `{{min}}` and `{{max}}`.
pub const LENGTH_BETWEEN: &str = "length_between";
/// Less than or equal to `{{value}}`.
pub const LESS_OR_EQUAL_TO: &str = "less_or_equal_to";
/// Less than `{{value}}`.
pub const LESS_THAN: &str = "less_than";
/// Matching the pattern `{{regexp}}`.
pub const MATCHING_TO: &str = "matching_to";
/// Length at most `{{length}}`.
pub const MAX_LENGTH: &str = "max_length";
/// Length at least `{{length}}`.
pub const MIN_LENGTH: &str = "min_length";
/// Absent value.
pub const NIL: &str = "nil";
/// Caller-supplied predicate.
pub const PASSING: &str = "passing";
/// Boolean `true`.
pub const TRUE: &str = "true";
/// Zero value.
pub const ZERO: &str = "zero";

/// Every built-in key, without the negation prefix.
pub const ALL: &[&str] = &[
    BETWEEN,
    BLANK,
    EMPTY,
    EQUAL_TO,
    FALSE,
    GREATER_OR_EQUAL_TO,
    GREATER_THAN,
    IN_SLICE,
    LENGTH,
    LENGTH_BETWEEN,
    LESS_OR_EQUAL_TO,
    LESS_THAN,
    MATCHING_TO,
    MAX_LENGTH,
    MIN_LENGTH,
    NIL,
    PASSING,
    TRUE,
    ZERO,
];

/// The key a fragment renders under, given whether it was negated.
///
/// ```
/// assert_eq!(weir::keys::effective("blank", true), "not_blank");
/// assert_eq!(weir::keys::effective("blank", false), "blank");
/// ```
pub fn effective(key: &str, negated: bool) -> Cow<'_, str> {
    if negated {
        Cow::Owned(format!("{NEGATION_PREFIX}{key}"))
    } else {
        Cow::Borrowed(key)
    }
}
