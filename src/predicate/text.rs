//! Text predicates
//!
//! Lengths count characters, not bytes. A nil value counts as blank and
//! empty but fails every length and pattern check.

use regex::Regex;

use super::combinators::Predicate;
use crate::value::{Absolute, Value};

/// Predicate that checks a string is empty or whitespace only.
#[derive(Clone, Copy, Default, Debug)]
pub struct Blank;

impl Predicate for Blank {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match value.absolute() {
            Absolute::Nil => true,
            Absolute::Str(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// Create a predicate that checks a string is blank.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
/// use weir::ToValue;
///
/// assert!(blank().check(&" \t".to_value()));
/// assert!(!blank().check(&" x ".to_value()));
/// ```
pub fn blank() -> Blank {
    Blank
}

/// Predicate that checks a string, list or map has no elements.
#[derive(Clone, Copy, Default, Debug)]
pub struct Empty;

impl Predicate for Empty {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_nil() || value.is_empty()
    }
}

/// Create a predicate that checks for an empty string, list or map.
pub fn empty() -> Empty {
    Empty
}

/// Predicate that checks length is in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct LengthBetween {
    min: usize,
    max: usize,
}

impl Predicate for LengthBetween {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match value.len() {
            Some(len) => len >= self.min && len <= self.max,
            None => false,
        }
    }
}

/// Create a predicate that checks length is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
/// use weir::ToValue;
///
/// let p = length_between(2, 4);
/// assert!(p.check(&"héé".to_value()));
/// assert!(!p.check(&"h".to_value()));
/// ```
pub fn length_between(min: usize, max: usize) -> LengthBetween {
    LengthBetween { min, max }
}

/// Create a predicate that checks length is at least min.
pub fn min_length(min: usize) -> LengthBetween {
    LengthBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks length is at most max.
pub fn max_length(max: usize) -> LengthBetween {
    LengthBetween { min: 0, max }
}

/// Create a predicate that checks length is exactly len.
pub fn length(len: usize) -> LengthBetween {
    LengthBetween { min: len, max: len }
}

/// Predicate that checks a string matches a regular expression.
#[derive(Clone, Debug)]
pub struct MatchingTo(pub Regex);

impl Predicate for MatchingTo {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| self.0.is_match(s))
    }
}

/// Create a predicate that checks a string matches `pattern`.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use weir::predicate::*;
/// use weir::ToValue;
///
/// let digits = Regex::new(r"^\d+$").unwrap();
/// assert!(matching_to(&digits).check(&"123".to_value()));
/// assert!(!matching_to(&digits).check(&"12a".to_value()));
/// ```
pub fn matching_to(pattern: &Regex) -> MatchingTo {
    MatchingTo(pattern.clone())
}
