//! Semigroup trait for combining validation results
//!
//! Sessions built independently (one per nested object, one per list row)
//! are folded together with [`Semigroup::combine`]. The operation must be
//! associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use weir::{Context, Semigroup};
//!
//! let name = weir::check(Context::new("").named("name").not().blank());
//! let age = weir::check(Context::new(12).named("age").greater_than(17));
//!
//! let all = name.combine(age);
//! assert!(!all.valid());
//! assert_eq!(all.errors().len(), 2);
//! ```

use crate::error::{FieldError, ValidationError};
use crate::session::Session;

/// A type that supports an associative binary operation
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for FieldError {
    /// Appends the messages of `other` that are not already present.
    fn combine(mut self, other: Self) -> Self {
        for message in other.messages() {
            self.push(message.as_str());
        }
        self
    }
}

impl Semigroup for Session {
    fn combine(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }
}

impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        let mut fields = self.into_fields();
        for (name, error) in other.into_fields() {
            let merged = match fields.remove(&name) {
                Some(existing) => existing.combine(error),
                None => error,
            };
            fields.insert(name, merged);
        }
        ValidationError::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Context;

    fn field(messages: &[&str]) -> FieldError {
        let mut err = FieldError::new("f", "F");
        for m in messages {
            err.push(*m);
        }
        err
    }

    #[test]
    fn test_field_error_combine_dedups() {
        let merged = field(&["a", "b"]).combine(field(&["b", "c"]));
        assert_eq!(merged.messages(), &["a", "b", "c"]);
    }

    #[test]
    fn test_field_error_associativity() {
        let (a, b, c) = (field(&["a"]), field(&["b", "a"]), field(&["c"]));
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_validation_error_combine_merges_fields() {
        let a = failed("x");
        let b = failed("y");
        let both = a.clone().combine(b).combine(a);
        assert_eq!(both.len(), 2);
        assert_eq!(both.field("x").map(|f| f.messages().len()), Some(1));
    }

    fn failed(field: &str) -> ValidationError {
        let mut session = Session::new();
        session.add_error_message(field, "invalid");
        session.error().unwrap()
    }

    #[test]
    fn test_session_combine_keeps_invalid() {
        let invalid = crate::check(Context::new(1).equal_to(2));
        let combined = Session::new().combine(invalid);
        assert!(!combined.valid());
        assert!(!combined.is_valid("value_0"));
    }
}
