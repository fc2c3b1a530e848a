//! Collection predicates

use super::combinators::Predicate;
use crate::value::{ToValue, Value};

/// Predicate that checks a value equals one of a fixed set of candidates.
#[derive(Clone, Debug)]
pub struct InSlice(pub Vec<Value>);

impl Predicate for InSlice {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.iter().any(|candidate| value.equal_to(candidate))
    }
}

/// Create a predicate that checks membership using coercing equality.
///
/// # Example
///
/// ```rust
/// use weir::predicate::*;
/// use weir::ToValue;
///
/// let p = in_slice([1, 2, 3]);
/// assert!(p.check(&2.0_f64.to_value()));
/// assert!(!p.check(&4_u8.to_value()));
/// ```
pub fn in_slice<I, T>(candidates: I) -> InSlice
where
    I: IntoIterator<Item = T>,
    T: ToValue,
{
    InSlice(candidates.into_iter().map(|c| c.to_value()).collect())
}

/// Predicate that checks a list contains an element.
#[derive(Clone, Debug)]
pub struct ContainsElement(pub Value);

impl Predicate for ContainsElement {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match value.absolute() {
            crate::value::Absolute::List(items) => items.iter().any(|item| item.equal_to(&self.0)),
            _ => false,
        }
    }
}

/// Create a predicate that checks a list contains `element`.
pub fn contains_element(element: impl ToValue) -> ContainsElement {
    ContainsElement(element.to_value())
}
