//! Collected validation failures
//!
//! A [`Session`](crate::Session) groups rendered messages per field in
//! [`FieldError`]s. When a caller wants a `Result`, the failing session turns
//! into a [`ValidationError`], which implements [`std::error::Error`].
//!
//! # Examples
//!
//! ```
//! use weir::Context;
//!
//! let err = weir::check(Context::new("").named("email").not().blank())
//!     .into_result()
//!     .unwrap_err();
//!
//! assert_eq!(err.len(), 1);
//! assert_eq!(err.to_string(), "email: Email can't be blank");
//! ```

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

/// Every message recorded against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError {
    name: String,
    title: String,
    messages: Vec<String>,
}

impl FieldError {
    /// Create an empty error for `name`, shown to users as `title`.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        FieldError {
            name: name.into(),
            title: title.into(),
            messages: Vec::new(),
        }
    }

    /// Record `message` unless an identical one is already present.
    ///
    /// Returns whether the message was added.
    pub fn push(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if self.messages.contains(&message) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Field identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human title used in messages.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether no message has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub(crate) fn renamed(mut self, name: String) -> Self {
        self.name = name;
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.messages.join("; "))
    }
}

/// The failures of an invalid session, keyed by field identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ValidationError {
    fields: BTreeMap<String, FieldError>,
}

impl ValidationError {
    pub(crate) fn new(fields: BTreeMap<String, FieldError>) -> Self {
        ValidationError { fields }
    }

    /// Failures for one field.
    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.fields.get(name)
    }

    /// Every failing field in identifier order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldError> {
        self.fields.values()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field failed.
    ///
    /// Only possible when the session was invalidated without a message.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume and return the per-field map.
    pub fn into_fields(self) -> BTreeMap<String, FieldError> {
        self.fields
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return write!(f, "validation failed");
        }
        for (i, field) in self.fields.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl StdError for ValidationError {}
