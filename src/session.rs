//! Validation sessions
//!
//! A [`Session`] evaluates any number of [`Context`]s and keeps the rendered
//! failure messages grouped by field identifier. A context without an explicit
//! name is recorded as `value_<n>`, where `n` counts the contexts validated by
//! this session so far (starting at 0).
//!
//! # Examples
//!
//! ```
//! use weir::{Context, Session};
//!
//! let session = Session::new()
//!     .check(Context::new(17).named("age").greater_or_equal_to(18))
//!     .check(Context::new("ada@example.com").named("email").not().blank());
//!
//! assert!(!session.valid());
//! assert_eq!(
//!     session.error_by_key("age"),
//!     Some(&["Age must be greater than or equal to \"18\"".to_string()][..])
//! );
//! assert!(session.is_valid("email"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::context::{Context, Mode};
use crate::error::{FieldError, ValidationError};
use crate::locale::{self, LocaleRegistry};
use crate::template::{self, Params};
use crate::value::ToValue;

/// Per-session rendering configuration.
#[derive(Default, Clone)]
pub struct Options {
    /// Locale to render messages in. `None` uses the registry's active locale.
    pub locale: Option<String>,
    /// Templates by error key, consulted before any locale.
    pub messages: HashMap<String, String>,
    /// Registry to render with instead of the process-wide one.
    pub registry: Option<Arc<RwLock<LocaleRegistry>>>,
}

impl Options {
    /// Render in `locale`.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Use `template` for every failure raising `key`.
    pub fn with_message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(key.into(), template.into());
        self
    }

    /// Render with `registry` instead of the process-wide registry.
    pub fn with_registry(mut self, registry: Arc<RwLock<LocaleRegistry>>) -> Self {
        self.registry = Some(registry);
        self
    }

    fn render(&self, key: &str, params: &Params, fragment_template: Option<&str>) -> String {
        let override_template =
            fragment_template.or_else(|| self.messages.get(key).map(String::as_str));
        let locale = self.locale.as_deref();
        match &self.registry {
            Some(registry) => registry.read().render(key, params, override_template, locale),
            None => locale::render(key, params, override_template, locale),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("locale", &self.locale)
            .field("messages", &self.messages)
            .field("registry", &self.registry.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Failures collected across one or more validated contexts.
#[derive(Debug, Clone)]
pub struct Session {
    valid: bool,
    current_index: usize,
    errors: BTreeMap<String, FieldError>,
    options: Options,
}

impl Default for Session {
    fn default() -> Self {
        Session::with_options(Options::default())
    }
}

impl Session {
    /// An empty, valid session rendering through the process-wide registry.
    pub fn new() -> Self {
        Session::default()
    }

    /// An empty session with explicit rendering options.
    pub fn with_options(options: Options) -> Self {
        Session {
            valid: true,
            current_index: 0,
            errors: BTreeMap::new(),
            options,
        }
    }

    /// An empty session rendering in `locale`.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Session::with_options(Options::default().with_locale(locale))
    }

    /// Rendering options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validate `context` fail-fast and return the session.
    pub fn is(mut self, context: Context<'_>) -> Self {
        self.validate(context, Mode::FailFast);
        self
    }

    /// Validate `context` exhaustively and return the session.
    pub fn check(mut self, context: Context<'_>) -> Self {
        self.validate(context, Mode::Exhaustive);
        self
    }

    /// Evaluate `context` in `mode` and record its failures.
    ///
    /// Returns the context's outcome. The session stays invalid once any
    /// validated context failed.
    pub fn validate(&mut self, context: Context<'_>, mode: Mode) -> bool {
        let index = self.current_index;
        self.current_index += 1;

        let field = match context.name() {
            Some(name) => name.to_owned(),
            None => format!("value_{index}"),
        };
        let title = match context.title() {
            Some(title) => title.to_owned(),
            None => template::humanize(&field),
        };

        let evaluation = context.evaluate(mode);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = %field,
            ?mode,
            fragments = context.fragments().len(),
            valid = evaluation.is_valid(),
            "context evaluated"
        );

        if evaluation.is_valid() {
            return true;
        }
        self.valid = false;

        for &i in evaluation.failed() {
            let fragment = &context.fragments()[i];
            let key = fragment.error_key();
            let mut params = fragment.params().clone();
            params
                .entry("title".to_owned())
                .or_insert_with(|| title.to_value());
            params
                .entry("name".to_owned())
                .or_insert_with(|| field.to_value());

            let message = self.options.render(&key, &params, fragment.template());
            self.field_entry(&field, &title).push(message);
        }
        false
    }

    /// Record a literal message against `field` and invalidate the session.
    pub fn add_error_message(&mut self, field: &str, message: impl Into<String>) {
        self.valid = false;
        let title = template::humanize(field);
        self.field_entry(field, &title).push(message);
    }

    /// Fold `other` into this session.
    ///
    /// Messages are appended per field; the result is valid only if both were.
    pub fn merge(&mut self, other: Session) {
        self.absorb(other, |name| name.to_owned());
    }

    /// Fold `other` in, prefixing its field identifiers with `name.`.
    ///
    /// ```
    /// use weir::{Context, Session};
    ///
    /// let address = weir::check(Context::new("").named("street").not().blank());
    /// let mut session = Session::new();
    /// session.in_scope("address", address);
    ///
    /// assert!(!session.is_valid("address.street"));
    /// ```
    pub fn in_scope(&mut self, name: &str, other: Session) {
        self.absorb(other, |field| format!("{name}.{field}"));
    }

    /// Fold `other` in as element `index` of the list `name`.
    ///
    /// Field identifiers are prefixed with `name[index].`.
    pub fn in_row(&mut self, name: &str, index: usize, other: Session) {
        self.absorb(other, |field| format!("{name}[{index}].{field}"));
    }

    fn absorb(&mut self, other: Session, rename: impl Fn(&str) -> String) {
        self.valid &= other.valid;
        for (name, error) in other.errors {
            let name = rename(&name);
            match self.errors.get_mut(&name) {
                Some(existing) => {
                    for message in error.messages() {
                        existing.push(message.as_str());
                    }
                }
                None => {
                    self.errors.insert(name.clone(), error.renamed(name));
                }
            }
        }
    }

    fn field_entry(&mut self, field: &str, title: &str) -> &mut FieldError {
        self.errors
            .entry(field.to_owned())
            .or_insert_with(|| FieldError::new(field, title))
    }

    /// Whether every validated context passed.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Whether `field` has no recorded failure.
    pub fn is_valid(&self, field: &str) -> bool {
        self.errors.get(field).map_or(true, FieldError::is_empty)
    }

    /// Failures by field identifier.
    pub fn errors(&self) -> &BTreeMap<String, FieldError> {
        &self.errors
    }

    /// Messages recorded for `field`.
    pub fn error_by_key(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(FieldError::messages)
    }

    /// The failures as an error, if the session is invalid.
    pub fn error(&self) -> Option<ValidationError> {
        if self.valid {
            None
        } else {
            Some(ValidationError::new(self.errors.clone()))
        }
    }

    /// `Ok(())` when valid, otherwise the collected failures.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

/// Validate one context fail-fast in a fresh session.
///
/// ```
/// use weir::Context;
///
/// let session = weir::is(Context::new(1).equal_to(2).greater_than(0));
/// assert_eq!(session.error_by_key("value_0").map(<[_]>::len), Some(1));
/// ```
pub fn is(context: Context<'_>) -> Session {
    Session::new().is(context)
}

/// Validate one context exhaustively in a fresh session.
pub fn check(context: Context<'_>) -> Session {
    Session::new().check(context)
}

/// Validate every context fail-fast in one fresh session.
pub fn is_all<'a>(contexts: impl IntoIterator<Item = Context<'a>>) -> Session {
    contexts.into_iter().fold(Session::new(), Session::is)
}

/// Validate every context exhaustively in one fresh session.
pub fn check_all<'a>(contexts: impl IntoIterator<Item = Context<'a>>) -> Session {
    contexts.into_iter().fold(Session::new(), Session::check)
}
