//! Validation chains and their evaluation
//!
//! A [`Context`] holds one normalized value and an ordered list of
//! [`Fragment`]s, one per check appended through the fluent API. Fragments
//! are joined left to right with AND, or with OR when [`Context::or`] was
//! called just before appending; [`Context::not`] inverts the next fragment.
//! There is no operator precedence: `a.b.or().c.d` means `((a AND b) OR c) AND d`.
//!
//! # Examples
//!
//! ```
//! use weir::{Context, Mode};
//!
//! let ctx = Context::new(1).equal_to(2).greater_than(0);
//!
//! let fail_fast = ctx.evaluate(Mode::FailFast);
//! assert!(!fail_fast.is_valid());
//! assert_eq!(fail_fast.failed(), &[0]);
//!
//! let recovered = Context::new(3).equal_to(2).or().equal_to(3).evaluate(Mode::FailFast);
//! assert!(recovered.is_valid());
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::keys;
use crate::predicate::Predicate;
use crate::template::Params;
use crate::value::{ToValue, Value};

/// How a chain is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Skip AND-joined fragments once the running result is false.
    #[default]
    FailFast,
    /// Invoke every fragment so every failure can be reported.
    Exhaustive,
}

/// One atomic check in a chain: a predicate plus what to report when it fails.
pub struct Fragment<'a> {
    key: Cow<'static, str>,
    template: Option<String>,
    params: Params,
    predicate: Box<dyn Predicate + 'a>,
    negated: bool,
    joined_by_or: bool,
}

impl Fragment<'_> {
    /// The error key, without negation.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The key used to look up the message, `not_`-prefixed when negated.
    pub fn error_key(&self) -> Cow<'_, str> {
        keys::effective(&self.key, self.negated)
    }

    /// Per-call template override.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Template parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Whether [`Context::not`] preceded this fragment.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether this fragment joins the previous one with OR.
    pub fn is_joined_by_or(&self) -> bool {
        self.joined_by_or
    }

    /// The raw predicate result, before negation.
    pub fn check(&self, value: &Value) -> bool {
        self.predicate.check(value)
    }

    /// The predicate result after negation.
    pub fn passes(&self, value: &Value) -> bool {
        self.check(value) != self.negated
    }
}

impl fmt::Debug for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("key", &self.key)
            .field("template", &self.template)
            .field("params", &self.params)
            .field("negated", &self.negated)
            .field("joined_by_or", &self.joined_by_or)
            .finish_non_exhaustive()
    }
}

/// Result of evaluating a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    valid: bool,
    failed: Vec<usize>,
    invoked: usize,
}

impl Evaluation {
    /// The accumulated boolean result of the chain.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Indices of fragments that were invoked and failed, in chain order.
    pub fn failed(&self) -> &[usize] {
        &self.failed
    }

    /// Number of fragments whose predicate was invoked.
    pub fn invoked(&self) -> usize {
        self.invoked
    }
}

/// A value under validation plus its chain of checks.
pub struct Context<'a> {
    value: Value,
    name: Option<String>,
    title: Option<String>,
    fragments: Vec<Fragment<'a>>,
    pending_not: bool,
    pending_or: bool,
}

impl<'a> Context<'a> {
    /// Start a chain over `value`.
    pub fn new(value: impl ToValue) -> Self {
        Context::from_value(value.to_value())
    }

    /// Start a chain over an already-normalized value.
    pub fn from_value(value: Value) -> Self {
        Context {
            value,
            name: None,
            title: None,
            fragments: Vec::new(),
            pending_not: false,
            pending_or: false,
        }
    }

    /// Set the field identifier failures are recorded under.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the human title used as `{{title}}` in messages.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The explicit field identifier, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The explicit title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The value under validation.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The fragments appended so far.
    pub fn fragments(&self) -> &[Fragment<'a>] {
        &self.fragments
    }

    /// Invert the next appended fragment.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.pending_not = true;
        self
    }

    /// Join the next appended fragment with OR instead of AND.
    pub fn or(mut self) -> Self {
        self.pending_or = true;
        self
    }

    /// Append a fragment. Consumes the pending `not`/`or` flags.
    pub fn append(
        mut self,
        predicate: impl Predicate + 'a,
        key: impl Into<Cow<'static, str>>,
        params: Params,
    ) -> Self {
        self.fragments.push(Fragment {
            key: key.into(),
            template: None,
            params,
            predicate: Box::new(predicate),
            negated: std::mem::take(&mut self.pending_not),
            joined_by_or: std::mem::take(&mut self.pending_or),
        });
        self
    }

    /// Append a zero-argument check raising `key`.
    pub fn add(self, predicate: impl Fn() -> bool + 'a, key: impl Into<Cow<'static, str>>) -> Self {
        self.append(move |_: &Value| predicate(), key, Params::new())
    }

    /// Append a zero-argument check whose message can use `{{value}}`.
    pub fn add_with_value(
        self,
        predicate: impl Fn() -> bool + 'a,
        key: impl Into<Cow<'static, str>>,
        value: impl ToValue,
    ) -> Self {
        let mut params = Params::new();
        params.insert("value".to_owned(), value.to_value());
        self.append(move |_: &Value| predicate(), key, params)
    }

    /// Append a zero-argument check with arbitrary template parameters.
    pub fn add_with_params(
        self,
        predicate: impl Fn() -> bool + 'a,
        key: impl Into<Cow<'static, str>>,
        params: Params,
    ) -> Self {
        self.append(move |_: &Value| predicate(), key, params)
    }

    /// Override the message template of the most recently appended fragment.
    ///
    /// Has no effect on an empty chain.
    pub fn message(mut self, template: impl Into<String>) -> Self {
        if let Some(last) = self.fragments.last_mut() {
            last.template = Some(template.into());
        }
        self
    }

    /// Evaluate the chain strictly left to right.
    ///
    /// The running result starts `true` and every fragment folds into it with
    /// AND, or OR when joined by [`Context::or`], so a leading `or()` makes the
    /// chain valid. In [`Mode::FailFast`] an AND-joined fragment is skipped
    /// (its predicate is not invoked) while the running result is false.
    /// OR-joined fragments are always invoked, so a later OR can still
    /// recover. An empty chain is valid.
    pub fn evaluate(&self, mode: Mode) -> Evaluation {
        let mut valid = true;
        let mut failed = Vec::new();
        let mut invoked = 0;

        for (index, fragment) in self.fragments.iter().enumerate() {
            if mode == Mode::FailFast && !valid && !fragment.joined_by_or {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, key = %fragment.key, "fragment skipped");
                continue;
            }

            let passed = fragment.passes(&self.value);
            invoked += 1;
            #[cfg(feature = "tracing")]
            tracing::trace!(index, key = %fragment.key, passed, "fragment evaluated");

            if !passed {
                failed.push(index);
            }
            valid = if fragment.joined_by_or {
                valid || passed
            } else {
                valid && passed
            };
        }

        Evaluation {
            valid,
            failed,
            invoked,
        }
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("value", &self.value)
            .field("name", &self.name)
            .field("title", &self.title)
            .field("fragments", &self.fragments)
            .finish_non_exhaustive()
    }
}
