//! # Weir
//!
//! Fluent value validation: build a chain of checks against one value, run it
//! fail-fast or exhaustively, and get localized failure messages grouped by
//! field.
//!
//! ## Quick Example
//!
//! ```rust
//! use weir::{Context, Session};
//!
//! let session = Session::new()
//!     .check(Context::new("").named("username").not().blank())
//!     .check(Context::new(16).named("age").greater_or_equal_to(18))
//!     .check(Context::new("pro").named("plan").in_slice(["free", "pro"]));
//!
//! assert!(!session.valid());
//! assert_eq!(session.error_by_key("username").unwrap(), &["Username can't be blank"]);
//! assert_eq!(
//!     session.error_by_key("age").unwrap(),
//!     &["Age must be greater than or equal to \"18\""]
//! );
//! assert!(session.is_valid("plan"));
//! ```
//!
//! ## Chains
//!
//! Checks are joined left to right with AND. [`Context::or`] joins the next
//! check with OR and [`Context::not`] inverts it. There is no precedence:
//! `a.b.or().c` reads `(a AND b) OR c`.
//!
//! ```rust
//! use weir::Context;
//!
//! // 0 is allowed, otherwise at least 10
//! let session = weir::is(Context::new(5).zero().or().greater_or_equal_to(10));
//! assert!(!session.valid());
//! ```
//!
//! ## Values
//!
//! Anything implementing [`ToValue`] can be validated. Numbers compare across
//! widths (`10_u8` equals `10.0_f64`), `None` is nil, and newtypes opt in
//! with [`named_value!`].
//!
//! ## Messages
//!
//! Messages come from the locale registry ([`locale`]): a per-check
//! [`Context::message`] override wins, then [`Options::messages`], then the
//! requested or active locale, then English.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod checks;
pub mod context;
pub mod error;
pub mod keys;
pub mod locale;
pub mod predicate;
pub mod semigroup;
pub mod session;
pub mod template;
pub mod testing;
pub mod value;

// Re-exports
pub use context::{Context, Evaluation, Fragment, Mode};
pub use error::{FieldError, ValidationError};
pub use locale::{Locale, LocaleRegistry};
pub use predicate::{Predicate, PredicateExt};
pub use semigroup::Semigroup;
pub use session::{check, check_all, is, is_all, Options, Session};
pub use value::{ToValue, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{Context, Mode};
    pub use crate::error::{FieldError, ValidationError};
    pub use crate::locale::{Locale, LocaleRegistry};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::semigroup::Semigroup;
    pub use crate::session::{check, check_all, is, is_all, Options, Session};
    pub use crate::value::{ToValue, Value};
}
