//! Value normalization and cross-type comparison
//!
//! Every check in a chain operates on a [`Value`]: a normalized, owned view of
//! whatever the caller handed in. Normalizing first lets a single set of
//! comparisons serve integers of every width, floats, strings, optional
//! ("pointer-like") values and caller-defined newtypes without per-type code.
//!
//! # Coercion rules
//!
//! - Numbers of any width (and newtypes over them) compare through `f64`.
//! - Strings order lexicographically.
//! - A nil value is never ordered: every ordering against nil is `false`.
//! - Equality first tries strict structural identity, then numeric coercion,
//!   then deep structural equality.
//!
//! # Example
//!
//! ```
//! use weir::{named_value, ToValue, Value};
//!
//! struct Age(i32);
//! named_value!(Age(i32));
//!
//! let age = Age(10).to_value();
//! assert!(age.equal_to(&10u8.to_value()));
//! assert!(age.equal_to(&10.0_f64.to_value()));
//! assert!(!age.equal_to(&"10".to_value()));
//! assert!(Value::nil().equal_to(&Value::nil()));
//! assert!(!Value::nil().greater_or_equal_to(&Value::nil()));
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

/// Primitive numeric representation a number-like value was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

/// Widened storage for a number-like value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Any signed integer width.
    Int(i64),
    /// Any unsigned integer width.
    Uint(u64),
    /// Any float width.
    Float(f64),
}

impl Number {
    /// Convert to `f64`. Integers beyond 2^53 lose precision.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Uint(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

/// The dereferenced content of a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Absolute {
    /// Absent value (`None`, a nil pointer).
    Nil,
    /// A boolean.
    Bool(bool),
    /// A single character.
    Char(char),
    /// A number of the given primitive kind.
    Number(NumberKind, Number),
    /// A string.
    Str(String),
    /// An ordered container.
    List(Vec<Value>),
    /// A keyed container.
    Map(BTreeMap<String, Value>),
    /// A value that can only be rendered as text.
    Opaque(String),
}

/// A normalized value under validation.
///
/// Conversions to `f64` and to text are computed lazily, at most once.
#[derive(Clone)]
pub struct Value {
    absolute: Absolute,
    type_name: Option<&'static str>,
    indirect: bool,
    float: OnceLock<f64>,
    text: OnceLock<String>,
}

impl Value {
    /// Wrap an already-normalized absolute value.
    pub fn from_absolute(absolute: Absolute) -> Self {
        Value {
            absolute,
            type_name: None,
            indirect: false,
            float: OnceLock::new(),
            text: OnceLock::new(),
        }
    }

    /// The nil value.
    pub fn nil() -> Self {
        Value::from_absolute(Absolute::Nil)
    }

    /// Mark `inner` as the representation of a caller-defined named type.
    ///
    /// A named number stays number-like, a named string stays string-like,
    /// but strict identity only holds between values of the same named type.
    pub fn named(type_name: &'static str, inner: Value) -> Self {
        Value {
            type_name: Some(type_name),
            ..inner
        }
    }

    /// A value that renders as `text` and is only equal to an identical opaque value.
    pub fn opaque(type_name: &'static str, text: impl Into<String>) -> Self {
        Value::named(type_name, Value::from_absolute(Absolute::Opaque(text.into())))
    }

    /// Record that this value was reached through one level of indirection.
    pub fn into_indirect(mut self) -> Self {
        self.indirect = true;
        self
    }

    pub(crate) fn number(kind: NumberKind, number: Number) -> Self {
        Value::from_absolute(Absolute::Number(kind, number))
    }

    /// The dereferenced content.
    pub fn absolute(&self) -> &Absolute {
        &self.absolute
    }

    /// Name of the caller-defined type, when built via [`Value::named`].
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    /// Whether the input was optional/boxed/shared rather than a plain value.
    pub fn is_indirect(&self) -> bool {
        self.indirect
    }

    /// Whether the absolute value is absent.
    pub fn is_nil(&self) -> bool {
        matches!(self.absolute, Absolute::Nil)
    }

    /// Whether the absolute value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self.absolute, Absolute::Str(_))
    }

    /// Whether the absolute value is number-like (any width, named or not).
    pub fn is_number(&self) -> bool {
        matches!(self.absolute, Absolute::Number(..))
    }

    /// Whether this is a caller-defined named type over a number.
    pub fn is_number_type(&self) -> bool {
        self.is_number() && self.is_named_type()
    }

    /// Whether this value was built from a caller-defined named type.
    pub fn is_named_type(&self) -> bool {
        self.type_name.is_some()
    }

    /// Whether the absolute value is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self.absolute, Absolute::Bool(_))
    }

    /// False for containers (lists and maps), true otherwise.
    pub fn is_comparable_type(&self) -> bool {
        !matches!(self.absolute, Absolute::List(_) | Absolute::Map(_))
    }

    /// The number kind, if number-like.
    pub fn number_kind(&self) -> Option<NumberKind> {
        match self.absolute {
            Absolute::Number(kind, _) => Some(kind),
            _ => None,
        }
    }

    /// Borrow the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.absolute {
            Absolute::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self.absolute {
            Absolute::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Canonical numeric form.
    ///
    /// Numbers convert directly. Strings are parsed and yield `0.0` when they
    /// are not numeric; this lossy fallback is intentional and stable.
    /// Everything else yields `0.0`.
    pub fn as_f64(&self) -> f64 {
        *self.float.get_or_init(|| match &self.absolute {
            Absolute::Number(_, n) => n.to_f64(),
            Absolute::Str(s) => s.parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        })
    }

    /// Canonical text form, used when embedding values into messages.
    pub fn as_string(&self) -> &str {
        self.text.get_or_init(|| render_text(&self.absolute))
    }

    /// Element count for strings (characters), lists and maps.
    pub fn len(&self) -> Option<usize> {
        match &self.absolute {
            Absolute::Str(s) => Some(s.chars().count()),
            Absolute::List(items) => Some(items.len()),
            Absolute::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Whether this is a string, list or map with no elements.
    ///
    /// Values without a length are never empty.
    pub fn is_empty(&self) -> bool {
        match &self.absolute {
            Absolute::Str(s) => s.is_empty(),
            Absolute::List(items) => items.is_empty(),
            Absolute::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// Strict identity: both comparable, same named type, same kind and content.
    pub fn identical(&self, other: &Value) -> bool {
        self.is_comparable_type() && other.is_comparable_type() && self == other
    }

    /// Equality with numeric coercion.
    pub fn equal_to(&self, other: &Value) -> bool {
        if self.identical(other) {
            return true;
        }
        if self.is_nil() || other.is_nil() {
            return false;
        }
        if self.is_number() && other.is_number() {
            return self.as_f64() == other.as_f64();
        }
        self == other
    }

    /// `self > other` under the coercion rules; `false` when unordered.
    pub fn greater_than(&self, other: &Value) -> bool {
        matches!(self.order(other), Some(Ordering::Greater))
    }

    /// `self >= other` under the coercion rules; `false` when unordered.
    pub fn greater_or_equal_to(&self, other: &Value) -> bool {
        matches!(self.order(other), Some(Ordering::Greater | Ordering::Equal))
    }

    /// `self < other` under the coercion rules; `false` when unordered.
    pub fn less_than(&self, other: &Value) -> bool {
        matches!(self.order(other), Some(Ordering::Less))
    }

    /// `self <= other` under the coercion rules; `false` when unordered.
    pub fn less_or_equal_to(&self, other: &Value) -> bool {
        matches!(self.order(other), Some(Ordering::Less | Ordering::Equal))
    }

    fn order(&self, other: &Value) -> Option<Ordering> {
        if self.is_nil() || other.is_nil() {
            return None;
        }
        if self.is_number() && other.is_number() {
            return self.as_f64().partial_cmp(&other.as_f64());
        }
        match (&self.absolute, &other.absolute) {
            (Absolute::Str(a), Absolute::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

fn render_text(absolute: &Absolute) -> String {
    match absolute {
        Absolute::Nil => "nil".to_string(),
        Absolute::Bool(b) => b.to_string(),
        Absolute::Char(c) => c.to_string(),
        // f32 renders from its own width so 0.1f32 prints as "0.1"
        Absolute::Number(NumberKind::F32, Number::Float(n)) => (*n as f32).to_string(),
        Absolute::Number(_, Number::Float(n)) => n.to_string(),
        Absolute::Number(_, Number::Int(n)) => n.to_string(),
        Absolute::Number(_, Number::Uint(n)) => n.to_string(),
        Absolute::Str(s) => s.clone(),
        Absolute::List(items) => {
            let parts: Vec<&str> = items.iter().map(Value::as_string).collect();
            format!("[{}]", parts.join(", "))
        }
        Absolute::Map(entries) => {
            let parts: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v.as_string()))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        Absolute::Opaque(text) => text.clone(),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.absolute == other.absolute
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("absolute", &self.absolute)
            .field("type_name", &self.type_name)
            .field("indirect", &self.indirect)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_string())
    }
}

/// Conversion into a normalized [`Value`].
///
/// Implemented for primitives, strings, containers and the common
/// indirections (`Option`, `Box`, `Rc`, `Arc`, references). Use
/// [`named_value!`](crate::named_value) for newtypes over a primitive.
pub trait ToValue {
    /// Normalize `self`.
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value_number {
    ($($ty:ty => $kind:ident as $variant:ident($wide:ty)),+ $(,)?) => {
        $(
            impl ToValue for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::number(NumberKind::$kind, Number::$variant(*self as $wide))
                }
            }
        )+
    };
}

impl_to_value_number!(
    i8 => I8 as Int(i64),
    i16 => I16 as Int(i64),
    i32 => I32 as Int(i64),
    i64 => I64 as Int(i64),
    isize => Isize as Int(i64),
    u8 => U8 as Uint(u64),
    u16 => U16 as Uint(u64),
    u32 => U32 as Uint(u64),
    u64 => U64 as Uint(u64),
    usize => Usize as Uint(u64),
    f32 => F32 as Float(f64),
    f64 => F64 as Float(f64),
);

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::from_absolute(Absolute::Bool(*self))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::from_absolute(Absolute::Char(*self))
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::from_absolute(Absolute::Str(self.to_owned()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        self.as_str().to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value().into_indirect(),
            None => Value::nil().into_indirect(),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value().into_indirect()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value().into_indirect()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value().into_indirect()
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::from_absolute(Absolute::List(self.iter().map(ToValue::to_value).collect()))
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<K: fmt::Display, V: ToValue, S: BuildHasher> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        let entries = self
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_value()))
            .collect();
        Value::from_absolute(Absolute::Map(entries))
    }
}

impl<K: fmt::Display, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        let entries = self
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_value()))
            .collect();
        Value::from_absolute(Absolute::Map(entries))
    }
}

/// Implement [`ToValue`] for tuple newtypes over a primitive.
///
/// The resulting values behave like their representation in comparisons and
/// remember the newtype's name for strict identity.
///
/// # Example
///
/// ```
/// use weir::{named_value, ToValue};
///
/// struct Celsius(f32);
/// struct Username(String);
/// named_value!(Celsius(f32), Username(String));
///
/// let temp = Celsius(21.5).to_value();
/// assert!(temp.is_number_type());
/// assert!(temp.greater_than(&21_i32.to_value()));
/// assert_eq!(Username("ada".into()).to_value().as_str(), Some("ada"));
/// ```
#[macro_export]
macro_rules! named_value {
    ($($name:ident($repr:ty)),+ $(,)?) => {
        $(
            impl $crate::ToValue for $name {
                fn to_value(&self) -> $crate::Value {
                    let repr: &$repr = &self.0;
                    $crate::Value::named(stringify!($name), $crate::ToValue::to_value(repr))
                }
            }
        )+
    };
}
