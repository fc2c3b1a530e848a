//! Locales and the message registry
//!
//! A [`Locale`] maps error keys to message templates. A [`LocaleRegistry`]
//! holds named locales plus the name of the active one and resolves the
//! template for a failure:
//!
//! 1. the per-call override, if any;
//! 2. the requested (or active) locale's entry for the key;
//! 3. the default locale's (`en`) entry for the key;
//! 4. [`GENERIC_TEMPLATE`].
//!
//! Sessions render through the process-wide registry unless one is injected
//! through [`Options`](crate::Options). The global registry is guarded by a
//! read-write lock: rendering takes the read side, registration, activation
//! and reset take the write side.
//!
//! # Example
//!
//! ```
//! use weir::locale::LocaleRegistry;
//! use weir::template::Params;
//! use weir::ToValue;
//!
//! let mut registry = LocaleRegistry::new();
//! registry.register("pirate", [("equal_to", "{{title}} be {{value}}, arr")]);
//! registry.activate("pirate");
//!
//! let mut params = Params::new();
//! params.insert("title".into(), "Ship".to_value());
//! params.insert("value".into(), "afloat".to_value());
//!
//! assert_eq!(registry.render("equal_to", &params, None, None), "Ship be afloat, arr");
//! assert_eq!(registry.render("blank", &params, None, None), "Ship must be blank");
//! assert_eq!(registry.render("blank", &params, Some("{{title}}!"), None), "Ship!");
//! ```

mod de;
mod en;
mod es;
mod hu;

use std::collections::HashMap;
use std::sync::LazyLock;

use parking_lot::RwLock;

use crate::template::{self, Params};

/// Name of the base locale every lookup falls back to.
pub const DEFAULT_LOCALE: &str = en::CODE;

/// Template used when no locale knows the error key.
pub const GENERIC_TEMPLATE: &str = "{{title}} is not valid";

const BUNDLED: &[(&str, &[(&str, &str)])] = &[
    (en::CODE, en::MESSAGES),
    (es::CODE, es::MESSAGES),
    (de::CODE, de::MESSAGES),
    (hu::CODE, hu::MESSAGES),
];

/// A named table of message templates keyed by error key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    name: String,
    messages: HashMap<String, String>,
}

impl Locale {
    /// Create an empty locale.
    pub fn new(name: impl Into<String>) -> Self {
        Locale {
            name: name.into(),
            messages: HashMap::new(),
        }
    }

    /// Create a locale from `(key, template)` pairs.
    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut locale = Locale::new(name);
        locale.extend(pairs);
        locale
    }

    /// One of the bundled locales (`en`, `es`, `de`, `hu`).
    pub fn bundled(name: &str) -> Option<Self> {
        BUNDLED
            .iter()
            .find(|(code, _)| *code == name)
            .map(|(code, table)| Locale::from_pairs(*code, table.iter().copied()))
    }

    /// Add or replace one template.
    pub fn with_message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Add or replace one template in place.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    /// Add or replace many templates.
    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// The locale name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// All templates.
    pub fn messages(&self) -> &HashMap<String, String> {
        &self.messages
    }
}

/// Named locales plus the active selection.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: HashMap<String, Locale>,
    active: Option<String>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleRegistry {
    /// A registry holding the bundled locales, with the default one active.
    pub fn new() -> Self {
        let locales = BUNDLED
            .iter()
            .filter_map(|(code, _)| Locale::bundled(code))
            .map(|locale| (locale.name.clone(), locale))
            .collect();
        LocaleRegistry {
            locales,
            active: None,
        }
    }

    /// Register templates under `name`, merging into an existing locale.
    pub fn register<I, K, V>(&mut self, name: &str, messages: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.register_locale(Locale::from_pairs(name, messages));
    }

    /// Register a whole locale, merging into an existing one of the same name.
    pub fn register_locale(&mut self, locale: Locale) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            locale = %locale.name,
            templates = locale.messages.len(),
            "registering locale"
        );
        match self.locales.get_mut(&locale.name) {
            Some(existing) => existing.messages.extend(locale.messages),
            None => {
                self.locales.insert(locale.name.clone(), locale);
            }
        }
    }

    /// Make `name` the locale used when a render does not ask for one.
    ///
    /// Unknown names are accepted; lookups then fall back to the default locale.
    pub fn activate(&mut self, name: impl Into<String>) {
        let name = name.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(locale = %name, known = self.locales.contains_key(&name), "activating locale");
        self.active = Some(name);
    }

    /// Name of the active locale.
    pub fn active(&self) -> &str {
        self.active.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Whether a locale is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.locales.contains_key(name)
    }

    /// The locale registered under `name`.
    pub fn locale(&self, name: &str) -> Option<&Locale> {
        self.locales.get(name)
    }

    /// Restore the bundled locales and clear the active selection.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("resetting locale registry");
        *self = LocaleRegistry::new();
    }

    /// Resolve the template for `key` in `locale` (or the active locale),
    /// falling back to the default locale.
    pub fn template(&self, key: &str, locale: Option<&str>) -> Option<&str> {
        let requested = locale.unwrap_or_else(|| self.active());
        match self.locales.get(requested) {
            Some(found) => {
                if let Some(text) = found.get(key) {
                    return Some(text);
                }
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(locale = %requested, "unknown locale, using {}", DEFAULT_LOCALE);
            }
        }
        self.locales.get(DEFAULT_LOCALE).and_then(|l| l.get(key))
    }

    /// Render the message for `key`.
    ///
    /// `override_template` wins over every locale; an unknown key renders
    /// [`GENERIC_TEMPLATE`].
    pub fn render(
        &self,
        key: &str,
        params: &Params,
        override_template: Option<&str>,
        locale: Option<&str>,
    ) -> String {
        let text = override_template
            .or_else(|| self.template(key, locale))
            .unwrap_or(GENERIC_TEMPLATE);
        template::render(text, params)
    }
}

/// Process-wide registry used by sessions without an injected one.
static REGISTRY: LazyLock<RwLock<LocaleRegistry>> =
    LazyLock::new(|| RwLock::new(LocaleRegistry::new()));

/// Register templates under `name` in the process-wide registry.
///
/// Merges into an existing locale of the same name, so this also overrides
/// individual bundled messages.
pub fn register_locale<I, K, V>(name: &str, messages: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    REGISTRY.write().register(name, messages);
}

/// Make `name` the active locale of the process-wide registry.
pub fn set_active_locale(name: impl Into<String>) {
    REGISTRY.write().activate(name);
}

/// Name of the process-wide active locale.
pub fn active_locale() -> String {
    REGISTRY.read().active().to_owned()
}

/// Restore the process-wide registry to its initial state.
pub fn reset_messages() {
    REGISTRY.write().reset();
}

/// Render a message through the process-wide registry.
pub fn render(
    key: &str,
    params: &Params,
    override_template: Option<&str>,
    locale: Option<&str>,
) -> String {
    REGISTRY
        .read()
        .render(key, params, override_template, locale)
}

/// Run `f` with shared access to the process-wide registry.
pub fn with_registry<R>(f: impl FnOnce(&LocaleRegistry) -> R) -> R {
    f(&REGISTRY.read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use crate::ToValue;

    fn titled(title: &str) -> Params {
        let mut params = Params::new();
        params.insert("title".into(), title.to_value());
        params
    }

    #[test]
    fn test_bundled_locales_cover_every_key() {
        for (code, _) in BUNDLED {
            let locale = Locale::bundled(code).unwrap();
            for key in keys::ALL {
                assert!(locale.get(key).is_some(), "{code} lacks {key}");
                let negated = keys::effective(key, true);
                assert!(locale.get(&negated).is_some(), "{code} lacks {negated}");
            }
        }
    }

    #[test]
    fn test_render_default_locale() {
        let registry = LocaleRegistry::new();
        let mut params = titled("Age");
        params.insert("value".into(), 10_i32.to_value());
        assert_eq!(
            registry.render(keys::EQUAL_TO, &params, None, None),
            "Age must be equal to \"10\""
        );
    }

    #[test]
    fn test_render_named_locale() {
        let registry = LocaleRegistry::new();
        assert_eq!(
            registry.render(keys::BLANK, &titled("Name"), None, Some("es")),
            "Name debe estar en blanco"
        );
        assert_eq!(
            registry.render("not_blank", &titled("Name"), None, Some("de")),
            "Name darf nicht leer sein"
        );
    }

    #[test]
    fn test_override_wins() {
        let registry = LocaleRegistry::new();
        assert_eq!(
            registry.render(keys::BLANK, &titled("X"), Some("custom {{title}}"), Some("hu")),
            "custom X"
        );
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        let registry = LocaleRegistry::new();
        assert_eq!(
            registry.render(keys::ZERO, &titled("Count"), None, Some("xx")),
            "Count must be zero"
        );
    }

    #[test]
    fn test_partial_locale_falls_back_per_key() {
        let mut registry = LocaleRegistry::new();
        registry.register("fr", [(keys::ZERO, "{{title}} doit être zéro")]);
        registry.activate("fr");
        assert_eq!(
            registry.render(keys::ZERO, &titled("N"), None, None),
            "N doit être zéro"
        );
        assert_eq!(
            registry.render(keys::NIL, &titled("N"), None, None),
            "N must be nil"
        );
    }

    #[test]
    fn test_unknown_key_uses_generic_template() {
        let registry = LocaleRegistry::new();
        assert_eq!(
            registry.render("no_such_key", &titled("Field"), None, None),
            "Field is not valid"
        );
    }

    #[test]
    fn test_register_merges_into_existing_locale() {
        let mut registry = LocaleRegistry::new();
        registry.register(DEFAULT_LOCALE, [(keys::BLANK, "{{title}} needs to be blank")]);
        assert_eq!(
            registry.render(keys::BLANK, &titled("A"), None, None),
            "A needs to be blank"
        );
        assert_eq!(
            registry.render(keys::ZERO, &titled("A"), None, None),
            "A must be zero"
        );
    }

    #[test]
    fn test_reset_restores_bundled_state() {
        let mut registry = LocaleRegistry::new();
        registry.register(DEFAULT_LOCALE, [(keys::BLANK, "changed")]);
        registry.register("xx", [(keys::BLANK, "xx")]);
        registry.activate("xx");
        registry.reset();
        assert_eq!(registry.active(), DEFAULT_LOCALE);
        assert!(!registry.contains("xx"));
        assert_eq!(
            registry.render(keys::BLANK, &titled("A"), None, None),
            "A must be blank"
        );
    }

    #[test]
    fn test_locale_builder() {
        let locale = Locale::new("it")
            .with_message(keys::TRUE, "{{title}} deve essere vero")
            .with_message(keys::FALSE, "{{title}} deve essere falso");
        assert_eq!(locale.name(), "it");
        assert_eq!(locale.messages().len(), 2);
        assert_eq!(locale.get(keys::TRUE), Some("{{title}} deve essere vero"));
        assert!(Locale::bundled("it").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_locale_deserializes_from_json() {
        let json = r#"{"name": "pt", "messages": {"zero": "{{title}} deve ser zero"}}"#;
        let locale: Locale = serde_json::from_str(json).unwrap();
        let mut registry = LocaleRegistry::new();
        registry.register_locale(locale);
        assert_eq!(
            registry.render(keys::ZERO, &titled("X"), None, Some("pt")),
            "X deve ser zero"
        );
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_unknown_locale_is_logged() {
            let registry = LocaleRegistry::new();
            let _ = registry.render(keys::ZERO, &titled("X"), None, Some("zz"));
            assert!(logs_contain("unknown locale"));
        }
    }
}
