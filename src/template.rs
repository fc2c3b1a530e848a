//! Message templates
//!
//! Templates are plain strings with `{{name}}` markers. Rendering replaces
//! each marker with the text form of the matching parameter and leaves
//! unknown markers untouched, so a typo in a template shows up in the output
//! instead of failing the render.
//!
//! ```
//! use weir::template::{render, Params};
//! use weir::ToValue;
//!
//! let mut params = Params::new();
//! params.insert("title".into(), "Age".to_value());
//! params.insert("value".into(), 10_i32.to_value());
//!
//! assert_eq!(render("{{title}} must equal {{value}}", &params), "Age must equal 10");
//! assert_eq!(render("{{title}} {{ missing }}", &params), "Age {{ missing }}");
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::value::Value;

/// Named template parameters.
pub type Params = BTreeMap<String, Value>;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Substitute every `{{name}}` marker present in `params`.
pub fn render(template: &str, params: &Params) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.as_string().to_owned(),
            None => caps[0].to_owned(),
        })
        .into_owned()
}

/// Turn a field identifier into a human title.
///
/// Splits on `_`, `-`, `.`, whitespace and lower-to-upper case changes, then
/// capitalizes each word.
///
/// ```
/// use weir::template::humanize;
///
/// assert_eq!(humanize("first_name"), "First Name");
/// assert_eq!(humanize("zip-code"), "Zip Code");
/// assert_eq!(humanize("userId"), "User Id");
/// assert_eq!(humanize("value_0"), "Value 0");
/// ```
pub fn humanize(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut after_lower = false;

    for c in name.chars() {
        if matches!(c, '_' | '-' | '.') || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            after_lower = false;
            continue;
        }
        if c.is_uppercase() && after_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        after_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToValue;

    fn params(pairs: &[(&str, Value)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_render_substitutes_all_occurrences() {
        let p = params(&[("min", 1_i32.to_value()), ("max", 9.5_f64.to_value())]);
        assert_eq!(
            render("{{min}}..{{max}} ({{min}})", &p),
            "1..9.5 (1)"
        );
    }

    #[test]
    fn test_render_tolerates_inner_whitespace() {
        let p = params(&[("title", "Name".to_value())]);
        assert_eq!(render("{{ title }} is required", &p), "Name is required");
    }

    #[test]
    fn test_render_leaves_unknown_markers() {
        let p = Params::new();
        assert_eq!(render("{{title}} is not valid", &p), "{{title}} is not valid");
    }

    #[test]
    fn test_render_punctuated_names() {
        let p = params(&[
            ("field-name", "Email".to_value()),
            ("a.b", 3_i32.to_value()),
        ]);
        assert_eq!(render("{{field-name}} / {{ a.b }}", &p), "Email / 3");
        assert_eq!(render("{{a b}}", &p), "{{a b}}");
    }

    #[test]
    fn test_render_without_markers() {
        let p = params(&[("title", "X".to_value())]);
        assert_eq!(render("plain text", &p), "plain text");
        assert_eq!(render("{single}", &p), "{single}");
    }

    #[test]
    fn test_render_list_parameter() {
        let p = params(&[("value", vec!["a", "b"].to_value())]);
        assert_eq!(render("one of {{value}}", &p), "one of [a, b]");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("email"), "Email");
        assert_eq!(humanize("first_name"), "First Name");
        assert_eq!(humanize("billing-address"), "Billing Address");
        assert_eq!(humanize("createdAt"), "Created At");
        assert_eq!(humanize("address.street"), "Address Street");
        assert_eq!(humanize("__x__"), "X");
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("value_12"), "Value 12");
    }
}
