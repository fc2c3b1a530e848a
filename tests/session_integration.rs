//! End-to-end validation scenarios through the public API

use std::cell::Cell;
use std::sync::Arc;

use parking_lot::RwLock;
use regex::Regex;
use weir::prelude::*;
use weir::{assert_field_messages, assert_invalid, assert_valid, named_value};

struct Quantity(i32);
struct Sku(String);
named_value!(Quantity(i32), Sku(String));

#[derive(Debug)]
struct Signup {
    username: String,
    email: String,
    age: Option<u8>,
    plan: &'static str,
}

fn email_pattern() -> Regex {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[a-z]{2,}$").unwrap()
}

fn validate_signup(form: &Signup) -> Session {
    let email = email_pattern();
    Session::new()
        .check(
            Context::new(&form.username)
                .named("username")
                .not()
                .blank()
                .length_between(3, 16),
        )
        .check(Context::new(&form.email).named("email").matching_to(&email))
        .is(Context::new(form.age)
            .named("age")
            .nil()
            .or()
            .greater_or_equal_to(18))
        .check(Context::new(form.plan).named("plan").in_slice(["free", "pro"]))
}

#[test]
fn fail_fast_scenario_records_one_message() {
    let session = weir::is(Context::new(1).equal_to(1).greater_than(0));
    assert_valid!(session);
    assert!(session.errors().is_empty());

    let session = weir::is(Context::new(1).equal_to(2).greater_than(0));
    assert_field_messages!(session, "value_0", ["Value 0 must be equal to \"2\""]);
}

#[test]
fn exhaustive_scenario_records_only_failing_fragments() {
    let session = weir::check(Context::new(1).equal_to(2).greater_than(0));
    assert_field_messages!(session, "value_0", ["Value 0 must be equal to \"2\""]);

    let session = weir::check(Context::new(1).equal_to(2).greater_than(5));
    assert_field_messages!(
        session,
        "value_0",
        [
            "Value 0 must be equal to \"2\"",
            "Value 0 must be greater than \"5\""
        ]
    );
}

#[test]
fn fail_fast_does_not_invoke_skipped_fragment() {
    let calls = Cell::new(0);
    let counted = || {
        calls.set(calls.get() + 1);
        true
    };

    let session = weir::is(Context::new(1).add(|| false, "first").add(counted, "second"));
    assert_invalid!(session);
    assert_eq!(calls.get(), 0);

    let session = weir::check(Context::new(1).add(|| false, "first").add(counted, "second"));
    assert_invalid!(session);
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_recovery_in_both_modes() {
    for value in [4, 7] {
        assert_valid!(weir::is(Context::new(value).equal_to(4).or().equal_to(7)));
        assert_valid!(weir::check(Context::new(value).equal_to(4).or().equal_to(7)));
    }
    assert_invalid!(weir::is(Context::new(5).equal_to(4).or().equal_to(7)));
}

#[test]
fn fail_fast_reports_or_joined_failure_before_and_failure() {
    let chain = || Context::new(1).equal_to(1).or().equal_to(2).greater_than(10);
    let expected = [
        "Value 0 must be equal to \"2\"",
        "Value 0 must be greater than \"10\"",
    ];
    assert_field_messages!(weir::is(chain()), "value_0", expected);
    assert_field_messages!(weir::check(chain()), "value_0", expected);
}

#[test]
fn leading_or_joins_the_initial_true() {
    assert_valid!(weir::is(Context::new(3).or().equal_to(5)));
    assert_invalid!(weir::is(Context::new(3).equal_to(5)));
}

#[test]
fn long_mixed_chain_recovers_after_consecutive_or_failures() {
    // (((((eq 1 OR eq 2) OR eq 3) OR eq 9) AND > 0) AND < 10)
    let chain = || {
        Context::new(9)
            .equal_to(1)
            .or()
            .equal_to(2)
            .or()
            .equal_to(3)
            .or()
            .equal_to(9)
            .greater_than(0)
            .less_than(10)
    };
    assert_valid!(weir::is(chain()));
    assert_valid!(weir::check(chain()));

    // ((eq 1 AND > 0) OR eq 9) AND < 5
    let session = weir::is(
        Context::new(9)
            .equal_to(1)
            .greater_than(0)
            .or()
            .equal_to(9)
            .less_than(5),
    );
    assert_invalid!(session);
}

#[test]
fn not_scope_covers_next_fragment_only() {
    let session = weir::check(Context::new(5).not().equal_to(5).equal_to(5));
    assert_field_messages!(session, "value_0", ["Value 0 can't be equal to \"5\""]);
}

#[test]
fn numeric_cross_type_equality() {
    assert_valid!(weir::is(Context::new(Quantity(10)).equal_to(10)));
    assert_valid!(weir::is(Context::new(10.0).equal_to(10)));
    assert_invalid!(weir::is(Context::new(10).equal_to("10")));
    assert_valid!(weir::is(Context::new(Quantity(3)).between(1_u64, 5.5)));
    assert_valid!(weir::is(Context::new(Sku("A-1".into())).not().blank()));
}

#[test]
fn non_numeric_string_coerces_to_zero() {
    let value = "abc".to_value();
    assert_eq!(value.as_f64(), 0.0);
    assert_eq!("12.5".to_value().as_f64(), 12.5);
}

#[test]
fn nil_never_orders() {
    let none = None::<i32>;
    assert_invalid!(weir::is(Context::new(none).greater_than(0)));
    assert_invalid!(weir::is(Context::new(none).less_or_equal_to(none)));
    assert_valid!(weir::is(Context::new(none).nil()));
}

#[test]
fn unnamed_values_are_numbered_per_session() {
    let session = weir::check_all([
        Context::new(0).greater_than(0),
        Context::new(0).greater_than(0),
        Context::new(0).greater_than(0),
    ]);
    let fields: Vec<&str> = session.errors().keys().map(String::as_str).collect();
    assert_eq!(fields, ["value_0", "value_1", "value_2"]);
    assert_field_messages!(session, "value_2", ["Value 2 must be greater than \"0\""]);
}

#[test]
fn signup_form_collects_every_field() {
    let form = Signup {
        username: "  ".into(),
        email: "not-an-email".into(),
        age: Some(15),
        plan: "enterprise",
    };
    let session = validate_signup(&form);

    assert_invalid!(session);
    assert_eq!(session.errors().len(), 4);
    assert_field_messages!(
        session,
        "username",
        [
            "Username can't be blank",
            "Username must have a length between \"3\" and \"16\""
        ]
    );
    assert_field_messages!(
        session,
        "email",
        [r#"Email must match to "^[^@\s]+@[^@\s]+\.[a-z]{2,}$""#]
    );
    // both sides of the failed OR were evaluated
    assert_field_messages!(
        session,
        "age",
        ["Age must be nil", "Age must be greater than or equal to \"18\""]
    );
    assert_field_messages!(session, "plan", ["Plan is not valid"]);

    let err = session.into_result().unwrap_err();
    assert_eq!(err.len(), 4);
    assert!(err.to_string().starts_with("age: Age must be"));
}

#[test]
fn signup_form_accepts_missing_optional_age() {
    let form = Signup {
        username: "ada".into(),
        email: "ada@example.com".into(),
        age: None,
        plan: "pro",
    };
    assert_valid!(validate_signup(&form));
}

#[test]
fn nested_rows_and_scopes() {
    let items = [("widget", 2), ("", 0)];
    let mut order = Session::new();
    for (index, (name, qty)) in items.iter().enumerate() {
        let row = Session::new()
            .check(Context::new(*name).named("name").not().blank())
            .check(Context::new(*qty).named("qty").greater_than(0));
        order.in_row("items", index, row);
    }
    order.in_scope(
        "shipping",
        weir::check(Context::new("").named("zip").titled("ZIP code").length(5)),
    );

    assert_invalid!(order);
    assert!(order.is_valid("items[0].name"));
    assert_field_messages!(order, "items[1].name", ["Name can't be blank"]);
    assert_field_messages!(order, "items[1].qty", ["Qty must be greater than \"0\""]);
    assert_field_messages!(
        order,
        "shipping.zip",
        ["ZIP code must have a length equal to \"5\""]
    );
}

#[test]
fn semigroup_combines_sessions() {
    let sessions = vec![
        weir::check(Context::new(1).named("a").equal_to(1)),
        weir::check(Context::new(1).named("b").equal_to(2)),
        weir::check(Context::new(1).named("b").equal_to(2)),
    ];
    let combined = sessions
        .into_iter()
        .reduce(Semigroup::combine)
        .unwrap();
    assert_invalid!(combined);
    assert_field_messages!(combined, "b", ["B must be equal to \"2\""]);
}

#[test]
fn template_round_trip_through_injected_registry() {
    let mut registry = LocaleRegistry::new();
    registry.register("custom", [("equal_to", "{{title}} must equal {{value}}")]);
    let options = Options::default()
        .with_locale("custom")
        .with_registry(Arc::new(RwLock::new(registry)));

    let session = Session::with_options(options)
        .check(Context::new(3).named("age").equal_to(10))
        .check(Context::new(3).named("size").greater_than(10));

    assert_field_messages!(session, "age", ["Age must equal 10"]);
    // missing from "custom": falls back to English
    assert_field_messages!(session, "size", ["Size must be greater than \"10\""]);
}

#[test]
fn per_call_override_wins_over_locale() {
    let session = Session::with_locale("es").check(
        Context::new(0)
            .named("age")
            .greater_than(0)
            .message("{{title}}: {{value}}+")
            .less_than(-1),
    );
    assert_field_messages!(session, "age", ["Age: 0+", "Age debe ser menor que \"-1\""]);
}

#[test]
fn unknown_locale_falls_back_without_failing() {
    let session = Session::with_locale("tlh").check(Context::new("").named("name").not().blank());
    assert_field_messages!(session, "name", ["Name can't be blank"]);
}
