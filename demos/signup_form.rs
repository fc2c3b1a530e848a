//! Signup form validation - every field checked, every failure reported
//!
//! Run with: cargo run --example signup_form

use regex::Regex;
use weir::{named_value, Context, Session};

#[derive(Debug)]
struct Age(u8);
named_value!(Age(u8));

// Raw input from form
struct SignupForm {
    username: String,
    email: String,
    password: String,
    age: Option<Age>,
    country: String,
    tags: Vec<String>,
}

fn validate(form: &SignupForm) -> Session {
    let email = Regex::new(r"^[^@\s]+@[^@\s]+\.[a-z]{2,}$").expect("valid pattern");

    let mut session = Session::new()
        .check(
            Context::new(&form.username)
                .named("username")
                .not()
                .blank()
                .length_between(3, 20),
        )
        .check(
            Context::new(&form.email)
                .named("email")
                .titled("E-mail address")
                .matching_to(&email),
        )
        .check(
            Context::new(&form.password)
                .named("password")
                .min_length(8)
                .not()
                .equal_to(&form.username)
                .message("{{title}} can't be the same as your username"),
        )
        // age is optional, but when present it must be 18+
        .is(Context::new(&form.age)
            .named("age")
            .nil()
            .or()
            .greater_or_equal_to(18))
        .check(
            Context::new(&form.country)
                .named("country")
                .in_slice(["DE", "ES", "HU", "US"]),
        );

    for (index, tag) in form.tags.iter().enumerate() {
        let row = Session::new().check(Context::new(tag).named("name").not().blank().max_length(12));
        session.in_row("tags", index, row);
    }

    session
}

fn main() {
    let form = SignupForm {
        username: "ada".to_string(),
        email: "ada@example".to_string(),
        password: "ada".to_string(),
        age: Some(Age(16)),
        country: "FR".to_string(),
        tags: vec!["rust".to_string(), " ".to_string()],
    };

    let session = validate(&form);
    if session.valid() {
        println!("Signup accepted");
        return;
    }

    println!("Signup rejected:");
    for (field, error) in session.errors() {
        for message in error.messages() {
            println!("  {field}: {message}");
        }
    }

    if let Err(err) = session.into_result() {
        println!("\nAs an error value:\n{err}");
    }
}
