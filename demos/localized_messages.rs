//! Localized messages - bundled locales, custom locales and overrides
//!
//! Run with: cargo run --example localized_messages --features tracing

use weir::locale;
use weir::{Context, Options, Session};

fn age_check(age: i32) -> Context<'static> {
    Context::new(age).named("age").between(18, 130)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    for code in ["en", "es", "de", "hu"] {
        let session = Session::with_locale(code).check(age_check(7));
        println!("[{code}] {:?}", session.error_by_key("age").unwrap_or_default());
    }

    // Register a custom locale and make it the process-wide default
    locale::register_locale(
        "en-pirate",
        [
            ("between", "Arr, {{title}} be between {{min}} and {{max}}"),
            ("not_blank", "{{title}} be empty as a sunk chest"),
        ],
    );
    locale::set_active_locale("en-pirate");
    let session = weir::check(age_check(200));
    println!("[active] {:?}", session.error_by_key("age").unwrap_or_default());

    // Unknown locales fall back to English, with a warning
    let session = Session::with_locale("tlh").check(age_check(200));
    println!("[tlh] {:?}", session.error_by_key("age").unwrap_or_default());

    // Per-session templates sit above any locale
    let options = Options::default().with_message("between", "{{title}}: {{min}}-{{max}} only");
    let session = Session::with_options(options).check(age_check(0));
    println!("[session] {:?}", session.error_by_key("age").unwrap_or_default());

    locale::reset_messages();
    println!("active locale after reset: {}", locale::active_locale());
}
