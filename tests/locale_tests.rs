use gassplit::locale::{Locale, EN, FI};
use serial_test::serial;
use std::env;

#[test]
fn test_aliases_resolve_to_english() {
    assert_eq!(Locale::parse("en-FI"), Some(Locale::English));
    assert_eq!(Locale::parse("en-US"), Some(Locale::English));
    assert_eq!(
        Locale::parse("en-FI").map(|l| l.tag()),
        Some("en"),
    );
}

#[test]
fn test_messages_lookup() {
    assert_eq!(Locale::Finnish.messages().total, FI.total);
    assert_eq!(Locale::English.messages().total, EN.total);
    assert_ne!(FI.total, EN.total);
}

#[test]
fn test_range_template_interpolation() {
    assert_eq!(
        EN.below_minimum_message(0.1),
        "Must be a number and at least 0.1"
    );
    assert!(!FI.below_minimum_message(0.1).contains("{min}"));
}

#[test]
#[serial]
fn test_env_negotiation_finnish() {
    env::set_var("LC_ALL", "fi_FI.UTF-8");
    assert_eq!(Locale::negotiate(None), Locale::Finnish);
    env::remove_var("LC_ALL");
}

#[test]
#[serial]
fn test_env_negotiation_english() {
    env::set_var("LC_ALL", "en_US.UTF-8");
    assert_eq!(Locale::negotiate(None), Locale::English);
    env::remove_var("LC_ALL");
}

#[test]
#[serial]
fn test_unknown_env_falls_back_to_finnish() {
    env::set_var("LC_ALL", "sv_SE.UTF-8");
    env::set_var("LANG", "sv_SE.UTF-8");
    assert_eq!(Locale::negotiate(None), Locale::Finnish);
    env::remove_var("LC_ALL");
    env::remove_var("LANG");
}

#[test]
#[serial]
fn test_explicit_flag_beats_environment() {
    env::set_var("LC_ALL", "fi_FI.UTF-8");
    assert_eq!(Locale::negotiate(Some("en")), Locale::English);
    env::remove_var("LC_ALL");
}
