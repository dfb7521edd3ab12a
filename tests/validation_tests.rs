use gassplit::locale::{EN, FI};
use gassplit::validate::{parse_decimal, ErrorKind, Field, Validator, DEFAULT_MIN};

#[test]
fn test_decimal_separator_equivalence() {
    assert_eq!(parse_decimal("7,1"), Some(7.1));
    assert_eq!(parse_decimal("7.1"), Some(7.1));
    assert_eq!(parse_decimal("7,1"), parse_decimal("7.1"));
}

#[test]
fn test_format_rejections() {
    let validator = Validator::new(&EN);

    for raw in ["abc", "", "1,2,3", "1.2.3", "1,", ",5", "7 1", "1e5", "-3"] {
        let err = validator
            .coerce_min(Field::Distance, raw, DEFAULT_MIN)
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Format, "input {raw:?}");
        assert_eq!(err.field(), Field::Distance);
    }
}

#[test]
fn test_minimum_boundary_accepted() {
    let validator = Validator::new(&EN);

    assert_eq!(
        validator.coerce_min(Field::Distance, "0.1", DEFAULT_MIN),
        Ok(0.1)
    );
    assert_eq!(
        validator.coerce_min(Field::Distance, "0,1", DEFAULT_MIN),
        Ok(0.1)
    );
}

#[test]
fn test_just_below_minimum_rejected_as_range() {
    let validator = Validator::new(&EN);

    let err = validator
        .coerce_min(Field::Consumption, "0.09", DEFAULT_MIN)
        .unwrap_err();

    assert_eq!(err.kind(), &ErrorKind::Range { min: DEFAULT_MIN });
    assert_eq!(err.field(), Field::Consumption);
    assert!(err.message().contains("0.1"));
}

#[test]
fn test_zero_rejected_with_default_minimum() {
    let validator = Validator::new(&EN);

    let err = validator
        .coerce_min(Field::Distance, "0", DEFAULT_MIN)
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Range { min: DEFAULT_MIN });
}

#[test]
fn test_caller_specified_minimum() {
    let validator = Validator::new(&EN);

    assert_eq!(validator.coerce_min(Field::Distance, "5", 5.0), Ok(5.0));
    assert!(validator.coerce_min(Field::Distance, "4,9", 5.0).is_err());
}

#[test]
fn test_messages_follow_constructed_locale() {
    let english = Validator::new(&EN);
    let finnish = Validator::new(&FI);

    let en_err = english
        .coerce_min(Field::GasPrice, "x", DEFAULT_MIN)
        .unwrap_err();
    let fi_err = finnish
        .coerce_min(Field::GasPrice, "x", DEFAULT_MIN)
        .unwrap_err();

    assert_eq!(en_err.message(), "Must be a number");
    assert_eq!(fi_err.message(), "Täytyy olla numero");
    // Same tags regardless of locale; only the rendered message differs.
    assert_eq!(en_err.kind(), fi_err.kind());
    assert_eq!(en_err.field(), fi_err.field());
}

#[test]
fn test_person_count_contract() {
    let validator = Validator::new(&EN);

    assert_eq!(validator.person_count("1"), Ok(1));
    assert_eq!(validator.person_count("9"), Ok(9));
    assert_eq!(validator.person_count("15"), Ok(15));

    assert_eq!(
        validator.person_count("0").unwrap_err().kind(),
        &ErrorKind::Range { min: 1.0 }
    );
    assert_eq!(
        validator.person_count("2,5").unwrap_err().kind(),
        &ErrorKind::Format
    );
    assert_eq!(
        validator.person_count("-1").unwrap_err().kind(),
        &ErrorKind::Format
    );
}

#[test]
fn test_missing_selection_is_tagged_with_field() {
    let validator = Validator::new(&FI);

    let err = validator.missing_selection(Field::To);
    assert_eq!(err.field(), Field::To);
    assert_eq!(err.kind(), &ErrorKind::MissingSelection);
    assert_eq!(err.message(), "Valitse paikka ehdotuksista");
}
