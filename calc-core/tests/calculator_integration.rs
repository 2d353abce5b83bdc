//! Integration tests driving the calculator through its public API.

use std::path::PathBuf;

use calc_core::{
    load_layout_from_path, CalcError, Calculator, HeadlessPanel, Key, Operator, Session,
    DISPLAY_CAPACITY,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run(keys: &str) -> Session<HeadlessPanel> {
    let mut session = Session::new(HeadlessPanel::new());
    session.run_keys(keys).expect("valid key string");
    session
}

#[test]
fn test_digits_after_clear() {
    assert_eq!(run("C123").display(), "123");
}

#[test]
fn test_digit_replaces_zero() {
    assert_eq!(run("C5").display(), "5");
    assert_eq!(run("C005").display(), "5");
}

#[test]
fn test_decimal_point_idempotent() {
    let session = run("C..");
    assert_eq!(session.display(), "0.");
    assert_eq!(session.display().matches('.').count(), 1);

    let session = run("C1.2.3");
    assert_eq!(session.display(), "1.23");
}

#[test]
fn test_chained_evaluation() {
    assert_eq!(run("C3+4+5=").display(), "12");
    assert_eq!(run("C10-2x3=").display(), "24");
}

#[test]
fn test_repeated_equals() {
    let mut session = run("C5+3=");
    assert_eq!(session.display(), "8");
    session.press(Key::Equals).unwrap();
    assert_eq!(session.display(), "11");
}

#[test]
fn test_repeated_equals_with_division() {
    let session = run("C81/3===");
    assert_eq!(session.display(), "3");
}

#[test]
fn test_divide_by_zero_resets() {
    let mut calc = Calculator::new();
    calc.clear();
    calc.input_digit(8);
    calc.apply_operator(Operator::Divide).unwrap();
    calc.input_digit(0);
    let err = calc.apply_equals().unwrap_err();
    assert!(matches!(err, CalcError::DivideByZero));
    assert_eq!(err.to_string(), "Cannot divide by zero.");
    assert_eq!(calc.display_text(), "0");
}

#[test]
fn test_divide_by_decimal_zero() {
    let mut session = run("C8/0.00");
    assert!(session.press(Key::Equals).is_err());
    assert_eq!(session.display(), "0");
}

#[test]
fn test_lazy_reset() {
    let mut session = run("C2+3=");
    assert_eq!(session.display(), "5");
    session.press(Key::Digit(7)).unwrap();
    assert_eq!(session.display(), "7");

    session.run_keys("+=").unwrap();
    // 7 + 7, nothing from the old 2 + 3 chain
    assert_eq!(session.display(), "14");
}

#[test]
fn test_display_text_idempotent() {
    let session = run("C12.5x4");
    let first = session.display().to_string();
    for _ in 0..3 {
        assert_eq!(session.display(), first);
    }
}

#[test]
fn test_capacity_drops_extra_digits() {
    let keys = "9".repeat(DISPLAY_CAPACITY + 10);
    let session = run(&keys);
    assert_eq!(session.display().len(), DISPLAY_CAPACITY);
    assert!(session.display().chars().all(|c| c == '9'));
}

#[test]
fn test_capacity_drops_decimal_point() {
    let keys = "9".repeat(DISPLAY_CAPACITY);
    let mut session = run(&keys);
    session.press(Key::Decimal).unwrap();
    assert_eq!(session.display(), keys);
    assert!(!session.display().contains('.'));
}

#[test]
fn test_decimal_point_fills_last_slot() {
    let keys = format!("{}.999", "9".repeat(DISPLAY_CAPACITY - 1));
    let session = run(&keys);
    assert_eq!(session.display().len(), DISPLAY_CAPACITY);
    assert_eq!(session.display().matches('.').count(), 1);
    assert!(session.display().ends_with('.'));
}

#[test]
fn test_large_result_uses_exponent() {
    let session = run("C99999999x99999999=");
    assert_eq!(session.display(), "9.9999998e+15");
}

#[test]
fn test_overflow_renders_inf() {
    // Each equals multiplies by 1e+60 again until past f64::MAX
    let keys = format!("C1{}x=====", "0".repeat(60));
    let session = run(&keys);
    assert_eq!(session.display(), "inf");

    let mut session = session;
    session.press(Key::Digit(2)).unwrap();
    assert_eq!(session.display(), "2");
}

#[test]
fn test_float_noise_hidden() {
    assert_eq!(run("C.1+.2=").display(), "0.3");
}

#[test]
fn test_load_layout_fixture() {
    let layout = load_layout_from_path(fixture_path("compact.json")).unwrap();
    assert_eq!(layout.columns, 5);
    assert_eq!(layout.rows(), 4);
    for key in Key::ALL {
        assert!(layout.button_for(key).is_some(), "missing {}", key);
    }
    assert_eq!(layout.button_at(3, 1).unwrap().key, Key::Digit(0));
}

#[test]
fn test_load_layout_rejects_overlap() {
    let err = load_layout_from_path(fixture_path("overlapping.json")).unwrap_err();
    assert!(matches!(err, CalcError::Layout(_)));
}

#[test]
fn test_load_layout_missing_file() {
    let err = load_layout_from_path(fixture_path("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, CalcError::Io(_)));
}
