#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn make_txn(amount: Decimal, kind: TransactionType) -> Transaction {
    Transaction {
        id: 1_700_000_000_000,
        description: "Test".into(),
        amount,
        kind,
        date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    }
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_income() {
    let txn = make_txn(dec!(100.00), TransactionType::Income);
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(100.00));
}

#[test]
fn test_expense() {
    let txn = make_txn(dec!(50.00), TransactionType::Expense);
    assert!(!txn.is_income());
    assert!(txn.is_expense());
    assert_eq!(txn.signed_amount(), dec!(-50.00));
}

#[test]
fn test_json_field_names() {
    let txn = make_txn(dec!(50000), TransactionType::Expense);
    let json = serde_json::to_value(&txn).unwrap();
    assert_eq!(json["id"], 1_700_000_000_000_i64);
    assert_eq!(json["description"], "Test");
    assert_eq!(json["type"], "expense");
    assert_eq!(json["amount"].as_f64(), Some(50000.0));
    assert!(json["date"].as_str().unwrap().starts_with("2024-01-15T09:30:00"));
}

#[test]
fn test_deserialize_browser_blob() {
    let raw = r#"{"id":1705311000000,"description":"Salary","amount":5000000,"type":"income","date":"2024-01-15T09:30:00.000Z"}"#;
    let txn: Transaction = serde_json::from_str(raw).unwrap();
    assert_eq!(txn.id, 1_705_311_000_000);
    assert_eq!(txn.amount, dec!(5000000));
    assert_eq!(txn.kind, TransactionType::Income);
    assert_eq!(txn.date, Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
}

#[test]
fn test_amount_json_keeps_every_digit() {
    let txn = make_txn(dec!(0.1234567890123456789), TransactionType::Income);
    let raw = serde_json::to_string(&txn).unwrap();
    assert!(raw.contains(r#""amount":0.1234567890123456789"#));

    let back: Transaction = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, txn);
}

#[test]
fn test_deserialize_out_of_range_amount_saturates() {
    let huge = r#"{"id":1,"description":"X","amount":1e300,"type":"income","date":"2024-01-15T09:30:00Z"}"#;
    let txn: Transaction = serde_json::from_str(huge).unwrap();
    assert_eq!(txn.amount, Decimal::MAX);

    let tiny = r#"{"id":1,"description":"X","amount":1e-300,"type":"income","date":"2024-01-15T09:30:00Z"}"#;
    let txn: Transaction = serde_json::from_str(tiny).unwrap();
    assert_eq!(txn.amount, Decimal::ZERO);
}

#[test]
fn test_deserialize_fractional_amount() {
    let raw = r#"{"id":1,"description":"Coffee","amount":4.5,"type":"expense","date":"2024-01-15T09:30:00Z"}"#;
    let txn: Transaction = serde_json::from_str(raw).unwrap();
    assert_eq!(txn.amount, dec!(4.5));
}

#[test]
fn test_deserialize_unknown_type_fails() {
    let raw = r#"{"id":1,"description":"X","amount":1,"type":"transfer","date":"2024-01-15T09:30:00Z"}"#;
    assert!(serde_json::from_str::<Transaction>(raw).is_err());
}

// ── TransactionType ───────────────────────────────────────────

#[test]
fn test_transaction_type_parse() {
    assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
    assert_eq!(TransactionType::parse("INCOME"), Some(TransactionType::Income));
    assert_eq!(TransactionType::parse(" expense "), Some(TransactionType::Expense));
    assert_eq!(TransactionType::parse("out"), Some(TransactionType::Expense));
    assert_eq!(TransactionType::parse("transfer"), None);
}

#[test]
fn test_transaction_type_toggle() {
    assert_eq!(TransactionType::Income.toggle(), TransactionType::Expense);
    assert_eq!(TransactionType::Expense.toggle(), TransactionType::Income);
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("100"), Some(dec!(100)));
    assert_eq!(parse_amount("  42.50 "), Some(dec!(42.5)));
    assert_eq!(parse_amount("5,000,000"), Some(dec!(5000000)));
}

#[test]
fn test_parse_amount_scientific() {
    assert_eq!(parse_amount("1e3"), Some(dec!(1000)));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("NaN"), None);
}

#[test]
fn test_parse_amount_rejects_negative() {
    assert_eq!(parse_amount("-10"), None);
}

#[test]
fn test_parse_amount_upper_bound() {
    assert_eq!(parse_amount("1000000000000000"), Some(MAX_AMOUNT));
    assert_eq!(MAX_AMOUNT, dec!(1000000000000000));
    assert_eq!(parse_amount("1000000000000000.01"), None);
    assert_eq!(parse_amount("50000000000000000000000000000"), None);
}

#[test]
fn test_parse_amount_zero() {
    assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
}

// ── Window ────────────────────────────────────────────────────

#[test]
fn test_window_parse() {
    assert_eq!(Window::parse("all"), Window::All);
    assert_eq!(Window::parse("daily"), Window::Daily);
    assert_eq!(Window::parse("WEEKLY"), Window::Weekly);
    assert_eq!(Window::parse("monthly"), Window::Monthly);
    assert_eq!(Window::parse("yearly"), Window::Yearly);
}

#[test]
fn test_window_parse_unknown_is_all() {
    assert_eq!(Window::parse("fortnightly"), Window::All);
    assert_eq!(Window::parse(""), Window::All);
}

#[test]
fn test_window_as_str_roundtrips() {
    for w in Window::all() {
        assert_eq!(Window::parse(w.as_str()), *w);
    }
}

#[test]
fn test_window_cycle() {
    assert_eq!(Window::All.next(), Window::Daily);
    assert_eq!(Window::Yearly.next(), Window::All);
    assert_eq!(Window::All.prev(), Window::Yearly);
    assert_eq!(Window::Weekly.prev(), Window::Daily);
}
