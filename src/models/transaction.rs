use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Largest amount accepted from user input (10^15). Sums of many such
/// amounts stay well inside `Decimal`'s range.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Direction of money flow. The stored amount is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "+" => Some(Self::Income),
            "expense" | "out" | "-" => Some(Self::Expense),
            _ => None,
        }
    }

    pub(crate) fn toggle(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Transaction {
    pub(crate) id: i64,
    pub(crate) description: String,
    #[serde(
        serialize_with = "rust_decimal::serde::arbitrary_precision::serialize",
        deserialize_with = "deserialize_amount"
    )]
    pub(crate) amount: Decimal,
    #[serde(rename = "type")]
    pub(crate) kind: TransactionType,
    pub(crate) date: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the direction applied: positive for income, negative for expense.
    pub(crate) fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Read a stored JSON number exactly. Numbers outside `Decimal`'s range
/// (the browser writes whatever `parseFloat` returns) saturate instead of
/// failing the entry; magnitudes below its precision read as zero.
fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    let text = number.to_string();
    if let Ok(amount) = Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        return Ok(amount);
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f.abs() < 1.0 => Ok(Decimal::ZERO),
        Some(f) if f.is_sign_negative() => Ok(Decimal::MIN),
        Some(_) => Ok(Decimal::MAX),
        None => Err(serde::de::Error::custom(format!("invalid amount: {text}"))),
    }
}

/// Parse user-entered amount text. Thousands separators and surrounding
/// whitespace are tolerated; negative, empty, non-numeric and amounts above
/// `MAX_AMOUNT` are not.
pub(crate) fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(['_', ','], "");
    if cleaned.is_empty() {
        return None;
    }
    let amount = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()?;
    if (amount.is_sign_negative() && !amount.is_zero()) || amount > MAX_AMOUNT {
        return None;
    }
    Some(amount.normalize())
}
