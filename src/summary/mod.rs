//! Window filtering and totals over the transaction list.
//!
//! Calendar comparisons (`Daily`, `Monthly`, `Yearly`) use the timezone of
//! `now`. `Weekly` is a rolling seven days ending at `now`, not a calendar week.

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Totals {
    pub(crate) income: Decimal,
    pub(crate) expense: Decimal,
    pub(crate) balance: Decimal,
}

impl Totals {
    pub(crate) fn from_transactions<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let (income, expense) =
            txns.into_iter()
                .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| match t.kind {
                    TransactionType::Income => (saturating_add(inc, t.amount), exp),
                    TransactionType::Expense => (inc, saturating_add(exp, t.amount)),
                });
        let balance = income.checked_sub(expense).unwrap_or(if expense > income {
            Decimal::MIN
        } else {
            Decimal::MAX
        });
        Self {
            income,
            expense,
            balance,
        }
    }
}

/// Income and expense recorded on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayTotal {
    pub(crate) day: NaiveDate,
    pub(crate) income: Decimal,
    pub(crate) expense: Decimal,
}

/// The visible slice of the list for one window, with its totals.
#[derive(Debug, Clone)]
pub(crate) struct Summary<'a> {
    pub(crate) window: Window,
    pub(crate) transactions: Vec<&'a Transaction>,
    pub(crate) totals: Totals,
}

pub(crate) fn summarize<'a, Tz: TimeZone>(
    txns: &'a [Transaction],
    window: Window,
    now: &DateTime<Tz>,
) -> Summary<'a> {
    let transactions = filter(txns, window, now);
    let totals = Totals::from_transactions(transactions.iter().copied());
    Summary {
        window,
        transactions,
        totals,
    }
}

/// Transactions inside `window`, in their stored order.
pub(crate) fn filter<'a, Tz: TimeZone>(
    txns: &'a [Transaction],
    window: Window,
    now: &DateTime<Tz>,
) -> Vec<&'a Transaction> {
    let tz = now.timezone();
    let week_start = week_start(now);
    let today = now.date_naive();

    txns.iter()
        .filter(|t| {
            let local = t.date.with_timezone(&tz).date_naive();
            match window {
                Window::All => true,
                Window::Daily => local == today,
                Window::Weekly => t.date >= week_start,
                Window::Monthly => local.year() == today.year() && local.month() == today.month(),
                Window::Yearly => local.year() == today.year(),
            }
        })
        .collect()
}

/// Per-day totals, oldest day first. Days without transactions are omitted.
pub(crate) fn daily_totals<'a, Tz: TimeZone>(
    txns: impl IntoIterator<Item = &'a Transaction>,
    tz: &Tz,
) -> Vec<DayTotal> {
    let mut days: std::collections::BTreeMap<NaiveDate, (Decimal, Decimal)> =
        std::collections::BTreeMap::new();
    for t in txns {
        let day = t.date.with_timezone(tz).date_naive();
        let entry = days.entry(day).or_default();
        match t.kind {
            TransactionType::Income => entry.0 = saturating_add(entry.0, t.amount),
            TransactionType::Expense => entry.1 = saturating_add(entry.1, t.amount),
        }
    }
    days.into_iter()
        .map(|(day, (income, expense))| DayTotal {
            day,
            income,
            expense,
        })
        .collect()
}

/// Sums clamp at `Decimal::MAX` / `Decimal::MIN` instead of panicking.
fn saturating_add(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or(if amount.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Seven calendar days before `now` at the same wall-clock time.
fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    now.clone()
        .checked_sub_days(Days::new(7))
        .unwrap_or_else(|| now.clone() - Duration::days(7))
        .with_timezone(&Utc)
}
