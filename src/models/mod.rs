mod transaction;
mod window;

pub(crate) use transaction::{parse_amount, Transaction, TransactionType, MAX_AMOUNT};
pub(crate) use window::Window;

#[cfg(test)]
mod tests;
