//! The transaction list and its persisted snapshot.
//!
//! The whole list lives under a single key as a JSON array, newest first.
//! Every mutation rewrites the full snapshot.

use chrono::{DateTime, Utc};

use crate::models::{parse_amount, Transaction, TransactionType};
use crate::storage::{KeyValueStore, StorageError};

pub(crate) const STORAGE_KEY: &str = "keuangan-data";

pub(crate) struct TransactionStore {
    kv: Box<dyn KeyValueStore>,
    key: String,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Read the persisted list. Never fails: a missing or unreadable value
    /// starts an empty list, and entries that do not decode are dropped.
    pub(crate) fn load(kv: Box<dyn KeyValueStore>) -> Self {
        Self::load_with_key(kv, STORAGE_KEY)
    }

    pub(crate) fn load_with_key(mut kv: Box<dyn KeyValueStore>, key: &str) -> Self {
        let transactions = match kv.get(key) {
            Ok(Some(raw)) => {
                let (list, complete) = decode_entries(&raw);
                if !complete {
                    let backup_key = format!("{key}.corrupt");
                    tracing::warn!(kept = list.len(), backup_key = %backup_key, "stored transactions are malformed, keeping readable entries");
                    // Keep the original blob around; the next persist overwrites `key`.
                    if let Err(e) = kv.set(&backup_key, &raw) {
                        tracing::warn!(error = %e, "failed to back up malformed transactions");
                    }
                }
                list
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored transactions, starting empty");
                Vec::new()
            }
        };

        tracing::info!(count = transactions.len(), key, "loaded transactions");

        Self {
            kv,
            key: key.to_string(),
            transactions,
        }
    }

    /// All transactions, newest first.
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn get(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Record a new transaction dated now.
    ///
    /// Returns `Ok(None)` without touching the list when the description is
    /// blank or the amount is not a number between zero and `MAX_AMOUNT`.
    pub(crate) fn add(
        &mut self,
        description: &str,
        amount: &str,
        kind: TransactionType,
    ) -> Result<Option<Transaction>, StorageError> {
        self.add_at(description, amount, kind, Utc::now())
    }

    pub(crate) fn add_at(
        &mut self,
        description: &str,
        amount: &str,
        kind: TransactionType,
        now: DateTime<Utc>,
    ) -> Result<Option<Transaction>, StorageError> {
        let description = description.trim();
        if description.is_empty() {
            tracing::debug!("rejected transaction with empty description");
            return Ok(None);
        }
        let Some(amount) = parse_amount(amount) else {
            tracing::debug!(amount, "rejected transaction with invalid amount");
            return Ok(None);
        };

        let txn = Transaction {
            id: self.next_id(now),
            description: description.to_string(),
            amount,
            kind,
            date: now,
        };
        self.transactions.insert(0, txn.clone());
        tracing::info!(id = txn.id, kind = kind.as_str(), %amount, "added transaction");

        self.persist()?;
        Ok(Some(txn))
    }

    /// Delete the transaction with `id`. Missing ids are not an error.
    pub(crate) fn remove(&mut self, id: i64) -> Result<Option<Transaction>, StorageError> {
        let removed = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .map(|pos| self.transactions.remove(pos));

        match &removed {
            Some(txn) => tracing::info!(id, description = %txn.description, "removed transaction"),
            None => tracing::debug!(id, "no transaction to remove"),
        }

        self.persist()?;
        Ok(removed)
    }

    /// Write the full list under the store key, replacing the previous snapshot.
    pub(crate) fn persist(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.transactions)?;
        self.kv.set(&self.key, &raw)?;
        tracing::debug!(count = self.transactions.len(), bytes = raw.len(), "persisted transactions");
        Ok(())
    }

    /// Ids follow the creation time in milliseconds, bumped past the
    /// largest existing id so they stay unique and increasing.
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let candidate = now.timestamp_millis();
        match self.transactions.iter().map(|t| t.id).max() {
            Some(max) if max >= candidate => max + 1,
            _ => candidate,
        }
    }
}

/// Decode a stored list entry by entry. Entries that do not decode are
/// dropped; the flag is false when anything was dropped or the blob is not
/// a JSON array at all.
fn decode_entries(raw: &str) -> (Vec<Transaction>, bool) {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "stored transactions are not a JSON array");
            return (Vec::new(), false);
        }
    };

    let total = entries.len();
    let list: Vec<Transaction> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(txn) => Some(txn),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable stored transaction");
                None
            }
        })
        .collect();
    let complete = list.len() == total;
    (list, complete)
}
