//! In-Memory Installment Store
//!
//! Mock adapter for the `InstallmentStore` port, letting tests exercise
//! the persistence contract without a database. Rows are keyed by entry
//! and kept in `number` order, preserving identity across upserts the way
//! the engine expects a real adapter to.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use core_kernel::{DomainPort, EntryId, PortError};
use domain_ledger::installment::Installment;
use domain_ledger::ports::InstallmentStore;

/// In-memory `InstallmentStore` adapter
#[derive(Debug, Default)]
pub struct InMemoryInstallmentStore {
    rows: Mutex<HashMap<EntryId, Vec<Installment>>>,
}

impl InMemoryInstallmentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries with stored rows
    pub fn entry_count(&self) -> usize {
        self.rows.lock().expect("store mutex poisoned").len()
    }
}

impl DomainPort for InMemoryInstallmentStore {}

#[async_trait]
impl InstallmentStore for InMemoryInstallmentStore {
    async fn load_installments(&self, entry_id: EntryId) -> Result<Vec<Installment>, PortError> {
        let rows = self.rows.lock().expect("store mutex poisoned");
        rows.get(&entry_id)
            .cloned()
            .ok_or_else(|| PortError::not_found("LedgerEntry", entry_id))
    }

    async fn upsert_installments(
        &self,
        entry_id: EntryId,
        installments: &[Installment],
    ) -> Result<(), PortError> {
        let mut stored: Vec<Installment> = installments.to_vec();
        stored.sort_by_key(|i| i.number);

        let mut rows = self.rows.lock().expect("store mutex poisoned");
        rows.insert(entry_id, stored);
        Ok(())
    }
}
