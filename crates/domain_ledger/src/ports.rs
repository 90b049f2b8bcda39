//! Ledger domain ports
//!
//! The engine does not persist anything itself; the surrounding
//! application supplies an adapter for this trait (database, external
//! API, or the in-memory mock used in tests).

use async_trait::async_trait;

use core_kernel::{DomainPort, EntryId, PortError};

use crate::installment::Installment;

/// Persistence collaborator for installment rows
///
/// Implementations must preserve row identity across positional updates
/// when the count is unchanged: `upsert_installments` followed by
/// `load_installments` returns rows with the same `InstallmentId`s the
/// engine handed over, in `number` order.
#[async_trait]
pub trait InstallmentStore: DomainPort {
    /// Loads the installment rows belonging to an entry
    async fn load_installments(&self, entry_id: EntryId) -> Result<Vec<Installment>, PortError>;

    /// Inserts or updates the installment rows of an entry
    async fn upsert_installments(
        &self,
        entry_id: EntryId,
        installments: &[Installment],
    ) -> Result<(), PortError>;
}
