//! Persistence contract for committed loans.

use crate::model::LoanRecord;
use loanguard_types::LoanId;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("loan {0} not found")]
    NotFound(LoanId),
    #[error("store backend failed: {reason}")]
    Backend { reason: String },
}

/// Minimal per-record store. It offers no multi-record transaction, which is
/// why batch compensation is best-effort (see the batch coordinator).
pub trait LoanStore {
    fn create(&mut self, record: &LoanRecord) -> Result<LoanId, StoreError>;

    fn delete(&mut self, id: LoanId) -> Result<(), StoreError>;

    fn read(&self, id: LoanId) -> Result<LoanRecord, StoreError>;
}
