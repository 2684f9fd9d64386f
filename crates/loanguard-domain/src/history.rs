//! Read-side aggregate queries the rules consult.

use loanguard_types::{DomainId, EditionId, PersonId};
use thiserror::Error;
use time::Date;

/// A history backend call failed. Fatal for the current validation step; the
/// engine never retries, but callers can distinguish this kind and retry
/// transient failures at their own level.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("history query failed: {reason}")]
pub struct QueryError {
    pub reason: String,
}

impl QueryError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Live aggregates over the loan history.
///
/// Implementations read current store state on every call; the engine caches
/// nothing, so repeated evaluation of one candidate against unchanged history
/// yields the same verdict.
pub trait HistoryQuery {
    /// Loans of this edition with no return date yet.
    fn active_by_edition(&self, edition: EditionId) -> Result<u32, QueryError>;

    /// All of the reader's loans on or after `since`, returned or not.
    fn borrows_since(&self, reader: PersonId, since: Date) -> Result<u32, QueryError>;

    /// The reader's loans on or after `since` whose edition's book carries
    /// the given domain.
    fn borrows_in_domain_since(
        &self,
        reader: PersonId,
        domain: DomainId,
        since: Date,
    ) -> Result<u32, QueryError>;

    /// Per-loan `length - standard` day deltas for the reader's loans on or
    /// after `since`. Standard-length and shorter loans yield zero or
    /// negative entries.
    fn extension_deltas_since(
        &self,
        reader: PersonId,
        since: Date,
    ) -> Result<Vec<i64>, QueryError>;

    /// The reader's loans of one specific edition on or after `since`.
    fn borrows_of_edition_since(
        &self,
        reader: PersonId,
        edition: EditionId,
        since: Date,
    ) -> Result<u32, QueryError>;

    /// Loans the reader took out on exactly `day`.
    fn borrows_on(&self, reader: PersonId, day: Date) -> Result<u32, QueryError>;

    /// Loans the staff member issued on exactly `day`.
    fn issued_on(&self, staff: PersonId, day: Date) -> Result<u32, QueryError>;
}
