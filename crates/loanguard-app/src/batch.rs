use crate::desk::LendingDesk;
use loanguard_domain::history::HistoryQuery;
use loanguard_domain::model::LoanRecord;
use loanguard_domain::store::{LoanStore, StoreError};
use loanguard_domain::Denial;
use loanguard_types::{DomainId, LoanId};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("batch is empty")]
    Empty,

    #[error("batch of {len} exceeds the cap of {cap}")]
    TooLarge { len: usize, cap: usize },

    #[error("batch of {len} candidates spans {distinct} domain(s); at least 2 required")]
    TooNarrow { len: usize, distinct: usize },

    #[error("candidate {index} rejected: {source}")]
    Rejected {
        index: usize,
        #[source]
        source: Denial,
    },

    #[error("candidate {index} could not be stored")]
    Store {
        index: usize,
        #[source]
        source: StoreError,
    },

    /// A compensating delete failed after the batch aborted: the store may
    /// be left partially committed and requires manual reconciliation.
    #[error("rollback of candidate {undo_index} (loan {loan}) failed after: {cause}")]
    CompensationFailed {
        undo_index: usize,
        loan: LoanId,
        cause: Box<BatchError>,
    },
}

impl<'a, H, S> LendingDesk<'a, H, S>
where
    H: HistoryQuery + ?Sized,
    S: LoanStore + ?Sized,
{
    /// Validate and commit an ordered batch as one logical operation.
    ///
    /// The whole batch is pre-checked before anything touches the store.
    /// Commits are strictly sequential and each candidate is re-validated
    /// right before its commit, since history moves underneath a batch as
    /// earlier candidates land. On failure, every record already committed
    /// is deleted again, most recent first; the store offers no multi-record
    /// transaction, so that compensation is best-effort.
    pub fn borrow_many(&mut self, candidates: &[LoanRecord]) -> Result<Vec<LoanId>, BatchError> {
        if candidates.is_empty() {
            return Err(BatchError::Empty);
        }

        // The cap scales with the first candidate's reader role, even in
        // mixed-role batches.
        let multiplier = candidates[0].reader.role.threshold_multiplier();
        let cap = self.limits.batch_size_cap as usize * multiplier as usize;
        if candidates.len() > cap {
            return Err(BatchError::TooLarge {
                len: candidates.len(),
                cap,
            });
        }

        // Batches beyond two items must span at least two attached domains.
        if candidates.len() > 2 {
            let distinct: BTreeSet<DomainId> = candidates
                .iter()
                .flat_map(|c| c.edition.book.domains.iter().copied())
                .collect();
            if distinct.len() < 2 {
                return Err(BatchError::TooNarrow {
                    len: candidates.len(),
                    distinct: distinct.len(),
                });
            }
        }

        // Pre-flight: the whole batch must pass before any commit begins.
        for (index, candidate) in candidates.iter().enumerate() {
            self.validate(candidate)
                .map_err(|source| BatchError::Rejected { index, source })?;
        }

        let mut committed: Vec<(usize, LoanId)> = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            let step = self
                .validate(candidate)
                .map_err(|source| BatchError::Rejected { index, source })
                .and_then(|()| {
                    self.store
                        .create(candidate)
                        .map_err(|source| BatchError::Store { index, source })
                });
            match step {
                Ok(id) => {
                    tracing::debug!(index, loan = %id, "batch candidate committed");
                    committed.push((index, id));
                }
                Err(error) => return Err(self.compensate(&committed, error)),
            }
        }

        Ok(committed.into_iter().map(|(_, id)| id).collect())
    }

    /// Delete every record committed before the failure, most recent first.
    /// Only records actually committed are touched, never the failing index
    /// itself. The first delete that fails is reported; the remaining
    /// deletes are still attempted.
    fn compensate(&mut self, committed: &[(usize, LoanId)], error: BatchError) -> BatchError {
        tracing::warn!(committed = committed.len(), %error, "batch aborted, rolling back");

        let mut failed_undo: Option<(usize, LoanId)> = None;
        for &(index, id) in committed.iter().rev() {
            if let Err(delete_error) = self.store.delete(id) {
                tracing::error!(index, loan = %id, %delete_error, "rollback delete failed");
                failed_undo.get_or_insert((index, id));
            }
        }

        match failed_undo {
            Some((undo_index, loan)) => BatchError::CompensationFailed {
                undo_index,
                loan,
                cause: Box::new(error),
            },
            None => error,
        }
    }
}
