use loanguard_domain::history::HistoryQuery;
use loanguard_domain::model::LoanRecord;
use loanguard_domain::policy::LendingLimits;
use loanguard_domain::store::{LoanStore, StoreError};
use loanguard_domain::{evaluate_with_rules, Denial, Rule};
use loanguard_types::LoanId;
use thiserror::Error;
use time::Date;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BorrowError {
    #[error("candidate rejected: {0}")]
    Rejected(#[from] Denial),
    #[error("loan could not be stored: {0}")]
    Store(#[from] StoreError),
}

/// One lending desk call site: the engine plus its collaborators, pinned to
/// an explicit `today`.
pub struct LendingDesk<'a, H: ?Sized, S: ?Sized> {
    pub(crate) today: Date,
    pub(crate) limits: &'a LendingLimits,
    pub(crate) rules: &'a [Rule],
    pub(crate) history: &'a H,
    pub(crate) store: &'a mut S,
}

impl<'a, H, S> LendingDesk<'a, H, S>
where
    H: HistoryQuery + ?Sized,
    S: LoanStore + ?Sized,
{
    pub fn new(today: Date, limits: &'a LendingLimits, history: &'a H, store: &'a mut S) -> Self {
        Self {
            today,
            limits,
            rules: &Rule::DEFAULT_ORDER,
            history,
            store,
        }
    }

    /// Replace the built-in rule order.
    pub fn with_rules(mut self, rules: &'a [Rule]) -> Self {
        self.rules = rules;
        self
    }

    pub(crate) fn validate(&self, candidate: &LoanRecord) -> Result<(), Denial> {
        evaluate_with_rules(candidate, self.today, self.limits, self.history, self.rules)
    }

    /// Validate one candidate and commit it.
    pub fn borrow_one(&mut self, candidate: &LoanRecord) -> Result<LoanId, BorrowError> {
        self.validate(candidate)?;
        let id = self.store.create(candidate)?;
        tracing::debug!(loan = %id, reader = %candidate.reader.id, "loan committed");
        Ok(id)
    }
}
