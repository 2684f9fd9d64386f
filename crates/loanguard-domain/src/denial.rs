//! Why a borrow candidate was refused.

use crate::history::QueryError;
use crate::structural::StructuralError;
use loanguard_types::{ids, DomainId, EditionId, PersonId};
use thiserror::Error;
use time::Date;

/// The first failing check for a candidate. The rules are independent
/// predicates, so evaluation order only affects which single denial
/// surfaces, not the overall accept/reject outcome.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Denial {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("edition {edition}: {active} of {can_borrow} circulating copies out, margin exhausted")]
    NoAvailability {
        edition: EditionId,
        active: u32,
        can_borrow: u32,
    },

    #[error("{count} loans since {since} reaches the cap of {cap}")]
    BorrowRateExceeded { count: u32, cap: u32, since: Date },

    #[error("domain {domain}: {count} loans since {since} reaches the cap of {cap}")]
    DomainQuotaReached {
        domain: DomainId,
        count: u32,
        cap: u32,
        since: Date,
    },

    #[error("{accrued} extension days accrued since {since} reaches the budget of {budget}")]
    ExtensionBudgetExhausted {
        accrued: i64,
        budget: i64,
        since: Date,
    },

    #[error("edition {edition} already borrowed by this reader since {since}")]
    ReborrowTooSoon { edition: EditionId, since: Date },

    #[error("{count} loans today reaches the daily cap of {cap}")]
    DailyCapReached { count: u32, cap: u32 },

    #[error("person {person} lacks the staff role required to issue loans")]
    IssuerNotStaff { person: PersonId },

    #[error("{count} loans issued today reaches the issuer cap of {cap}")]
    IssuerDailyCapReached { count: u32, cap: u32 },

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl Denial {
    /// Stable code for logs and external reporting.
    pub fn code(&self) -> &'static str {
        match self {
            Denial::Structural(_) => ids::CODE_DATE_ORDER,
            Denial::NoAvailability { .. } => ids::CODE_NO_AVAILABILITY,
            Denial::BorrowRateExceeded { .. } => ids::CODE_BORROW_RATE,
            Denial::DomainQuotaReached { .. } => ids::CODE_DOMAIN_QUOTA,
            Denial::ExtensionBudgetExhausted { .. } => ids::CODE_EXTENSION_BUDGET,
            Denial::ReborrowTooSoon { .. } => ids::CODE_REBORROW_TOO_SOON,
            Denial::DailyCapReached { .. } => ids::CODE_DAILY_CAP,
            Denial::IssuerNotStaff { .. } => ids::CODE_ISSUER_NOT_STAFF,
            Denial::IssuerDailyCapReached { .. } => ids::CODE_ISSUER_DAILY_CAP,
            Denial::Query(_) => ids::CODE_HISTORY_UNAVAILABLE,
        }
    }

    /// True when the denial stems from a failing collaborator rather than a
    /// policy rule. Callers may retry these; rule denials are final until
    /// history changes.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Denial::Query(_))
    }
}
