//! Fixture helpers shared by the rule, engine, and property tests.

use crate::history::{HistoryQuery, QueryError};
use crate::model::{Book, Domain, Edition, LoanRecord, Person, Role};
use crate::policy::LendingLimits;
use loanguard_types::{BookId, DomainId, EditionId, PersonId};
use std::cell::RefCell;
use std::collections::BTreeMap;
use time::macros::date;
use time::{Date, Duration};

pub(crate) const TODAY: Date = date!(2025 - 06 - 15);

pub(crate) fn reader(id: u64) -> Person {
    Person {
        id: PersonId::new(id),
        role: Role::Reader,
    }
}

pub(crate) fn staff(id: u64) -> Person {
    Person {
        id: PersonId::new(id),
        role: Role::Staff,
    }
}

pub(crate) fn domain(id: u64, name: &str) -> Domain {
    Domain {
        id: DomainId::new(id),
        name: name.to_string(),
        parent: None,
    }
}

pub(crate) fn subdomain(id: u64, name: &str, parent: &Domain) -> Domain {
    Domain {
        id: DomainId::new(id),
        name: name.to_string(),
        parent: Some(parent.id),
    }
}

pub(crate) fn book(id: u64, domains: &[&Domain]) -> Book {
    Book {
        id: BookId::new(id),
        domains: domains.iter().map(|d| d.id).collect(),
    }
}

pub(crate) fn edition(id: u64, book: Book, can_borrow: u32, can_not_borrow: u32) -> Edition {
    Edition {
        id: EditionId::new(id),
        book,
        can_borrow,
        can_not_borrow,
    }
}

/// A fresh candidate borrowed today for the standard two weeks.
pub(crate) fn candidate(reader: Person, staff: Person, edition: Edition) -> LoanRecord {
    LoanRecord {
        reader,
        staff,
        edition,
        borrow_date: TODAY,
        due_date: TODAY + Duration::days(14),
        returned_date: None,
    }
}

pub(crate) fn limits() -> LendingLimits {
    LendingLimits {
        period_loan_cap: 3,
        period_days: 30,
        domain_loan_cap: 4,
        domain_window_months: 6,
        extension_budget_days: 21,
        reborrow_delay_days: 45,
        daily_loan_cap: 2,
        daily_issue_cap: 40,
        batch_size_cap: 3,
    }
}

/// Canned aggregates with recorded query windows, so tests can assert both
/// verdicts and the windows the rules computed.
#[derive(Debug, Default)]
pub(crate) struct StubHistory {
    pub active: u32,
    pub in_period: u32,
    pub per_domain: BTreeMap<DomainId, u32>,
    pub deltas: Vec<i64>,
    pub of_edition: u32,
    pub today_count: u32,
    pub issued_count: u32,
    /// When set, every query fails with this reason.
    pub fail_with: Option<String>,
    pub windows: RefCell<Vec<(&'static str, Date)>>,
}

impl StubHistory {
    fn check(&self) -> Result<(), QueryError> {
        match &self.fail_with {
            Some(reason) => Err(QueryError::new(reason.clone())),
            None => Ok(()),
        }
    }

    fn record(&self, method: &'static str, since: Date) {
        self.windows.borrow_mut().push((method, since));
    }

    /// The `since` argument the named query was last called with.
    pub fn window_for(&self, method: &str) -> Option<Date> {
        self.windows
            .borrow()
            .iter()
            .rev()
            .find(|(m, _)| *m == method)
            .map(|(_, since)| *since)
    }
}

impl HistoryQuery for StubHistory {
    fn active_by_edition(&self, _edition: EditionId) -> Result<u32, QueryError> {
        self.check()?;
        Ok(self.active)
    }

    fn borrows_since(&self, _reader: PersonId, since: Date) -> Result<u32, QueryError> {
        self.check()?;
        self.record("borrows_since", since);
        Ok(self.in_period)
    }

    fn borrows_in_domain_since(
        &self,
        _reader: PersonId,
        domain: DomainId,
        since: Date,
    ) -> Result<u32, QueryError> {
        self.check()?;
        self.record("borrows_in_domain_since", since);
        Ok(self.per_domain.get(&domain).copied().unwrap_or(0))
    }

    fn extension_deltas_since(
        &self,
        _reader: PersonId,
        since: Date,
    ) -> Result<Vec<i64>, QueryError> {
        self.check()?;
        self.record("extension_deltas_since", since);
        Ok(self.deltas.clone())
    }

    fn borrows_of_edition_since(
        &self,
        _reader: PersonId,
        _edition: EditionId,
        since: Date,
    ) -> Result<u32, QueryError> {
        self.check()?;
        self.record("borrows_of_edition_since", since);
        Ok(self.of_edition)
    }

    fn borrows_on(&self, _reader: PersonId, day: Date) -> Result<u32, QueryError> {
        self.check()?;
        self.record("borrows_on", day);
        Ok(self.today_count)
    }

    fn issued_on(&self, _staff: PersonId, day: Date) -> Result<u32, QueryError> {
        self.check()?;
        self.record("issued_on", day);
        Ok(self.issued_count)
    }
}
