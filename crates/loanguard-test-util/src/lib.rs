//! Shared test collaborators for the loanguard workspace.
//!
//! `MemoryLibrary` implements both collaborator contracts over one ledger:
//! cloned handles share state, so commits made through a store handle are
//! immediately visible to history queries through another handle. That is
//! exactly what batch re-validation needs to observe in tests.

#![forbid(unsafe_code)]

use loanguard_domain::history::{HistoryQuery, QueryError};
use loanguard_domain::model::{Book, Domain, Edition, LoanRecord, Person, Role};
use loanguard_domain::policy::LendingLimits;
use loanguard_domain::store::{LoanStore, StoreError};
use loanguard_types::{BookId, DomainId, EditionId, LoanId, PersonId};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use time::{Date, Duration};

#[derive(Debug, Default)]
struct Ledger {
    next_id: u64,
    loans: BTreeMap<LoanId, LoanRecord>,
}

/// In-memory loan store and history in one. `Clone` yields another handle to
/// the same ledger.
#[derive(Clone, Debug, Default)]
pub struct MemoryLibrary {
    ledger: Rc<RefCell<Ledger>>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert pre-existing history without going through validation.
    pub fn seed(&self, record: LoanRecord) -> LoanId {
        let mut ledger = self.ledger.borrow_mut();
        ledger.next_id += 1;
        let id = LoanId::new(ledger.next_id);
        ledger.loans.insert(id, record);
        id
    }

    pub fn loan_count(&self) -> usize {
        self.ledger.borrow().loans.len()
    }

    pub fn contains(&self, id: LoanId) -> bool {
        self.ledger.borrow().loans.contains_key(&id)
    }
}

impl LoanStore for MemoryLibrary {
    fn create(&mut self, record: &LoanRecord) -> Result<LoanId, StoreError> {
        Ok(self.seed(record.clone()))
    }

    fn delete(&mut self, id: LoanId) -> Result<(), StoreError> {
        self.ledger
            .borrow_mut()
            .loans
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn read(&self, id: LoanId) -> Result<LoanRecord, StoreError> {
        self.ledger
            .borrow()
            .loans
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}

impl HistoryQuery for MemoryLibrary {
    fn active_by_edition(&self, edition: EditionId) -> Result<u32, QueryError> {
        Ok(self.count(|l| l.edition.id == edition && l.is_active()))
    }

    fn borrows_since(&self, reader: PersonId, since: Date) -> Result<u32, QueryError> {
        Ok(self.count(|l| l.reader.id == reader && l.borrow_date >= since))
    }

    fn borrows_in_domain_since(
        &self,
        reader: PersonId,
        domain: DomainId,
        since: Date,
    ) -> Result<u32, QueryError> {
        Ok(self.count(|l| {
            l.reader.id == reader && l.borrow_date >= since && l.edition.book.domains.contains(&domain)
        }))
    }

    fn extension_deltas_since(
        &self,
        reader: PersonId,
        since: Date,
    ) -> Result<Vec<i64>, QueryError> {
        Ok(self
            .ledger
            .borrow()
            .loans
            .values()
            .filter(|l| l.reader.id == reader && l.borrow_date >= since)
            .map(LoanRecord::extension_days)
            .collect())
    }

    fn borrows_of_edition_since(
        &self,
        reader: PersonId,
        edition: EditionId,
        since: Date,
    ) -> Result<u32, QueryError> {
        Ok(self.count(|l| {
            l.reader.id == reader && l.edition.id == edition && l.borrow_date >= since
        }))
    }

    fn borrows_on(&self, reader: PersonId, day: Date) -> Result<u32, QueryError> {
        Ok(self.count(|l| l.reader.id == reader && l.borrow_date == day))
    }

    fn issued_on(&self, staff: PersonId, day: Date) -> Result<u32, QueryError> {
        Ok(self.count(|l| l.staff.id == staff && l.borrow_date == day))
    }
}

impl MemoryLibrary {
    fn count(&self, pred: impl Fn(&LoanRecord) -> bool) -> u32 {
        self.ledger.borrow().loans.values().filter(|l| pred(l)).count() as u32
    }
}

/// Store wrapper that fails on cue, for exercising rollback paths.
#[derive(Clone, Debug)]
pub struct UnreliableStore {
    inner: MemoryLibrary,
    fail_create_at: Option<u32>,
    fail_deletes: bool,
    creates: u32,
}

impl UnreliableStore {
    pub fn new(inner: MemoryLibrary) -> Self {
        Self {
            inner,
            fail_create_at: None,
            fail_deletes: false,
            creates: 0,
        }
    }

    /// Fail the nth `create` call (zero-based); earlier and later calls
    /// succeed.
    pub fn fail_create_at(mut self, nth: u32) -> Self {
        self.fail_create_at = Some(nth);
        self
    }

    /// Fail every `delete` call.
    pub fn fail_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }
}

impl LoanStore for UnreliableStore {
    fn create(&mut self, record: &LoanRecord) -> Result<LoanId, StoreError> {
        let call = self.creates;
        self.creates += 1;
        if Some(call) == self.fail_create_at {
            return Err(StoreError::Backend {
                reason: "injected create failure".to_string(),
            });
        }
        self.inner.create(record)
    }

    fn delete(&mut self, id: LoanId) -> Result<(), StoreError> {
        if self.fail_deletes {
            return Err(StoreError::Backend {
                reason: "injected delete failure".to_string(),
            });
        }
        self.inner.delete(id)
    }

    fn read(&self, id: LoanId) -> Result<LoanRecord, StoreError> {
        self.inner.read(id)
    }
}

// Fixture builders shared across workspace tests.

pub fn reader(id: u64) -> Person {
    Person {
        id: PersonId::new(id),
        role: Role::Reader,
    }
}

pub fn staff(id: u64) -> Person {
    Person {
        id: PersonId::new(id),
        role: Role::Staff,
    }
}

pub fn domain(id: u64, name: &str) -> Domain {
    Domain {
        id: DomainId::new(id),
        name: name.to_string(),
        parent: None,
    }
}

pub fn book(id: u64, domains: &[&Domain]) -> Book {
    Book {
        id: BookId::new(id),
        domains: domains.iter().map(|d| d.id).collect(),
    }
}

pub fn edition(id: u64, book: Book, can_borrow: u32, can_not_borrow: u32) -> Edition {
    Edition {
        id: EditionId::new(id),
        book,
        can_borrow,
        can_not_borrow,
    }
}

/// A candidate borrowed on `day` for the standard two weeks.
pub fn candidate_on(day: Date, reader: Person, staff: Person, edition: Edition) -> LoanRecord {
    LoanRecord {
        reader,
        staff,
        edition,
        borrow_date: day,
        due_date: day + Duration::days(14),
        returned_date: None,
    }
}

/// The thresholds most workspace tests run with.
pub fn standard_limits() -> LendingLimits {
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
