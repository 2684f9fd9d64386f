use loanguard_types::{BookId, DomainId, EditionId, PersonId};
use time::Date;

/// Standard loan length in days. Anything longer is an extended loan.
pub const STANDARD_LOAN_DAYS: i64 = 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Reader,
    Staff,
}

impl Role {
    /// Factor applied to per-period thresholds when the borrowing party is
    /// staff: caps double, rolling windows shrink by the same factor.
    pub const fn threshold_multiplier(self) -> u32 {
        match self {
            Role::Reader => 1,
            Role::Staff => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub role: Role,
}

/// Category attached to books. Domains form a forest: each has at most one
/// parent, and walking parents reaches a root. Owned externally; the engine
/// only reads attached ids and never walks to roots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    pub id: DomainId,
    pub name: String,
    pub parent: Option<DomainId>,
}

impl Domain {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    /// Attached domains, typically from several category trees. Non-empty in
    /// practice.
    pub domains: Vec<DomainId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edition {
    pub id: EditionId,
    pub book: Book,
    /// Copies allowed to circulate.
    pub can_borrow: u32,
    /// Copies held back, e.g. reference-only.
    pub can_not_borrow: u32,
}

/// One borrow, committed or candidate. The engine creates records and reads
/// history; the return workflow that sets `returned_date` lives elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanRecord {
    pub reader: Person,
    pub staff: Person,
    pub edition: Edition,
    pub borrow_date: Date,
    pub due_date: Date,
    pub returned_date: Option<Date>,
}

impl LoanRecord {
    pub fn is_active(&self) -> bool {
        self.returned_date.is_none()
    }

    /// Loan length beyond the standard period, in days. Negative for loans
    /// shorter than the standard period.
    pub fn extension_days(&self) -> i64 {
        (self.due_date - self.borrow_date).whole_days() - STANDARD_LOAN_DAYS
    }

    pub fn is_extended(&self) -> bool {
        self.extension_days() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{book, domain, edition, reader, staff, subdomain, TODAY};
    use time::Duration;

    #[test]
    fn extension_days_measure_length_beyond_standard() {
        let fiction = domain(1, "Fiction");
        let record = LoanRecord {
            reader: reader(1),
            staff: staff(2),
            edition: edition(1, book(1, &[&fiction]), 5, 0),
            borrow_date: TODAY,
            due_date: TODAY + Duration::days(21),
            returned_date: None,
        };
        assert_eq!(record.extension_days(), 7);
        assert!(record.is_extended());

        let short = LoanRecord {
            due_date: TODAY + Duration::days(7),
            ..record.clone()
        };
        assert_eq!(short.extension_days(), -7);
        assert!(!short.is_extended());

        let standard = LoanRecord {
            due_date: TODAY + Duration::days(STANDARD_LOAN_DAYS),
            ..record
        };
        assert!(!standard.is_extended());
    }

    #[test]
    fn domains_form_a_forest() {
        let root = domain(1, "Science");
        let leaf = subdomain(2, "Physics", &root);
        assert!(root.is_root());
        assert!(!leaf.is_root());
        assert_eq!(leaf.parent, Some(root.id));
    }
}
