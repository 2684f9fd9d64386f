use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// A person, whether borrowing or issuing. Owned by external person
    /// management.
    PersonId
);

id_type!(
    /// A hierarchical category attached to books.
    DomainId
);

id_type!(
    /// A published work; carries the attached domains.
    BookId
);

id_type!(
    /// A circulating version of a book with finite copy counts.
    EditionId
);

id_type!(
    /// A committed borrow record. Assigned by the store on create.
    LoanId
);
