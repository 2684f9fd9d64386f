//! Per-record date-order invariants shared by every borrow candidate.
//!
//! Complements the generic required/length checks owned by the surrounding
//! validation layer; it does not replace them.

use crate::model::LoanRecord;
use thiserror::Error;
use time::Date;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    #[error("due date {due} precedes borrow date {borrow}")]
    DueBeforeBorrow { borrow: Date, due: Date },
    #[error("return date {returned} precedes borrow date {borrow}")]
    ReturnedBeforeBorrow { borrow: Date, returned: Date },
}

/// Date-order gate. A record without a return date is always valid on the
/// return axis. No side effects.
pub fn validate(record: &LoanRecord) -> Result<(), StructuralError> {
    if record.borrow_date > record.due_date {
        return Err(StructuralError::DueBeforeBorrow {
            borrow: record.borrow_date,
            due: record.due_date,
        });
    }
    if let Some(returned) = record.returned_date
        && record.borrow_date > returned
    {
        return Err(StructuralError::ReturnedBeforeBorrow {
            borrow: record.borrow_date,
            returned,
        });
    }
    Ok(())
}
