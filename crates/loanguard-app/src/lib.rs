//! Borrow use cases: validate-then-commit for single candidates and batches.
//!
//! The desk glues the pure engine to the store and history collaborators. No
//! lock covers the gap between validation and commit; the race is accepted
//! and documented on the engine, and batch compensation is best-effort
//! because the store offers no multi-record transaction.

#![forbid(unsafe_code)]

mod batch;
mod desk;

pub use batch::BatchError;
pub use desk::{BorrowError, LendingDesk};
