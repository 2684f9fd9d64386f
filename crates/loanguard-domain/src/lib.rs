//! Pure borrowing-eligibility evaluation (no I/O).
//!
//! Input: a borrow candidate, resolved policy limits, and a live history
//! collaborator. Output: ok, or the first failing rule as a typed denial.
//!
//! Nothing here locks between a check and a later commit. Concurrent callers
//! acting on the same reader, staff member, or edition can race past the
//! aggregate checks; callers that need strict consistency must serialize
//! externally (one call in flight per edition id and per reader id).

#![forbid(unsafe_code)]

pub mod dates;
pub mod denial;
pub mod history;
pub mod model;
pub mod policy;
pub mod rules;
pub mod store;
pub mod structural;

mod engine;

#[cfg(test)]
mod properties;
#[cfg(test)]
pub(crate) mod test_support;

pub use denial::Denial;
pub use engine::{evaluate, evaluate_with_rules};
pub use rules::Rule;
