use crate::denial::Denial;
use crate::history::HistoryQuery;
use crate::model::LoanRecord;
use crate::policy::LendingLimits;
use crate::rules::{self, Rule, RuleContext};
use crate::structural;
use time::Date;

/// Validate one borrow candidate with the built-in rule order.
///
/// Read-only: aggregates are re-queried on every call and nothing is cached,
/// so the same candidate against unchanged history yields the same verdict.
/// `today` is an explicit argument; the engine has no hidden clock.
pub fn evaluate<H: HistoryQuery + ?Sized>(
    candidate: &LoanRecord,
    today: Date,
    limits: &LendingLimits,
    history: &H,
) -> Result<(), Denial> {
    evaluate_with_rules(candidate, today, limits, history, &Rule::DEFAULT_ORDER)
}

/// Validate with an explicit rule order. The date-order gate always runs
/// first; after that the first failing rule in `order` is returned.
pub fn evaluate_with_rules<H: HistoryQuery + ?Sized>(
    candidate: &LoanRecord,
    today: Date,
    limits: &LendingLimits,
    history: &H,
    order: &[Rule],
) -> Result<(), Denial> {
    structural::validate(candidate)?;

    let ctx = RuleContext {
        candidate,
        today,
        limits,
        history,
        multiplier: candidate.reader.role.threshold_multiplier(),
    };
    for &rule in order {
        rules::run(rule, &ctx)?;
    }
    Ok(())
}
