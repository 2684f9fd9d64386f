use super::RuleContext;
use crate::dates;
use crate::denial::Denial;
use crate::history::HistoryQuery;

/// Rolling borrow-count limit. For staff borrowers the window shrinks while
/// the cap doubles.
pub(super) fn run<H: HistoryQuery + ?Sized>(ctx: &RuleContext<'_, H>) -> Result<(), Denial> {
    let since = dates::days_back(ctx.today, ctx.limits.period_days / ctx.multiplier);
    let count = ctx.history.borrows_since(ctx.candidate.reader.id, since)?;
    let cap = ctx.limits.period_loan_cap * ctx.multiplier;
    if count >= cap {
        return Err(Denial::BorrowRateExceeded { count, cap, since });
    }
    Ok(())
}
