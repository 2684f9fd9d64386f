use super::RuleContext;
use crate::denial::Denial;
use crate::history::HistoryQuery;
use crate::model::Role;

/// Daily reader cap. Staff borrowing for themselves are exempt entirely; the
/// cap is not multiplied.
pub(super) fn run<H: HistoryQuery + ?Sized>(ctx: &RuleContext<'_, H>) -> Result<(), Denial> {
    if ctx.candidate.reader.role == Role::Staff {
        return Ok(());
    }

    let count = ctx.history.borrows_on(ctx.candidate.reader.id, ctx.today)?;
    if count >= ctx.limits.daily_loan_cap {
        return Err(Denial::DailyCapReached {
            count,
            cap: ctx.limits.daily_loan_cap,
        });
    }
    Ok(())
}
