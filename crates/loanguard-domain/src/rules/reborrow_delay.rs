use super::RuleContext;
use crate::dates;
use crate::denial::Denial;
use crate::history::HistoryQuery;

/// Recency limit: the same reader may not take the same edition again until
/// the delay has passed. The delay shrinks for staff borrowers.
pub(super) fn run<H: HistoryQuery + ?Sized>(ctx: &RuleContext<'_, H>) -> Result<(), Denial> {
    let since = dates::days_back(ctx.today, ctx.limits.reborrow_delay_days / ctx.multiplier);
    let count = ctx.history.borrows_of_edition_since(
        ctx.candidate.reader.id,
        ctx.candidate.edition.id,
        since,
    )?;
    if count > 0 {
        return Err(Denial::ReborrowTooSoon {
            edition: ctx.candidate.edition.id,
            since,
        });
    }
    Ok(())
}
