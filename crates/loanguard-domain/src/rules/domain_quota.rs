use super::RuleContext;
use crate::dates;
use crate::denial::Denial;
use crate::history::HistoryQuery;

/// Per-domain limit over every domain attached to the candidate edition's
/// book. The window is calendar months and never scales with the role
/// multiplier; the cap does.
pub(super) fn run<H: HistoryQuery + ?Sized>(ctx: &RuleContext<'_, H>) -> Result<(), Denial> {
    let since = dates::months_back(ctx.today, ctx.limits.domain_window_months);
    let cap = ctx.limits.domain_loan_cap * ctx.multiplier;

    for &domain in &ctx.candidate.edition.book.domains {
        let count = ctx
            .history
            .borrows_in_domain_since(ctx.candidate.reader.id, domain, since)?;
        if count >= cap {
            return Err(Denial::DomainQuotaReached {
                domain,
                count,
                cap,
                since,
            });
        }
    }
    Ok(())
}
