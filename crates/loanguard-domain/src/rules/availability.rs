use super::RuleContext;
use crate::denial::Denial;
use crate::history::HistoryQuery;

/// Scarcity margin: a loan is granted only while the free share of the
/// edition's circulating copies exceeds 10% of total stock, not merely while
/// a copy is free.
pub(super) fn run<H: HistoryQuery + ?Sized>(ctx: &RuleContext<'_, H>) -> Result<(), Denial> {
    let edition = &ctx.candidate.edition;
    let active = ctx.history.active_by_edition(edition.id)?;

    let free = i64::from(edition.can_borrow) - i64::from(active);
    let stock = i64::from(edition.can_borrow) + i64::from(edition.can_not_borrow);
    if free * 10 > stock {
        return Ok(());
    }
    Err(Denial::NoAvailability {
        edition: edition.id,
        active,
        can_borrow: edition.can_borrow,
    })
}
