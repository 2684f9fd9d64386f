use super::RuleContext;
use crate::dates;
use crate::denial::Denial;
use crate::history::HistoryQuery;

/// Lookback for accrued extension days.
const LOOKBACK_MONTHS: u32 = 3;

/// Extension-overrun limit. Only candidates that are themselves extended
/// consume the budget; deltas from standard and shorter loans are zero or
/// negative and pay it back.
pub(super) fn run<H: HistoryQuery + ?Sized>(ctx: &RuleContext<'_, H>) -> Result<(), Denial> {
    if !ctx.candidate.is_extended() {
        return Ok(());
    }

    let since = dates::months_back(ctx.today, LOOKBACK_MONTHS);
    let deltas = ctx
        .history
        .extension_deltas_since(ctx.candidate.reader.id, since)?;
    let accrued: i64 = deltas.iter().sum();
    let budget = i64::from(ctx.limits.extension_budget_days) * i64::from(ctx.multiplier);
    if accrued >= budget {
        return Err(Denial::ExtensionBudgetExhausted {
            accrued,
            budget,
            since,
        });
    }
    Ok(())
}
