use super::RuleContext;
use crate::denial::Denial;
use crate::history::HistoryQuery;
use crate::model::Role;

/// The issuing side of the candidate: only staff may issue loans, and each
/// staff member has a per-day issue cap.
pub(super) fn run<H: HistoryQuery + ?Sized>(ctx: &RuleContext<'_, H>) -> Result<(), Denial> {
    let staff = &ctx.candidate.staff;
    if staff.role != Role::Staff {
        return Err(Denial::IssuerNotStaff { person: staff.id });
    }

    let count = ctx.history.issued_on(staff.id, ctx.today)?;
    if count >= ctx.limits.daily_issue_cap {
        return Err(Denial::IssuerDailyCapReached {
            count,
            cap: ctx.limits.daily_issue_cap,
        });
    }
    Ok(())
}
