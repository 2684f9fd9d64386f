//! Ordered eligibility rules. Each rule is an independent predicate over the
//! candidate and the reader's history; the engine stops at the first denial.

use crate::denial::Denial;
use crate::history::HistoryQuery;
use crate::model::LoanRecord;
use crate::policy::LendingLimits;
use loanguard_types::ids;
use time::Date;

mod availability;
mod borrow_rate;
mod daily_cap;
mod domain_quota;
mod extension_budget;
mod issuer;
mod reborrow_delay;


/// One eligibility rule. The evaluation order is a plain slice so deployments
/// can reorder rules without touching the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Availability,
    BorrowRate,
    DomainQuota,
    ExtensionBudget,
    ReborrowDelay,
    DailyCap,
    Issuer,
}

impl Rule {
    /// Built-in order: availability first, then the history-aggregating
    /// limits, then the issuing side.
    pub const DEFAULT_ORDER: [Rule; 7] = [
        Rule::Availability,
        Rule::BorrowRate,
        Rule::DomainQuota,
        Rule::ExtensionBudget,
        Rule::ReborrowDelay,
        Rule::DailyCap,
        Rule::Issuer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Rule::Availability => ids::RULE_AVAILABILITY,
            Rule::BorrowRate => ids::RULE_BORROW_RATE,
            Rule::DomainQuota => ids::RULE_DOMAIN_QUOTA,
            Rule::ExtensionBudget => ids::RULE_EXTENSION_BUDGET,
            Rule::ReborrowDelay => ids::RULE_REBORROW_DELAY,
            Rule::DailyCap => ids::RULE_DAILY_CAP,
            Rule::Issuer => ids::RULE_ISSUER,
        }
    }

    pub fn from_id(id: &str) -> Option<Rule> {
        match id {
            ids::RULE_AVAILABILITY => Some(Rule::Availability),
            ids::RULE_BORROW_RATE => Some(Rule::BorrowRate),
            ids::RULE_DOMAIN_QUOTA => Some(Rule::DomainQuota),
            ids::RULE_EXTENSION_BUDGET => Some(Rule::ExtensionBudget),
            ids::RULE_REBORROW_DELAY => Some(Rule::ReborrowDelay),
            ids::RULE_DAILY_CAP => Some(Rule::DailyCap),
            ids::RULE_ISSUER => Some(Rule::Issuer),
            _ => None,
        }
    }
}

/// Everything a rule may consult for one candidate.
pub(crate) struct RuleContext<'a, H: ?Sized> {
    pub candidate: &'a LoanRecord,
    pub today: Date,
    pub limits: &'a LendingLimits,
    pub history: &'a H,
    /// 1 for readers, 2 for staff borrowing for themselves.
    pub multiplier: u32,
}

pub(crate) fn run<H: HistoryQuery + ?Sized>(
    rule: Rule,
    ctx: &RuleContext<'_, H>,
) -> Result<(), Denial> {
    match rule {
        Rule::Availability => availability::run(ctx),
        Rule::BorrowRate => borrow_rate::run(ctx),
        Rule::DomainQuota => domain_quota::run(ctx),
        Rule::ExtensionBudget => extension_budget::run(ctx),
        Rule::ReborrowDelay => reborrow_delay::run(ctx),
        Rule::DailyCap => daily_cap::run(ctx),
        Rule::Issuer => issuer::run(ctx),
    }
}
