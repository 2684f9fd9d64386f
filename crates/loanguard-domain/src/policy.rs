/// Externally configured integer thresholds consumed by the rules.
///
/// Limits are an explicit value handed to the engine per call; there is no
/// process-wide policy state, so evaluation is deterministic under injected
/// configurations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LendingLimits {
    /// Max loans per reader inside the rolling period (cap scales with the
    /// role multiplier).
    pub period_loan_cap: u32,
    /// Rolling period length in days (window shrinks by the multiplier).
    pub period_days: u32,
    /// Max loans per attached domain inside the domain window.
    pub domain_loan_cap: u32,
    /// Domain window length in calendar months. Never scaled.
    pub domain_window_months: u32,
    /// Cumulative extension-day budget inside the three-month lookback.
    pub extension_budget_days: u32,
    /// Days before the same reader may borrow the same edition again.
    pub reborrow_delay_days: u32,
    /// Max loans per reader per calendar day. Staff borrowers are exempt.
    pub daily_loan_cap: u32,
    /// Max loans a staff member may issue per calendar day.
    pub daily_issue_cap: u32,
    /// Max candidates in one batch transaction (scales with the multiplier).
    pub batch_size_cap: u32,
}
