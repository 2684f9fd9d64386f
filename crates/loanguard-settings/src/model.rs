use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `loanguard.toml` schema v1.
///
/// This is a *user-facing* config model: every threshold is optional at parse
/// time so forward-compat is easy; resolution decides what is mandatory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LoanguardConfigV1 {
    /// Optional schema string for tooling (`loanguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Rule evaluation order by rule id. Omitted means the built-in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,

    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Named integer thresholds consumed by the engine. Every limit the engine
/// reads must be present; resolution fails by name otherwise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LimitsConfig {
    /// Max loans per reader inside the rolling period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_loan_cap: Option<u32>,

    /// Rolling period length in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_days: Option<u32>,

    /// Max loans per attached domain inside the domain window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_loan_cap: Option<u32>,

    /// Domain window length in calendar months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_window_months: Option<u32>,

    /// Cumulative extension-day budget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_budget_days: Option<u32>,

    /// Days before the same edition may be borrowed again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reborrow_delay_days: Option<u32>,

    /// Max loans per reader per calendar day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_loan_cap: Option<u32>,

    /// Max loans a staff member may issue per calendar day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_issue_cap: Option<u32>,

    /// Max candidates in one batch transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size_cap: Option<u32>,
}
