use crate::model::{LimitsConfig, LoanguardConfigV1};
use loanguard_domain::policy::LendingLimits;
use loanguard_domain::Rule;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config is not valid TOML: {reason}")]
    Parse { reason: String },
    #[error("missing limit `{name}`")]
    MissingLimit { name: &'static str },
    #[error("unknown rule `{name}` in rule order")]
    UnknownRule { name: String },
}

/// Concrete engine inputs resolved from a parsed config.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPolicy {
    pub limits: LendingLimits,
    /// Engine rule order; the built-in order when the config omits it.
    pub rules: Vec<Rule>,
}

pub fn resolve_config(cfg: LoanguardConfigV1) -> Result<ResolvedPolicy, ConfigError> {
    let limits = resolve_limits(&cfg.limits)?;

    let rules = match cfg.rules {
        None => Rule::DEFAULT_ORDER.to_vec(),
        Some(names) => names
            .iter()
            .map(|name| {
                Rule::from_id(name).ok_or_else(|| ConfigError::UnknownRule { name: name.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(ResolvedPolicy { limits, rules })
}

fn resolve_limits(limits: &LimitsConfig) -> Result<LendingLimits, ConfigError> {
    Ok(LendingLimits {
        period_loan_cap: require("period_loan_cap", limits.period_loan_cap)?,
        period_days: require("period_days", limits.period_days)?,
        domain_loan_cap: require("domain_loan_cap", limits.domain_loan_cap)?,
        domain_window_months: require("domain_window_months", limits.domain_window_months)?,
        extension_budget_days: require("extension_budget_days", limits.extension_budget_days)?,
        reborrow_delay_days: require("reborrow_delay_days", limits.reborrow_delay_days)?,
        daily_loan_cap: require("daily_loan_cap", limits.daily_loan_cap)?,
        daily_issue_cap: require("daily_issue_cap", limits.daily_issue_cap)?,
        batch_size_cap: require("batch_size_cap", limits.batch_size_cap)?,
    })
}

/// A named threshold either resolves or fails by name.
fn require(name: &'static str, value: Option<u32>) -> Result<u32, ConfigError> {
    value.ok_or(ConfigError::MissingLimit { name })
}
