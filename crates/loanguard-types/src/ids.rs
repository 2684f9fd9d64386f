//! Stable identifiers for eligibility rules and denial codes.
//!
//! Rule ids double as the names accepted in the configured rule order. Codes
//! are short snake_case discriminators for logs and external reporting.

// Rules (evaluation order is configurable)
pub const RULE_AVAILABILITY: &str = "availability";
pub const RULE_BORROW_RATE: &str = "borrow_rate";
pub const RULE_DOMAIN_QUOTA: &str = "domain_quota";
pub const RULE_EXTENSION_BUDGET: &str = "extension_budget";
pub const RULE_REBORROW_DELAY: &str = "reborrow_delay";
pub const RULE_DAILY_CAP: &str = "daily_cap";
pub const RULE_ISSUER: &str = "issuer";

// Denial codes
pub const CODE_DATE_ORDER: &str = "date_order";
pub const CODE_NO_AVAILABILITY: &str = "no_availability";
pub const CODE_BORROW_RATE: &str = "borrow_rate_exceeded";
pub const CODE_DOMAIN_QUOTA: &str = "domain_quota_reached";
pub const CODE_EXTENSION_BUDGET: &str = "extension_budget_exhausted";
pub const CODE_REBORROW_TOO_SOON: &str = "reborrow_too_soon";
pub const CODE_DAILY_CAP: &str = "daily_cap_reached";
pub const CODE_ISSUER_NOT_STAFF: &str = "issuer_not_staff";
pub const CODE_ISSUER_DAILY_CAP: &str = "issuer_daily_cap_reached";
pub const CODE_HISTORY_UNAVAILABLE: &str = "history_unavailable";
