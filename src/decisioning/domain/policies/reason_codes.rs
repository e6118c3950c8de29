pub const LEAD_WELCOME_EMAIL: &str = "lead_welcome_email";
pub const LEAD_FOLLOW_UP_TASK: &str = "lead_follow_up_task";

pub const DISCOUNT_WITHIN_THRESHOLD: &str = "discount_within_threshold";
pub const DISCOUNT_REQUIRES_OVERRIDE: &str = "discount_requires_override";
pub const DISCOUNT_BLOCKED: &str = "discount_blocked";

pub const DEAL_CLOSE_OK: &str = "deal_close_ok";
pub const DEAL_CLOSE_ZERO_VALUE: &str = "deal_close_zero_value";

pub const RENEWAL_NUDGE_DUE: &str = "renewal_nudge_due";

pub const ACTION_NOT_IMPLEMENTED: &str = "action_not_implemented";
