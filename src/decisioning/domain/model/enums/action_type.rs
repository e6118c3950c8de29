use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    OutboundEmail,
    TaskCreate,
    OutboundSms,
    OutboundVoice,
    BlockDiscount,
    RequireOverride,
    UpsellTrigger,
    RenewalNudge,
    NoOp,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutboundEmail => "outbound_email",
            Self::TaskCreate => "task_create",
            Self::OutboundSms => "outbound_sms",
            Self::OutboundVoice => "outbound_voice",
            Self::BlockDiscount => "block_discount",
            Self::RequireOverride => "require_override",
            Self::UpsellTrigger => "upsell_trigger",
            Self::RenewalNudge => "renewal_nudge",
            Self::NoOp => "no_op",
        }
    }
}
