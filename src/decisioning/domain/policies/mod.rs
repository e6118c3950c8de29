pub mod deal_close_guard_policy;
pub mod discount_guard_policy;
pub mod lead_response_policy;
pub mod reason_codes;
pub mod renewal_nudge_policy;

use crate::decisioning::domain::{
    model::{
        entities::{business_event::BusinessEvent, policy_decision::PolicyDecision},
        enums::decisioning_domain_error::DecisioningDomainError,
    },
    services::runtime_context::RuntimeContext,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegisteredPolicy {
    LeadResponse,
    DiscountGuard,
    DealCloseGuard,
    RenewalNudge,
}

impl RegisteredPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeadResponse => lead_response_policy::POLICY_NAME,
            Self::DiscountGuard => discount_guard_policy::POLICY_NAME,
            Self::DealCloseGuard => deal_close_guard_policy::POLICY_NAME,
            Self::RenewalNudge => renewal_nudge_policy::POLICY_NAME,
        }
    }

    pub fn matches(&self, event: &BusinessEvent) -> bool {
        match self {
            Self::LeadResponse => lead_response_policy::matches(event),
            Self::DiscountGuard => discount_guard_policy::matches(event),
            Self::DealCloseGuard => deal_close_guard_policy::matches(event),
            Self::RenewalNudge => renewal_nudge_policy::matches(event),
        }
    }

    pub fn evaluate(
        &self,
        event: &BusinessEvent,
        ctx: &RuntimeContext,
    ) -> Result<Vec<PolicyDecision>, DecisioningDomainError> {
        match self {
            Self::LeadResponse => lead_response_policy::evaluate(event, ctx),
            Self::DiscountGuard => discount_guard_policy::evaluate(event),
            Self::DealCloseGuard => deal_close_guard_policy::evaluate(event),
            Self::RenewalNudge => renewal_nudge_policy::evaluate(event),
        }
    }
}

pub struct PolicyRegistry;

impl PolicyRegistry {
    pub fn all() -> &'static [RegisteredPolicy] {
        &[
            RegisteredPolicy::LeadResponse,
            RegisteredPolicy::DiscountGuard,
            RegisteredPolicy::DealCloseGuard,
            RegisteredPolicy::RenewalNudge,
        ]
    }
}
