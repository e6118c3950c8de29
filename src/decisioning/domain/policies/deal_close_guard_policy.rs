use crate::decisioning::domain::{
    model::{
        entities::{
            business_event::BusinessEvent,
            guard_verdict::GuardVerdict,
            policy_decision::{DecisionBody, PolicyDecision},
        },
        enums::decisioning_domain_error::DecisioningDomainError,
    },
    policies::reason_codes,
};

pub const POLICY_NAME: &str = "deal_close_guard";

pub fn matches(event: &BusinessEvent) -> bool {
    event.event_type.value() == "deal_stage_changed"
}

pub fn evaluate(event: &BusinessEvent) -> Result<Vec<PolicyDecision>, DecisioningDomainError> {
    if event.payload_str("stage") != Some("closed_won") {
        return Ok(Vec::new());
    }

    let deal_value = event.payload_f64("deal_value").ok_or_else(|| {
        DecisioningDomainError::PolicyEvaluation(
            "deal_stage_changed payload missing deal_value".to_string(),
        )
    })?;

    let verdict = if deal_value > 0.0 {
        GuardVerdict::allow(
            reason_codes::DEAL_CLOSE_OK,
            "deal closed with a positive value",
        )
    } else {
        GuardVerdict::allow_with_override(
            reason_codes::DEAL_CLOSE_ZERO_VALUE,
            "closing a won deal at zero value requires an override",
        )
    };

    Ok(vec![PolicyDecision {
        policy_name: POLICY_NAME.to_string(),
        body: DecisionBody::Guard { verdict },
    }])
}
