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

pub const POLICY_NAME: &str = "discount_guard";

const OVERRIDE_THRESHOLD_PCT: f64 = 20.0;
const BLOCK_THRESHOLD_PCT: f64 = 50.0;

pub fn matches(event: &BusinessEvent) -> bool {
    event.event_type.value() == "discount_applied"
}

pub fn evaluate(event: &BusinessEvent) -> Result<Vec<PolicyDecision>, DecisioningDomainError> {
    let discount_pct = discount_percentage(event)?;

    let verdict = if discount_pct >= BLOCK_THRESHOLD_PCT {
        GuardVerdict::block(
            reason_codes::DISCOUNT_BLOCKED,
            &format!("{discount_pct:.3}% discount is at or above the {BLOCK_THRESHOLD_PCT}% block threshold"),
        )
    } else if discount_pct >= OVERRIDE_THRESHOLD_PCT {
        GuardVerdict::allow_with_override(
            reason_codes::DISCOUNT_REQUIRES_OVERRIDE,
            &format!("{discount_pct:.3}% discount requires a manager override"),
        )
    } else {
        GuardVerdict::allow(
            reason_codes::DISCOUNT_WITHIN_THRESHOLD,
            &format!("{discount_pct:.3}% discount is within the allowed range"),
        )
    };

    Ok(vec![PolicyDecision {
        policy_name: POLICY_NAME.to_string(),
        body: DecisionBody::Guard { verdict },
    }])
}

fn discount_percentage(event: &BusinessEvent) -> Result<f64, DecisioningDomainError> {
    if let Some(pct) = event.payload_f64("discount_percent") {
        return Ok(pct);
    }
    match (
        event.payload_f64("previous_value"),
        event.payload_f64("new_value"),
    ) {
        (Some(previous), Some(new)) if previous > 0.0 => {
            Ok((previous - new) / previous * 100.0)
        }
        _ => Err(DecisioningDomainError::PolicyEvaluation(
            "discount_applied payload needs discount_percent or previous_value/new_value"
                .to_string(),
        )),
    }
}
