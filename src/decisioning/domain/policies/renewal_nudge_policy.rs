use serde_json::json;

use crate::decisioning::domain::{
    model::{
        entities::{
            business_event::BusinessEvent,
            policy_decision::{DecisionBody, PolicyDecision},
            proposed_action::ProposedAction,
        },
        enums::{
            action_severity::ActionSeverity, action_target::ActionTarget,
            action_type::ActionType, decisioning_domain_error::DecisioningDomainError,
        },
    },
    policies::reason_codes,
};

pub const POLICY_NAME: &str = "renewal_nudge";

pub fn matches(event: &BusinessEvent) -> bool {
    event.event_type.value() == "subscription_renewal_due"
        && event.source_system.value() == "billing"
}

pub fn evaluate(event: &BusinessEvent) -> Result<Vec<PolicyDecision>, DecisioningDomainError> {
    let action = ProposedAction {
        action_type: ActionType::RenewalNudge,
        target: ActionTarget::Account {
            account_id: event.entity.entity_id().to_string(),
        },
        severity: ActionSeverity::Info,
        auto_execute: true,
        override_required: false,
        reason_code: reason_codes::RENEWAL_NUDGE_DUE.to_string(),
        reason_text: "subscription renewal is approaching".to_string(),
        metadata: json!({
            "recipient": event.payload_str("billing_email"),
            "template": "renewal_nudge",
        }),
    };

    Ok(vec![PolicyDecision {
        policy_name: POLICY_NAME.to_string(),
        body: DecisionBody::EmitActions {
            actions: vec![action],
        },
    }])
}
