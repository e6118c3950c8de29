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
    services::runtime_context::RuntimeContext,
};

pub const POLICY_NAME: &str = "lead_response";

pub fn matches(event: &BusinessEvent) -> bool {
    event.event_type.value() == "lead_captured"
        && matches!(
            event.source_system.value(),
            "web_form" | "landing_page"
        )
}

pub fn evaluate(
    event: &BusinessEvent,
    ctx: &RuntimeContext,
) -> Result<Vec<PolicyDecision>, DecisioningDomainError> {
    let lead_target = ActionTarget::Lead {
        lead_id: event.entity.entity_id().to_string(),
    };
    let follow_up_due = ctx.now() + chrono::Duration::hours(24);

    let actions = vec![
        ProposedAction {
            action_type: ActionType::OutboundEmail,
            target: lead_target.clone(),
            severity: ActionSeverity::Info,
            auto_execute: true,
            override_required: false,
            reason_code: reason_codes::LEAD_WELCOME_EMAIL.to_string(),
            reason_text: "welcome email for newly captured lead".to_string(),
            metadata: json!({
                "recipient": event.payload_str("email"),
                "template": "lead_welcome",
            }),
        },
        ProposedAction {
            action_type: ActionType::TaskCreate,
            target: lead_target,
            severity: ActionSeverity::Info,
            auto_execute: true,
            override_required: false,
            reason_code: reason_codes::LEAD_FOLLOW_UP_TASK.to_string(),
            reason_text: "follow-up call for newly captured lead".to_string(),
            metadata: json!({
                "title": "Follow up with new lead",
                "due_at": follow_up_due.to_rfc3339(),
            }),
        },
    ];

    Ok(vec![PolicyDecision {
        policy_name: POLICY_NAME.to_string(),
        body: DecisionBody::EmitActions { actions },
    }])
}
