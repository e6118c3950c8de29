use tracing::info;

use crate::decisioning::domain::{
    model::{
        entities::{business_event::BusinessEvent, policy_decision::PolicyDecision},
        enums::decisioning_domain_error::DecisioningDomainError,
    },
    policies::PolicyRegistry,
    services::runtime_context::RuntimeContext,
};

pub struct DecisionEngine;

impl DecisionEngine {
    pub fn decide(
        event: &BusinessEvent,
        ctx: &RuntimeContext,
    ) -> Result<Vec<PolicyDecision>, DecisioningDomainError> {
        let mut decisions = Vec::new();

        for policy in PolicyRegistry::all() {
            if !policy.matches(event) {
                continue;
            }
            let span = tracing::info_span!("policy", name = policy.name());
            let _entered = span.enter();
            let mut produced = policy.evaluate(event, ctx)?;
            decisions.append(&mut produced);
        }

        if decisions.is_empty() {
            info!(
                event_type = event.event_type.value(),
                source_system = event.source_system.value(),
                "no policy matched event"
            );
        }

        Ok(decisions)
    }
}
