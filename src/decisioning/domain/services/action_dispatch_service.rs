use async_trait::async_trait;
use uuid::Uuid;

use crate::decisioning::domain::{
    model::{
        entities::proposed_action::ProposedAction,
        enums::decisioning_domain_error::DecisioningDomainError,
        value_objects::{correlation_id::CorrelationId, tenant_id::TenantId},
    },
    services::runtime_context::RuntimeContext,
};

#[derive(Clone, Debug, Default)]
pub struct DispatchOutcome {
    pub actions_logged: usize,
    pub actions_executed: usize,
    pub actions_failed: usize,
    pub actions_skipped: usize,
    pub first_error: Option<String>,
}

#[async_trait]
pub trait ActionDispatchService: Send + Sync {
    async fn dispatch(
        &self,
        decision_id: Uuid,
        tenant_id: &TenantId,
        correlation_id: &CorrelationId,
        actions: &[ProposedAction],
        ctx: &RuntimeContext,
    ) -> Result<DispatchOutcome, DecisioningDomainError>;
}
