use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::decisioning::domain::model::{
    entities::proposed_action::ProposedAction,
    enums::{action_type::ActionType, decisioning_domain_error::DecisioningDomainError},
    value_objects::{correlation_id::CorrelationId, tenant_id::TenantId},
};

pub struct ActionExecutionRequest<'a> {
    pub tenant_id: &'a TenantId,
    pub correlation_id: &'a CorrelationId,
    pub action: &'a ProposedAction,
    pub now: DateTime<Utc>,
}

#[async_trait]
pub trait ActionExecutor: Send + Sync {
    fn action_type(&self) -> ActionType;

    async fn execute(
        &self,
        request: ActionExecutionRequest<'_>,
    ) -> Result<serde_json::Value, DecisioningDomainError>;
}

pub struct ExecutorRegistry {
    executors: Vec<Arc<dyn ActionExecutor>>,
}

impl ExecutorRegistry {
    pub fn new(executors: Vec<Arc<dyn ActionExecutor>>) -> Self {
        Self { executors }
    }

    pub fn find(&self, action_type: ActionType) -> Option<&Arc<dyn ActionExecutor>> {
        self.executors
            .iter()
            .find(|e| e.action_type() == action_type)
    }
}
