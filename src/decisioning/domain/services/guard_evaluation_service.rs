use async_trait::async_trait;
use uuid::Uuid;

use crate::decisioning::domain::model::{
    commands::ingest_event_command::IngestEventCommand,
    entities::guard_verdict::GuardVerdict,
    enums::decisioning_domain_error::DecisioningDomainError,
};

#[derive(Clone, Debug)]
pub struct GuardCheckResult {
    pub event_id: Uuid,
    pub correlation_id: String,
    pub decision_ids: Vec<Uuid>,
    pub verdict: GuardVerdict,
}

#[async_trait]
pub trait GuardEvaluationService: Send + Sync {
    async fn handle_guard_check(
        &self,
        command: IngestEventCommand,
    ) -> Result<GuardCheckResult, DecisioningDomainError>;
}
