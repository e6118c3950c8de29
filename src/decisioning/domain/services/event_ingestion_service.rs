use async_trait::async_trait;
use uuid::Uuid;

use crate::decisioning::domain::model::{
    commands::ingest_event_command::IngestEventCommand,
    enums::{decisioning_domain_error::DecisioningDomainError, run_mode::RunMode},
};

#[derive(Clone, Debug)]
pub struct IngestionSummary {
    pub event_id: Uuid,
    pub correlation_id: String,
    pub mode: RunMode,
    pub decisions_created: usize,
    pub actions_logged: usize,
    pub skipped_idempotent: bool,
}

#[async_trait]
pub trait EventIngestionService: Send + Sync {
    async fn handle_ingest(
        &self,
        command: IngestEventCommand,
        mode_override: Option<RunMode>,
    ) -> Result<IngestionSummary, DecisioningDomainError>;
}
