use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::decisioning::{
    domain::{
        model::{
            commands::ingest_event_command::IngestEventCommand,
            entities::{
                business_event::BusinessEvent,
                policy_decision::{DecisionBody, PolicyDecision},
            },
            enums::{
                decision_status::DecisionStatus,
                decisioning_domain_error::DecisioningDomainError, run_mode::RunMode,
            },
            value_objects::idempotency_key::IdempotencyKey,
        },
        services::{
            action_dispatch_service::ActionDispatchService,
            decision_engine::DecisionEngine,
            event_ingestion_service::{EventIngestionService, IngestionSummary},
            runtime_context::{Clock, RuntimeContext},
        },
    },
    infrastructure::persistence::repositories::{
        decision_repository::{DecisionRecord, DecisionRepository},
        event_repository::{EventInsertOutcome, EventRepository, NewEventRecord},
    },
};

pub struct EventIngestionServiceImpl {
    event_repository: Arc<dyn EventRepository>,
    decision_repository: Arc<dyn DecisionRepository>,
    dispatch_service: Arc<dyn ActionDispatchService>,
    clock: Arc<dyn Clock>,
    default_mode: RunMode,
}

impl EventIngestionServiceImpl {
    pub fn new(
        event_repository: Arc<dyn EventRepository>,
        decision_repository: Arc<dyn DecisionRepository>,
        dispatch_service: Arc<dyn ActionDispatchService>,
        clock: Arc<dyn Clock>,
        default_mode: RunMode,
    ) -> Self {
        Self {
            event_repository,
            decision_repository,
            dispatch_service,
            clock,
            default_mode,
        }
    }

    fn build_event_record(
        command: &IngestEventCommand,
        key: &IdempotencyKey,
        ctx: &RuntimeContext,
        occurred_at: chrono::DateTime<chrono::Utc>,
    ) -> NewEventRecord {
        NewEventRecord {
            id: Uuid::now_v7(),
            tenant_id: command.tenant_id().value().to_string(),
            event_type: command.event_type().value().to_string(),
            source_system: command.source_system().value().to_string(),
            entity_type: command.entity().entity_type().to_string(),
            entity_id: command.entity().entity_id().to_string(),
            correlation_id: command.correlation_id().value().to_string(),
            idempotency_key: key.value().to_string(),
            payload: command.payload().clone(),
            occurred_at,
            recorded_at: ctx.now(),
        }
    }
}

#[async_trait]
impl EventIngestionService for EventIngestionServiceImpl {
    async fn handle_ingest(
        &self,
        command: IngestEventCommand,
        mode_override: Option<RunMode>,
    ) -> Result<IngestionSummary, DecisioningDomainError> {
        let mode = mode_override.unwrap_or(self.default_mode);
        let ctx = RuntimeContext::new(mode, self.clock.clone());

        let occurred_at = command.occurred_at().unwrap_or_else(|| ctx.now());
        let key = IdempotencyKey::for_event(
            command.tenant_id(),
            command.event_type(),
            command.source_system(),
            command.entity(),
            command.correlation_id(),
            occurred_at,
        );

        let record = Self::build_event_record(&command, &key, &ctx, occurred_at);
        let stored = match self.event_repository.try_insert(record).await? {
            EventInsertOutcome::Inserted(stored) => stored,
            EventInsertOutcome::AlreadyExists(existing) => {
                info!(
                    event_id = %existing.id,
                    correlation_id = existing.correlation_id,
                    "duplicate delivery, skipping pipeline"
                );
                return Ok(IngestionSummary {
                    event_id: existing.id,
                    correlation_id: existing.correlation_id,
                    mode,
                    decisions_created: 0,
                    actions_logged: 0,
                    skipped_idempotent: true,
                });
            }
        };

        let event = BusinessEvent {
            id: stored.id,
            tenant_id: command.tenant_id().clone(),
            event_type: command.event_type().clone(),
            source_system: command.source_system().clone(),
            entity: command.entity().clone(),
            correlation_id: command.correlation_id().clone(),
            idempotency_key: key,
            payload: command.payload().clone(),
            occurred_at,
        };

        let decisions = DecisionEngine::decide(&event, &ctx)?;
        let decisions_created = decisions.len();

        let mut persisted = Vec::with_capacity(decisions.len());
        for decision in &decisions {
            let decision_id = Uuid::now_v7();
            let record = DecisionRecord {
                id: decision_id,
                tenant_id: event.tenant_id.value().to_string(),
                event_id: event.id,
                correlation_id: event.correlation_id.value().to_string(),
                policy_name: decision.policy_name.clone(),
                decision_kind: decision.body.kind(),
                body: serde_json::to_value(&decision.body)
                    .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?,
                status: DecisionStatus::Proposed,
                created_at: ctx.now(),
            };
            self.decision_repository.insert_decision(&record).await?;
            self.decision_repository
                .update_status(decision_id, DecisionStatus::Proposed, DecisionStatus::Approved)
                .await?;
            persisted.push((decision_id, decision));
        }

        let mut actions_logged = 0usize;
        for (decision_id, decision) in persisted {
            actions_logged += self
                .dispatch_decision(decision_id, &event, decision, &ctx)
                .await?;
        }

        Ok(IngestionSummary {
            event_id: event.id,
            correlation_id: event.correlation_id.value().to_string(),
            mode,
            decisions_created,
            actions_logged,
            skipped_idempotent: false,
        })
    }
}

impl EventIngestionServiceImpl {
    async fn dispatch_decision(
        &self,
        decision_id: Uuid,
        event: &BusinessEvent,
        decision: &PolicyDecision,
        ctx: &RuntimeContext,
    ) -> Result<usize, DecisioningDomainError> {
        let DecisionBody::EmitActions { actions } = &decision.body else {
            return Ok(0);
        };

        let outcome = self
            .dispatch_service
            .dispatch(
                decision_id,
                &event.tenant_id,
                &event.correlation_id,
                actions,
                ctx,
            )
            .await?;

        if let Some(error) = outcome.first_error {
            self.decision_repository
                .update_status(decision_id, DecisionStatus::Approved, DecisionStatus::Failed)
                .await?;
            return Err(DecisioningDomainError::ActionExecution(error));
        }

        if ctx.mode == RunMode::Enforce {
            self.decision_repository
                .update_status(
                    decision_id,
                    DecisionStatus::Approved,
                    DecisionStatus::Executed,
                )
                .await?;
        }

        Ok(outcome.actions_logged)
    }
}
