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
                guard_verdict::GuardVerdict,
                policy_decision::DecisionBody,
            },
            enums::{
                decision_kind::DecisionKind, decision_status::DecisionStatus,
                decisioning_domain_error::DecisioningDomainError, run_mode::RunMode,
            },
            value_objects::idempotency_key::IdempotencyKey,
        },
        services::{
            decision_engine::DecisionEngine,
            guard_evaluation_service::{GuardCheckResult, GuardEvaluationService},
            runtime_context::{Clock, RuntimeContext},
        },
    },
    infrastructure::persistence::repositories::{
        decision_repository::{DecisionRecord, DecisionRepository},
        event_repository::{EventInsertOutcome, EventRepository, NewEventRecord},
    },
};

pub struct GuardEvaluationServiceImpl {
    event_repository: Arc<dyn EventRepository>,
    decision_repository: Arc<dyn DecisionRepository>,
    clock: Arc<dyn Clock>,
}

impl GuardEvaluationServiceImpl {
    pub fn new(
        event_repository: Arc<dyn EventRepository>,
        decision_repository: Arc<dyn DecisionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            event_repository,
            decision_repository,
            clock,
        }
    }

    fn resolve(verdicts: Vec<GuardVerdict>) -> GuardVerdict {
        GuardVerdict::strictest(verdicts).unwrap_or_else(GuardVerdict::allow_unmatched)
    }
}

#[async_trait]
impl GuardEvaluationService for GuardEvaluationServiceImpl {
    async fn handle_guard_check(
        &self,
        command: IngestEventCommand,
    ) -> Result<GuardCheckResult, DecisioningDomainError> {
        let ctx = RuntimeContext::new(RunMode::Shadow, self.clock.clone());

        let occurred_at = command.occurred_at().unwrap_or_else(|| ctx.now());
        let key = IdempotencyKey::for_event(
            command.tenant_id(),
            command.event_type(),
            command.source_system(),
            command.entity(),
            command.correlation_id(),
            occurred_at,
        );

        let record = NewEventRecord {
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
        };

        let (stored, first_delivery) = match self.event_repository.try_insert(record).await? {
            EventInsertOutcome::Inserted(stored) => (stored, true),
            EventInsertOutcome::AlreadyExists(existing) => (existing, false),
        };

        if !first_delivery {
            let existing = self.decision_repository.find_by_event(stored.id).await?;
            let mut decision_ids = Vec::new();
            let mut verdicts = Vec::new();
            for decision in existing {
                if decision.decision_kind != DecisionKind::Guard {
                    continue;
                }
                let body: DecisionBody = serde_json::from_value(decision.body.clone())
                    .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;
                if let DecisionBody::Guard { verdict } = body {
                    decision_ids.push(decision.id);
                    verdicts.push(verdict);
                }
            }
            return Ok(GuardCheckResult {
                event_id: stored.id,
                correlation_id: stored.correlation_id,
                decision_ids,
                verdict: Self::resolve(verdicts),
            });
        }

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

        let mut decision_ids = Vec::new();
        let mut verdicts = Vec::new();
        for decision in decisions {
            let DecisionBody::Guard { verdict } = &decision.body else {
                continue;
            };
            let decision_id = Uuid::now_v7();
            let record = DecisionRecord {
                id: decision_id,
                tenant_id: event.tenant_id.value().to_string(),
                event_id: event.id,
                correlation_id: event.correlation_id.value().to_string(),
                policy_name: decision.policy_name.clone(),
                decision_kind: DecisionKind::Guard,
                body: serde_json::to_value(&decision.body)
                    .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?,
                status: DecisionStatus::Proposed,
                created_at: ctx.now(),
            };
            self.decision_repository.insert_decision(&record).await?;
            self.decision_repository
                .update_status(decision_id, DecisionStatus::Proposed, DecisionStatus::Approved)
                .await?;
            decision_ids.push(decision_id);
            verdicts.push(verdict.clone());
        }

        let verdict = Self::resolve(verdicts);
        info!(
            event_id = %event.id,
            result = verdict.result.as_str(),
            reason_code = verdict.reason_code,
            "guard check resolved"
        );

        Ok(GuardCheckResult {
            event_id: event.id,
            correlation_id: event.correlation_id.value().to_string(),
            decision_ids,
            verdict,
        })
    }
}
