use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::decisioning::{
    domain::{
        model::{
            entities::proposed_action::ProposedAction,
            enums::{decisioning_domain_error::DecisioningDomainError, run_mode::RunMode},
            value_objects::{correlation_id::CorrelationId, tenant_id::TenantId},
        },
        policies::reason_codes,
        services::{
            action_dispatch_service::{ActionDispatchService, DispatchOutcome},
            runtime_context::RuntimeContext,
        },
    },
    infrastructure::{
        executors::action_executor::{ActionExecutionRequest, ExecutorRegistry},
        persistence::repositories::action_log_repository::{
            ActionLogRepository, NewActionLogRecord,
        },
    },
};

pub struct ActionDispatchServiceImpl {
    action_log_repository: Arc<dyn ActionLogRepository>,
    executor_registry: Arc<ExecutorRegistry>,
}

impl ActionDispatchServiceImpl {
    pub fn new(
        action_log_repository: Arc<dyn ActionLogRepository>,
        executor_registry: Arc<ExecutorRegistry>,
    ) -> Self {
        Self {
            action_log_repository,
            executor_registry,
        }
    }
}

#[async_trait]
impl ActionDispatchService for ActionDispatchServiceImpl {
    async fn dispatch(
        &self,
        decision_id: Uuid,
        tenant_id: &TenantId,
        correlation_id: &CorrelationId,
        actions: &[ProposedAction],
        ctx: &RuntimeContext,
    ) -> Result<DispatchOutcome, DecisioningDomainError> {
        let mut outcome = DispatchOutcome::default();

        for action in actions {
            let action_id = Uuid::now_v7();
            let record = NewActionLogRecord {
                id: action_id,
                tenant_id: tenant_id.value().to_string(),
                decision_id,
                correlation_id: correlation_id.value().to_string(),
                action_type: action.action_type,
                target: serde_json::to_value(&action.target)
                    .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?,
                severity: action.severity,
                auto_execute: action.auto_execute,
                override_required: action.override_required,
                reason_code: action.reason_code.clone(),
                reason_text: action.reason_text.clone(),
                metadata: action.metadata.clone(),
                logged_at: ctx.now(),
            };
            self.action_log_repository.insert_action(&record).await?;
            outcome.actions_logged += 1;

            if ctx.mode != RunMode::Enforce {
                continue;
            }

            let Some(executor) = self.executor_registry.find(action.action_type) else {
                warn!(
                    action_type = action.action_type.as_str(),
                    "no executor wired for action type, marking skipped"
                );
                self.action_log_repository
                    .mark_skipped(action_id, reason_codes::ACTION_NOT_IMPLEMENTED)
                    .await?;
                outcome.actions_skipped += 1;
                continue;
            };

            let request = ActionExecutionRequest {
                tenant_id,
                correlation_id,
                action,
                now: ctx.now(),
            };

            match executor.execute(request).await {
                Ok(result) => {
                    self.action_log_repository
                        .mark_executed(action_id, result, ctx.now())
                        .await?;
                    outcome.actions_executed += 1;
                }
                Err(error) => {
                    let message = error.to_string();
                    self.action_log_repository
                        .mark_failed(action_id, &message, ctx.now())
                        .await?;
                    outcome.actions_failed += 1;
                    if outcome.first_error.is_none() {
                        outcome.first_error = Some(message);
                    }
                }
            }
        }

        info!(
            %decision_id,
            logged = outcome.actions_logged,
            executed = outcome.actions_executed,
            failed = outcome.actions_failed,
            skipped = outcome.actions_skipped,
            mode = ctx.mode.as_str(),
            "dispatched decision actions"
        );

        Ok(outcome)
    }
}
