use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::decisioning::{
    domain::model::{
        enums::{action_type::ActionType, decisioning_domain_error::DecisioningDomainError},
        value_objects::idempotency_key::IdempotencyKey,
    },
    infrastructure::executors::action_executor::{ActionExecutionRequest, ActionExecutor},
};

pub struct SqlxEmailScheduleExecutorImpl {
    pool: PgPool,
}

impl SqlxEmailScheduleExecutorImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionExecutor for SqlxEmailScheduleExecutorImpl {
    fn action_type(&self) -> ActionType {
        ActionType::OutboundEmail
    }

    async fn execute(
        &self,
        request: ActionExecutionRequest<'_>,
    ) -> Result<serde_json::Value, DecisioningDomainError> {
        let action = request.action;
        let recipient = action
            .metadata
            .get("recipient")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                DecisioningDomainError::ActionExecution(
                    "outbound_email action has no recipient".to_string(),
                )
            })?;
        let template = action
            .metadata
            .get("template")
            .and_then(|v| v.as_str())
            .unwrap_or("default");

        let key = IdempotencyKey::for_action(
            request.tenant_id,
            self.action_type().as_str(),
            request.correlation_id,
            &action.reason_code,
            &[recipient],
        );

        let insert = r#"
            INSERT INTO outbound_email_queue (
                id, tenant_id, idempotency_key, correlation_id,
                recipient, template, status, queued_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'queued', $7)
            ON CONFLICT (tenant_id, idempotency_key) DO NOTHING
            RETURNING id
        "#;

        let inserted = sqlx::query(insert)
            .bind(Uuid::now_v7())
            .bind(request.tenant_id.value())
            .bind(key.value())
            .bind(request.correlation_id.value())
            .bind(recipient)
            .bind(template)
            .bind(request.now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        if let Some(row) = inserted {
            let queue_id: Uuid = row
                .try_get("id")
                .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;
            return Ok(json!({
                "queue_id": queue_id,
                "recipient": recipient,
                "template": template,
                "deduplicated": false,
            }));
        }

        let existing: (Uuid,) = sqlx::query_as(
            "SELECT id FROM outbound_email_queue WHERE tenant_id = $1 AND idempotency_key = $2",
        )
        .bind(request.tenant_id.value())
        .bind(key.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        Ok(json!({
            "queue_id": existing.0,
            "recipient": recipient,
            "template": template,
            "deduplicated": true,
        }))
    }
}
