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

pub struct SqlxTaskCreateExecutorImpl {
    pool: PgPool,
}

impl SqlxTaskCreateExecutorImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionExecutor for SqlxTaskCreateExecutorImpl {
    fn action_type(&self) -> ActionType {
        ActionType::TaskCreate
    }

    async fn execute(
        &self,
        request: ActionExecutionRequest<'_>,
    ) -> Result<serde_json::Value, DecisioningDomainError> {
        let action = request.action;
        let title = action
            .metadata
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("Follow up");
        let due_at = action
            .metadata
            .get("due_at")
            .and_then(|v| v.as_str())
            .and_then(|raw| chrono::DateTime::parse_from_rfc3339(raw).ok())
            .map(|t| t.with_timezone(&chrono::Utc));
        let target_id = action.target.target_id();

        let key = IdempotencyKey::for_action(
            request.tenant_id,
            self.action_type().as_str(),
            request.correlation_id,
            &action.reason_code,
            &[target_id, title],
        );

        let insert = r#"
            INSERT INTO follow_up_tasks (
                id, tenant_id, idempotency_key, correlation_id,
                target, title, due_at, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'open', $8)
            ON CONFLICT (tenant_id, idempotency_key) DO NOTHING
            RETURNING id
        "#;

        let inserted = sqlx::query(insert)
            .bind(Uuid::now_v7())
            .bind(request.tenant_id.value())
            .bind(key.value())
            .bind(request.correlation_id.value())
            .bind(serde_json::to_value(&action.target).map_err(|e| {
                DecisioningDomainError::InfrastructureError(e.to_string())
            })?)
            .bind(title)
            .bind(due_at)
            .bind(request.now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        if let Some(row) = inserted {
            let task_id: Uuid = row
                .try_get("id")
                .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;
            return Ok(json!({
                "task_id": task_id,
                "title": title,
                "deduplicated": false,
            }));
        }

        let existing: (Uuid,) = sqlx::query_as(
            "SELECT id FROM follow_up_tasks WHERE tenant_id = $1 AND idempotency_key = $2",
        )
        .bind(request.tenant_id.value())
        .bind(key.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        Ok(json!({
            "task_id": existing.0,
            "title": title,
            "deduplicated": true,
        }))
    }
}
