use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::decisioning::{
    domain::model::enums::{
        action_status::ActionStatus, decisioning_domain_error::DecisioningDomainError,
    },
    infrastructure::persistence::repositories::action_log_repository::{
        ActionLogRepository, NewActionLogRecord,
    },
};

pub struct SqlxActionLogRepositoryImpl {
    pool: PgPool,
}

impl SqlxActionLogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActionLogRepository for SqlxActionLogRepositoryImpl {
    async fn insert_action(
        &self,
        record: &NewActionLogRecord,
    ) -> Result<(), DecisioningDomainError> {
        let statement = r#"
            INSERT INTO decisioning_action_log (
                id,
                tenant_id,
                decision_id,
                correlation_id,
                action_type,
                target,
                severity,
                auto_execute,
                override_required,
                reason_code,
                reason_text,
                metadata,
                status,
                logged_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#;

        sqlx::query(statement)
            .bind(record.id)
            .bind(&record.tenant_id)
            .bind(record.decision_id)
            .bind(&record.correlation_id)
            .bind(record.action_type.as_str())
            .bind(&record.target)
            .bind(record.severity.as_str())
            .bind(record.auto_execute)
            .bind(record.override_required)
            .bind(&record.reason_code)
            .bind(&record.reason_text)
            .bind(&record.metadata)
            .bind(ActionStatus::Logged.as_str())
            .bind(record.logged_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn mark_executed(
        &self,
        action_id: Uuid,
        result: serde_json::Value,
        executed_at: DateTime<Utc>,
    ) -> Result<(), DecisioningDomainError> {
        let statement = r#"
            UPDATE decisioning_action_log
            SET status = $1, result = $2, executed_at = $3
            WHERE id = $4
        "#;

        sqlx::query(statement)
            .bind(ActionStatus::Executed.as_str())
            .bind(result)
            .bind(executed_at)
            .bind(action_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn mark_failed(
        &self,
        action_id: Uuid,
        error_text: &str,
        executed_at: DateTime<Utc>,
    ) -> Result<(), DecisioningDomainError> {
        let statement = r#"
            UPDATE decisioning_action_log
            SET status = $1, error_text = $2, executed_at = $3
            WHERE id = $4
        "#;

        sqlx::query(statement)
            .bind(ActionStatus::Failed.as_str())
            .bind(error_text)
            .bind(executed_at)
            .bind(action_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn mark_skipped(
        &self,
        action_id: Uuid,
        reason_code: &str,
    ) -> Result<(), DecisioningDomainError> {
        let statement = r#"
            UPDATE decisioning_action_log
            SET status = $1, result = $2
            WHERE id = $3
        "#;

        sqlx::query(statement)
            .bind(ActionStatus::Skipped.as_str())
            .bind(serde_json::json!({ "skip_reason": reason_code }))
            .bind(action_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
