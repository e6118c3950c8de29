use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::decisioning::{
    domain::model::enums::{
        decision_kind::DecisionKind, decision_status::DecisionStatus,
        decisioning_domain_error::DecisioningDomainError,
    },
    infrastructure::persistence::repositories::decision_repository::{
        DecisionRecord, DecisionRepository,
    },
};

pub struct SqlxDecisionRepositoryImpl {
    pool: PgPool,
}

impl SqlxDecisionRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DecisionRepository for SqlxDecisionRepositoryImpl {
    async fn insert_decision(
        &self,
        record: &DecisionRecord,
    ) -> Result<(), DecisioningDomainError> {
        let statement = r#"
            INSERT INTO decisioning_decisions (
                id,
                tenant_id,
                event_id,
                correlation_id,
                policy_name,
                decision_kind,
                body,
                status,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        "#;

        sqlx::query(statement)
            .bind(record.id)
            .bind(&record.tenant_id)
            .bind(record.event_id)
            .bind(&record.correlation_id)
            .bind(&record.policy_name)
            .bind(record.decision_kind.as_str())
            .bind(&record.body)
            .bind(record.status.as_str())
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn update_status(
        &self,
        decision_id: Uuid,
        from: DecisionStatus,
        to: DecisionStatus,
    ) -> Result<(), DecisioningDomainError> {
        if !from.can_transition_to(to) {
            return Err(DecisioningDomainError::InvalidStatusTransition);
        }

        let statement = r#"
            UPDATE decisioning_decisions
            SET status = $1, updated_at = NOW()
            WHERE id = $2 AND status = $3
        "#;

        let result = sqlx::query(statement)
            .bind(to.as_str())
            .bind(decision_id)
            .bind(from.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DecisioningDomainError::InvalidStatusTransition);
        }

        Ok(())
    }

    async fn find_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<DecisionRecord>, DecisioningDomainError> {
        let statement = r#"
            SELECT
                id, tenant_id, event_id, correlation_id, policy_name,
                decision_kind, body, status, created_at
            FROM decisioning_decisions
            WHERE event_id = $1
            ORDER BY created_at
        "#;

        let rows = sqlx::query_as::<
            _,
            (
                Uuid,
                String,
                Uuid,
                String,
                String,
                String,
                serde_json::Value,
                String,
                DateTime<Utc>,
            ),
        >(statement)
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        rows.into_iter()
            .map(
                |(
                    id,
                    tenant_id,
                    event_id,
                    correlation_id,
                    policy_name,
                    decision_kind,
                    body,
                    status,
                    created_at,
                )| {
                    Ok(DecisionRecord {
                        id,
                        tenant_id,
                        event_id,
                        correlation_id,
                        policy_name,
                        decision_kind: DecisionKind::from_str(&decision_kind)?,
                        body,
                        status: DecisionStatus::from_str(&status)?,
                        created_at,
                    })
                },
            )
            .collect()
    }
}
