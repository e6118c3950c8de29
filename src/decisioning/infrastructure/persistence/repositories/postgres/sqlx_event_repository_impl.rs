use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::decisioning::{
    domain::model::enums::decisioning_domain_error::DecisioningDomainError,
    infrastructure::persistence::repositories::event_repository::{
        EVENT_CONTRACT_VERSION, EventInsertOutcome, EventRepository, NewEventRecord,
        StoredEventRecord,
    },
};

pub struct SqlxEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &PgRow) -> Result<StoredEventRecord, sqlx::Error> {
        Ok(StoredEventRecord {
            id: row.try_get::<Uuid, _>("id")?,
            tenant_id: row.try_get("tenant_id")?,
            event_type: row.try_get("event_type")?,
            source_system: row.try_get("source_system")?,
            entity_type: row.try_get("entity_type")?,
            entity_id: row.try_get("entity_id")?,
            correlation_id: row.try_get("correlation_id")?,
            idempotency_key: row.try_get("idempotency_key")?,
            payload: row.try_get("payload")?,
            occurred_at: row.try_get::<DateTime<Utc>, _>("occurred_at")?,
            recorded_at: row.try_get::<DateTime<Utc>, _>("recorded_at")?,
        })
    }
}

#[async_trait]
impl EventRepository for SqlxEventRepositoryImpl {
    async fn try_insert(
        &self,
        record: NewEventRecord,
    ) -> Result<EventInsertOutcome, DecisioningDomainError> {
        let insert = r#"
            INSERT INTO decisioning_events (
                id,
                tenant_id,
                event_type,
                source_system,
                entity_type,
                entity_id,
                correlation_id,
                idempotency_key,
                payload,
                occurred_at,
                recorded_at,
                contract_version
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (tenant_id, idempotency_key) DO NOTHING
            RETURNING
                id, tenant_id, event_type, source_system, entity_type, entity_id,
                correlation_id, idempotency_key, payload, occurred_at, recorded_at
        "#;

        let inserted = sqlx::query(insert)
            .bind(record.id)
            .bind(&record.tenant_id)
            .bind(&record.event_type)
            .bind(&record.source_system)
            .bind(&record.entity_type)
            .bind(&record.entity_id)
            .bind(&record.correlation_id)
            .bind(&record.idempotency_key)
            .bind(&record.payload)
            .bind(record.occurred_at)
            .bind(record.recorded_at)
            .bind(EVENT_CONTRACT_VERSION)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        if let Some(row) = inserted {
            let stored = Self::row_to_record(&row)
                .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;
            return Ok(EventInsertOutcome::Inserted(stored));
        }

        let select = r#"
            SELECT
                id, tenant_id, event_type, source_system, entity_type, entity_id,
                correlation_id, idempotency_key, payload, occurred_at, recorded_at
            FROM decisioning_events
            WHERE tenant_id = $1 AND idempotency_key = $2
        "#;

        let row = sqlx::query(select)
            .bind(&record.tenant_id)
            .bind(&record.idempotency_key)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;

        let existing = Self::row_to_record(&row)
            .map_err(|e| DecisioningDomainError::InfrastructureError(e.to_string()))?;
        Ok(EventInsertOutcome::AlreadyExists(existing))
    }
}
