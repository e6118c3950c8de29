use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::decisioning::domain::model::enums::decisioning_domain_error::DecisioningDomainError;

pub const EVENT_CONTRACT_VERSION: i32 = 1;

#[derive(Clone, Debug)]
pub struct NewEventRecord {
    pub id: Uuid,
    pub tenant_id: String,
    pub event_type: String,
    pub source_system: String,
    pub entity_type: String,
    pub entity_id: String,
    pub correlation_id: String,
    pub idempotency_key: String,
    pub payload: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct StoredEventRecord {
    pub id: Uuid,
    pub tenant_id: String,
    pub event_type: String,
    pub source_system: String,
    pub entity_type: String,
    pub entity_id: String,
    pub correlation_id: String,
    pub idempotency_key: String,
    pub payload: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub enum EventInsertOutcome {
    Inserted(StoredEventRecord),
    AlreadyExists(StoredEventRecord),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn try_insert(
        &self,
        record: NewEventRecord,
    ) -> Result<EventInsertOutcome, DecisioningDomainError>;
}
