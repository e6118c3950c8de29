use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::decisioning::domain::model::value_objects::{
    correlation_id::CorrelationId, entity_ref::EntityRef, event_type::EventType,
    idempotency_key::IdempotencyKey, source_system::SourceSystem, tenant_id::TenantId,
};

#[derive(Clone, Debug)]
pub struct BusinessEvent {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub event_type: EventType,
    pub source_system: SourceSystem,
    pub entity: EntityRef,
    pub correlation_id: CorrelationId,
    pub idempotency_key: IdempotencyKey,
    pub payload: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}

impl BusinessEvent {
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(|v| v.as_str())
    }

    pub fn payload_f64(&self, key: &str) -> Option<f64> {
        self.payload.get(key).and_then(|v| v.as_f64())
    }
}
