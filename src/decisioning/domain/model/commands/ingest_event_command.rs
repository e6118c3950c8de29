use chrono::{DateTime, Utc};

use crate::decisioning::domain::model::{
    enums::decisioning_domain_error::DecisioningDomainError,
    value_objects::{
        correlation_id::CorrelationId, entity_ref::EntityRef, event_type::EventType,
        source_system::SourceSystem, tenant_id::TenantId,
    },
};

#[derive(Clone, Debug)]
pub struct IngestEventCommand {
    tenant_id: TenantId,
    event_type: EventType,
    source_system: SourceSystem,
    entity: EntityRef,
    correlation_id: CorrelationId,
    payload: serde_json::Value,
    occurred_at: Option<DateTime<Utc>>,
}

pub struct IngestEventCommandParts {
    pub tenant_id: String,
    pub event_type: String,
    pub source_system: String,
    pub entity_type: String,
    pub entity_id: String,
    pub correlation_id: String,
    pub payload: serde_json::Value,
    pub occurred_at: Option<String>,
}

impl IngestEventCommand {
    pub fn new(parts: IngestEventCommandParts) -> Result<Self, DecisioningDomainError> {
        if !parts.payload.is_object() {
            return Err(DecisioningDomainError::InvalidPayload);
        }
        let occurred_at = match parts.occurred_at {
            None => None,
            Some(raw) => Some(
                DateTime::parse_from_rfc3339(&raw)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|_| DecisioningDomainError::InvalidOccurredAt)?,
            ),
        };
        Ok(Self {
            tenant_id: TenantId::new(parts.tenant_id)?,
            event_type: EventType::new(parts.event_type)?,
            source_system: SourceSystem::new(parts.source_system)?,
            entity: EntityRef::new(parts.entity_type, parts.entity_id)?,
            correlation_id: CorrelationId::new(parts.correlation_id)?,
            payload: parts.payload,
            occurred_at,
        })
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }
    pub fn source_system(&self) -> &SourceSystem {
        &self.source_system
    }
    pub fn entity(&self) -> &EntityRef {
        &self.entity
    }
    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.occurred_at
    }
}
