use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use crate::decisioning::domain::model::value_objects::{
    correlation_id::CorrelationId, entity_ref::EntityRef, event_type::EventType,
    source_system::SourceSystem, tenant_id::TenantId,
};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    pub fn for_event(
        tenant_id: &TenantId,
        event_type: &EventType,
        source_system: &SourceSystem,
        entity: &EntityRef,
        correlation_id: &CorrelationId,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        let canonical = format!(
            "{}|{}|{}|{}|{}|{}|{}",
            tenant_id.value(),
            event_type.value(),
            source_system.value(),
            entity.entity_type(),
            entity.entity_id(),
            correlation_id.value(),
            occurred_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        );
        Self(Self::digest(&canonical))
    }

    pub fn for_action(
        tenant_id: &TenantId,
        action_type: &str,
        correlation_id: &CorrelationId,
        reason_code: &str,
        identity_fields: &[&str],
    ) -> Self {
        let canonical = format!(
            "{}|{}|{}|{}|{}",
            tenant_id.value(),
            action_type,
            correlation_id.value(),
            reason_code,
            identity_fields.join("|"),
        );
        Self(Self::digest(&canonical))
    }

    fn digest(canonical: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
