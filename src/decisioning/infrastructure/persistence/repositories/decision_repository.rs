use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::decisioning::domain::model::enums::{
    decision_kind::DecisionKind, decision_status::DecisionStatus,
    decisioning_domain_error::DecisioningDomainError,
};

#[derive(Clone, Debug)]
pub struct DecisionRecord {
    pub id: Uuid,
    pub tenant_id: String,
    pub event_id: Uuid,
    pub correlation_id: String,
    pub policy_name: String,
    pub decision_kind: DecisionKind,
    pub body: serde_json::Value,
    pub status: DecisionStatus,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait DecisionRepository: Send + Sync {
    async fn insert_decision(
        &self,
        record: &DecisionRecord,
    ) -> Result<(), DecisioningDomainError>;

    async fn update_status(
        &self,
        decision_id: Uuid,
        from: DecisionStatus,
        to: DecisionStatus,
    ) -> Result<(), DecisioningDomainError>;

    async fn find_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<DecisionRecord>, DecisioningDomainError>;
}
