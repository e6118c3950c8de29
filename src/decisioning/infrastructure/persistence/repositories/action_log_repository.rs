use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::decisioning::domain::model::enums::{
    action_severity::ActionSeverity, action_type::ActionType,
    decisioning_domain_error::DecisioningDomainError,
};

#[derive(Clone, Debug)]
pub struct NewActionLogRecord {
    pub id: Uuid,
    pub tenant_id: String,
    pub decision_id: Uuid,
    pub correlation_id: String,
    pub action_type: ActionType,
    pub target: serde_json::Value,
    pub severity: ActionSeverity,
    pub auto_execute: bool,
    pub override_required: bool,
    pub reason_code: String,
    pub reason_text: String,
    pub metadata: serde_json::Value,
    pub logged_at: DateTime<Utc>,
}

#[async_trait]
pub trait ActionLogRepository: Send + Sync {
    async fn insert_action(
        &self,
        record: &NewActionLogRecord,
    ) -> Result<(), DecisioningDomainError>;

    async fn mark_executed(
        &self,
        action_id: Uuid,
        result: serde_json::Value,
        executed_at: DateTime<Utc>,
    ) -> Result<(), DecisioningDomainError>;

    async fn mark_failed(
        &self,
        action_id: Uuid,
        error_text: &str,
        executed_at: DateTime<Utc>,
    ) -> Result<(), DecisioningDomainError>;

    async fn mark_skipped(
        &self,
        action_id: Uuid,
        reason_code: &str,
    ) -> Result<(), DecisioningDomainError>;
}
