use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct IngestEventRequestResource {
    #[validate(length(min = 1))]
    pub tenant_id: String,
    #[validate(length(min = 1))]
    pub event_type: String,
    #[validate(length(min = 1))]
    pub source_system: String,
    #[validate(length(min = 1))]
    pub entity_type: String,
    #[validate(length(min = 1))]
    pub entity_id: String,
    #[validate(length(min = 1))]
    pub correlation_id: String,
    pub payload: serde_json::Value,
    pub occurred_at: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct IngestEventResponseResource {
    pub event_id: Uuid,
    pub correlation_id: String,
    pub mode: String,
    pub decisions_created: usize,
    pub actions_logged: usize,
    pub skipped_idempotent: bool,
}
