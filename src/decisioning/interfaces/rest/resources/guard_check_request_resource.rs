use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct GuardCheckRequestResource {
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
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GuardVerdictResource {
    pub result: String,
    pub reason_code: String,
    pub reason_text: String,
    pub override_required: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GuardCheckResponseResource {
    pub event_id: Uuid,
    pub correlation_id: String,
    pub decision_ids: Vec<Uuid>,
    pub guard: GuardVerdictResource,
}
