use serde::{Deserialize, Serialize};

use crate::decisioning::domain::model::enums::{
    action_severity::ActionSeverity, action_target::ActionTarget, action_type::ActionType,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposedAction {
    pub action_type: ActionType,
    pub target: ActionTarget,
    pub severity: ActionSeverity,
    pub auto_execute: bool,
    pub override_required: bool,
    pub reason_code: String,
    pub reason_text: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}
