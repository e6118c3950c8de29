use serde::{Deserialize, Serialize};

use crate::decisioning::domain::model::{
    entities::{guard_verdict::GuardVerdict, proposed_action::ProposedAction},
    enums::decision_kind::DecisionKind,
};

#[derive(Clone, Debug)]
pub struct PolicyDecision {
    pub policy_name: String,
    pub body: DecisionBody,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionBody {
    EmitActions { actions: Vec<ProposedAction> },
    Guard { verdict: GuardVerdict },
    Noop,
}

impl DecisionBody {
    pub fn kind(&self) -> DecisionKind {
        match self {
            Self::EmitActions { .. } => DecisionKind::EmitActions,
            Self::Guard { .. } => DecisionKind::Guard,
            Self::Noop => DecisionKind::Noop,
        }
    }
}
