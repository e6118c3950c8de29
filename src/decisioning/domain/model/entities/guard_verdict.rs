use serde::{Deserialize, Serialize};

use crate::decisioning::domain::model::enums::guard_result::GuardResult;

pub const REASON_NO_GUARD_POLICY_MATCHED: &str = "no_guard_policy_matched";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuardVerdict {
    pub result: GuardResult,
    pub reason_code: String,
    pub reason_text: String,
    pub override_required: bool,
}

impl GuardVerdict {
    pub fn allow(reason_code: &str, reason_text: &str) -> Self {
        Self {
            result: GuardResult::Allow,
            reason_code: reason_code.to_string(),
            reason_text: reason_text.to_string(),
            override_required: false,
        }
    }

    pub fn allow_with_override(reason_code: &str, reason_text: &str) -> Self {
        Self {
            result: GuardResult::AllowWithOverride,
            reason_code: reason_code.to_string(),
            reason_text: reason_text.to_string(),
            override_required: true,
        }
    }

    pub fn block(reason_code: &str, reason_text: &str) -> Self {
        Self {
            result: GuardResult::Block,
            reason_code: reason_code.to_string(),
            reason_text: reason_text.to_string(),
            override_required: false,
        }
    }

    pub fn allow_unmatched() -> Self {
        Self::allow(REASON_NO_GUARD_POLICY_MATCHED, "no guard policy matched")
    }

    pub fn strictest(verdicts: Vec<GuardVerdict>) -> Option<GuardVerdict> {
        verdicts
            .into_iter()
            .max_by(|a, b| a.result.cmp(&b.result))
    }
}
