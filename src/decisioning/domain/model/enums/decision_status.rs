use std::str::FromStr;

use super::decisioning_domain_error::DecisioningDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecisionStatus {
    Proposed,
    Approved,
    Executed,
    Failed,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Approved => "approved",
            Self::Executed => "executed",
            Self::Failed => "failed",
        }
    }

    pub fn can_transition_to(&self, next: DecisionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Proposed, Self::Approved)
                | (Self::Proposed, Self::Failed)
                | (Self::Approved, Self::Executed)
                | (Self::Approved, Self::Failed)
        )
    }
}

impl FromStr for DecisionStatus {
    type Err = DecisioningDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "proposed" => Ok(Self::Proposed),
            "approved" => Ok(Self::Approved),
            "executed" => Ok(Self::Executed),
            "failed" => Ok(Self::Failed),
            _ => Err(DecisioningDomainError::InfrastructureError(
                "invalid decision status stored".to_string(),
            )),
        }
    }
}
