use std::str::FromStr;

use super::decisioning_domain_error::DecisioningDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecisionKind {
    EmitActions,
    Guard,
    Noop,
}

impl DecisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmitActions => "emit_actions",
            Self::Guard => "guard",
            Self::Noop => "noop",
        }
    }
}

impl FromStr for DecisionKind {
    type Err = DecisioningDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "emit_actions" => Ok(Self::EmitActions),
            "guard" => Ok(Self::Guard),
            "noop" => Ok(Self::Noop),
            _ => Err(DecisioningDomainError::InfrastructureError(
                "invalid decision kind stored".to_string(),
            )),
        }
    }
}
