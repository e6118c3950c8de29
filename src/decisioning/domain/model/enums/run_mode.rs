use std::str::FromStr;

use super::decisioning_domain_error::DecisioningDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunMode {
    Shadow,
    Enforce,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shadow => "shadow",
            Self::Enforce => "enforce",
        }
    }
}

impl FromStr for RunMode {
    type Err = DecisioningDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "shadow" => Ok(Self::Shadow),
            "enforce" => Ok(Self::Enforce),
            _ => Err(DecisioningDomainError::InvalidModeOverride),
        }
    }
}
