use crate::decisioning::domain::model::enums::decisioning_domain_error::DecisioningDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EventType(String);

impl EventType {
    pub fn new(value: String) -> Result<Self, DecisioningDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DecisioningDomainError::InvalidEventType);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
