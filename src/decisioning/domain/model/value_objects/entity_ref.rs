use crate::decisioning::domain::model::enums::decisioning_domain_error::DecisioningDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntityRef {
    entity_type: String,
    entity_id: String,
}

impl EntityRef {
    pub fn new(entity_type: String, entity_id: String) -> Result<Self, DecisioningDomainError> {
        let entity_type = entity_type.trim().to_string();
        let entity_id = entity_id.trim().to_string();
        if entity_type.is_empty() || entity_id.is_empty() {
            return Err(DecisioningDomainError::InvalidEntityRef);
        }
        Ok(Self {
            entity_type,
            entity_id,
        })
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }
}
