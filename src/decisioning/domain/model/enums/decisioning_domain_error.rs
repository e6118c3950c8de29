use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecisioningDomainError {
    #[error("tenant id is invalid")]
    InvalidTenantId,

    #[error("event type is invalid")]
    InvalidEventType,

    #[error("source system is invalid")]
    InvalidSourceSystem,

    #[error("entity reference is invalid")]
    InvalidEntityRef,

    #[error("correlation id is invalid")]
    InvalidCorrelationId,

    #[error("event payload must be a JSON object")]
    InvalidPayload,

    #[error("occurred_at timestamp is malformed")]
    InvalidOccurredAt,

    #[error("mode override is invalid")]
    InvalidModeOverride,

    #[error("decision status transition is not allowed")]
    InvalidStatusTransition,

    #[error("policy evaluation failed: {0}")]
    PolicyEvaluation(String),

    #[error("action execution failed: {0}")]
    ActionExecution(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
