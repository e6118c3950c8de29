pub mod correlation_id;
pub mod entity_ref;
pub mod event_type;
pub mod idempotency_key;
pub mod source_system;
pub mod tenant_id;
