pub mod decisioning_error_response_resource;
pub mod guard_check_request_resource;
pub mod ingest_event_request_resource;
