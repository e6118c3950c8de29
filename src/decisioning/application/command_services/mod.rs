pub mod action_dispatch_service_impl;
pub mod event_ingestion_service_impl;
