pub mod action_dispatch_service;
pub mod decision_engine;
pub mod event_ingestion_service;
pub mod guard_evaluation_service;
pub mod runtime_context;
