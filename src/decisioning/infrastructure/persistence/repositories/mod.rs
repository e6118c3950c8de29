pub mod action_log_repository;
pub mod decision_repository;
pub mod event_repository;
pub mod postgres;
