pub mod sqlx_action_log_repository_impl;
pub mod sqlx_decision_repository_impl;
pub mod sqlx_event_repository_impl;
