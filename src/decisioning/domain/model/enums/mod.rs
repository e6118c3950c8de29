pub mod action_severity;
pub mod action_status;
pub mod action_target;
pub mod action_type;
pub mod decision_kind;
pub mod decision_status;
pub mod decisioning_domain_error;
pub mod guard_result;
pub mod run_mode;
