pub mod business_event;
pub mod guard_verdict;
pub mod policy_decision;
pub mod proposed_action;
