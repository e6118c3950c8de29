pub mod action_executor;
pub mod postgres;
