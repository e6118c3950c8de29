pub mod guard_evaluation_service_impl;
