pub mod sqlx_email_schedule_executor_impl;
pub mod sqlx_task_create_executor_impl;
