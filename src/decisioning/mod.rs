use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    decisioning::{
        application::{
            command_services::{
                action_dispatch_service_impl::ActionDispatchServiceImpl,
                event_ingestion_service_impl::EventIngestionServiceImpl,
            },
            query_services::guard_evaluation_service_impl::GuardEvaluationServiceImpl,
        },
        domain::services::runtime_context::SystemClock,
        infrastructure::{
            executors::{
                action_executor::{ActionExecutor, ExecutorRegistry},
                postgres::{
                    sqlx_email_schedule_executor_impl::SqlxEmailScheduleExecutorImpl,
                    sqlx_task_create_executor_impl::SqlxTaskCreateExecutorImpl,
                },
            },
            persistence::repositories::postgres::{
                sqlx_action_log_repository_impl::SqlxActionLogRepositoryImpl,
                sqlx_decision_repository_impl::SqlxDecisionRepositoryImpl,
                sqlx_event_repository_impl::SqlxEventRepositoryImpl,
            },
        },
        interfaces::rest::controllers::decisioning_rest_controller::{
            DecisioningRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_decisioning_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let event_repository = Arc::new(SqlxEventRepositoryImpl::new(pool.clone()));
    let decision_repository = Arc::new(SqlxDecisionRepositoryImpl::new(pool.clone()));
    let action_log_repository = Arc::new(SqlxActionLogRepositoryImpl::new(pool.clone()));

    let executors: Vec<Arc<dyn ActionExecutor>> = vec![
        Arc::new(SqlxEmailScheduleExecutorImpl::new(pool.clone())),
        Arc::new(SqlxTaskCreateExecutorImpl::new(pool)),
    ];
    let executor_registry = Arc::new(ExecutorRegistry::new(executors));

    let clock = Arc::new(SystemClock);
    let dispatch_service = Arc::new(ActionDispatchServiceImpl::new(
        action_log_repository,
        executor_registry,
    ));
    let ingestion_service = Arc::new(EventIngestionServiceImpl::new(
        event_repository.clone(),
        decision_repository.clone(),
        dispatch_service,
        clock.clone(),
        config.decisioning_mode,
    ));
    let guard_service = Arc::new(GuardEvaluationServiceImpl::new(
        event_repository,
        decision_repository,
        clock,
    ));

    Ok(router(DecisioningRestControllerState {
        ingestion_service,
        guard_service,
    }))
}
