use std::sync::Arc;

use revops_decision_api::decisioning::{
    application::{
        command_services::{
            action_dispatch_service_impl::ActionDispatchServiceImpl,
            event_ingestion_service_impl::EventIngestionServiceImpl,
        },
        query_services::guard_evaluation_service_impl::GuardEvaluationServiceImpl,
    },
    domain::model::enums::{action_type::ActionType, run_mode::RunMode},
    infrastructure::executors::action_executor::{ActionExecutor, ExecutorRegistry},
};

use super::fakes::{
    FakeActionExecutor, FakeActionLogRepository, FakeDecisionRepository, FakeEventRepository,
    FixedClock,
};

pub struct IngestionHarness {
    pub event_repository: Arc<FakeEventRepository>,
    pub decision_repository: Arc<FakeDecisionRepository>,
    pub action_log_repository: Arc<FakeActionLogRepository>,
    pub email_executor: Arc<FakeActionExecutor>,
    pub task_executor: Arc<FakeActionExecutor>,
    pub service: EventIngestionServiceImpl,
}

pub struct GuardHarness {
    pub event_repository: Arc<FakeEventRepository>,
    pub decision_repository: Arc<FakeDecisionRepository>,
    pub service: GuardEvaluationServiceImpl,
}

pub struct DispatchHarness {
    pub action_log_repository: Arc<FakeActionLogRepository>,
    pub email_executor: Arc<FakeActionExecutor>,
    pub task_executor: Arc<FakeActionExecutor>,
    pub service: ActionDispatchServiceImpl,
}

pub fn create_ingestion_harness(default_mode: RunMode) -> IngestionHarness {
    let event_repository = Arc::new(FakeEventRepository::new());
    let decision_repository = Arc::new(FakeDecisionRepository::new());
    let action_log_repository = Arc::new(FakeActionLogRepository::new());
    let email_executor = Arc::new(FakeActionExecutor::new(ActionType::OutboundEmail));
    let task_executor = Arc::new(FakeActionExecutor::new(ActionType::TaskCreate));

    let executors: Vec<Arc<dyn ActionExecutor>> =
        vec![email_executor.clone(), task_executor.clone()];
    let dispatch_service = Arc::new(ActionDispatchServiceImpl::new(
        action_log_repository.clone(),
        Arc::new(ExecutorRegistry::new(executors)),
    ));

    let service = EventIngestionServiceImpl::new(
        event_repository.clone(),
        decision_repository.clone(),
        dispatch_service,
        Arc::new(FixedClock::new()),
        default_mode,
    );

    IngestionHarness {
        event_repository,
        decision_repository,
        action_log_repository,
        email_executor,
        task_executor,
        service,
    }
}

pub fn create_guard_harness() -> GuardHarness {
    let event_repository = Arc::new(FakeEventRepository::new());
    let decision_repository = Arc::new(FakeDecisionRepository::new());

    let service = GuardEvaluationServiceImpl::new(
        event_repository.clone(),
        decision_repository.clone(),
        Arc::new(FixedClock::new()),
    );

    GuardHarness {
        event_repository,
        decision_repository,
        service,
    }
}

pub fn create_dispatch_harness() -> DispatchHarness {
    let action_log_repository = Arc::new(FakeActionLogRepository::new());
    let email_executor = Arc::new(FakeActionExecutor::new(ActionType::OutboundEmail));
    let task_executor = Arc::new(FakeActionExecutor::new(ActionType::TaskCreate));

    let executors: Vec<Arc<dyn ActionExecutor>> =
        vec![email_executor.clone(), task_executor.clone()];
    let service = ActionDispatchServiceImpl::new(
        action_log_repository.clone(),
        Arc::new(ExecutorRegistry::new(executors)),
    );

    DispatchHarness {
        action_log_repository,
        email_executor,
        task_executor,
        service,
    }
}
