use revops_decision_api::decisioning::domain::{
    model::{
        commands::ingest_event_command::{IngestEventCommand, IngestEventCommandParts},
        enums::{
            action_status::ActionStatus, decision_status::DecisionStatus,
            decisioning_domain_error::DecisioningDomainError, run_mode::RunMode,
        },
    },
    policies::reason_codes,
    services::event_ingestion_service::EventIngestionService,
};
use serde_json::json;

use crate::support::{
    create_ingestion_harness, discount_command_without_values, lead_captured_command,
    unmatched_command, TENANT_A,
};

#[tokio::test]
async fn enforce_mode_executes_lead_actions() {
    let harness = create_ingestion_harness(RunMode::Enforce);

    let summary = harness
        .service
        .handle_ingest(lead_captured_command(), None)
        .await
        .expect("ingest succeeds");

    assert_eq!(summary.mode, RunMode::Enforce);
    assert_eq!(summary.decisions_created, 1);
    assert_eq!(summary.actions_logged, 2);
    assert!(!summary.skipped_idempotent);

    assert_eq!(harness.email_executor.calls(), 1);
    assert_eq!(harness.task_executor.calls(), 1);

    let rows = harness.action_log_repository.rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.status == ActionStatus::Executed));

    let decisions = harness.decision_repository.decisions();
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].status, DecisionStatus::Executed);
    assert_eq!(decisions[0].event_id, summary.event_id);
}

#[tokio::test]
async fn duplicate_delivery_is_acknowledged_without_side_effects() {
    let harness = create_ingestion_harness(RunMode::Enforce);

    let first = harness
        .service
        .handle_ingest(lead_captured_command(), None)
        .await
        .expect("first ingest succeeds");
    let second = harness
        .service
        .handle_ingest(lead_captured_command(), None)
        .await
        .expect("duplicate ingest succeeds");

    assert!(second.skipped_idempotent);
    assert_eq!(second.event_id, first.event_id);
    assert_eq!(second.decisions_created, 0);
    assert_eq!(second.actions_logged, 0);

    assert_eq!(harness.event_repository.insert_calls(), 2);
    assert_eq!(harness.event_repository.stored_events().len(), 1);
    assert_eq!(harness.decision_repository.decisions().len(), 1);
    assert_eq!(harness.email_executor.calls(), 1);
    assert_eq!(harness.task_executor.calls(), 1);
}

#[tokio::test]
async fn shadow_mode_logs_everything_and_executes_nothing() {
    let harness = create_ingestion_harness(RunMode::Shadow);

    let summary = harness
        .service
        .handle_ingest(lead_captured_command(), None)
        .await
        .expect("ingest succeeds");

    assert_eq!(summary.mode, RunMode::Shadow);
    assert_eq!(summary.actions_logged, 2);
    assert_eq!(harness.email_executor.calls(), 0);
    assert_eq!(harness.task_executor.calls(), 0);

    let rows = harness.action_log_repository.rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.status == ActionStatus::Logged));

    let decisions = harness.decision_repository.decisions();
    assert_eq!(decisions[0].status, DecisionStatus::Approved);
}

#[tokio::test]
async fn per_request_mode_override_beats_the_default() {
    let harness = create_ingestion_harness(RunMode::Shadow);

    let summary = harness
        .service
        .handle_ingest(lead_captured_command(), Some(RunMode::Enforce))
        .await
        .expect("ingest succeeds");

    assert_eq!(summary.mode, RunMode::Enforce);
    assert_eq!(harness.email_executor.calls(), 1);
    assert_eq!(harness.task_executor.calls(), 1);
}

#[tokio::test]
async fn unrouted_event_is_stored_and_acknowledged() {
    let harness = create_ingestion_harness(RunMode::Enforce);

    let summary = harness
        .service
        .handle_ingest(unmatched_command(), None)
        .await
        .expect("ingest succeeds");

    assert_eq!(summary.decisions_created, 0);
    assert_eq!(summary.actions_logged, 0);
    assert_eq!(harness.event_repository.stored_events().len(), 1);
    assert!(harness.decision_repository.decisions().is_empty());
}

#[tokio::test]
async fn failed_action_is_isolated_and_the_decision_marked_failed() {
    let harness = create_ingestion_harness(RunMode::Enforce);
    harness.task_executor.fail_with("task provider unavailable");

    let error = harness
        .service
        .handle_ingest(lead_captured_command(), None)
        .await
        .expect_err("failure must surface");
    assert!(matches!(error, DecisioningDomainError::ActionExecution(_)));

    let rows = harness.action_log_repository.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].status, ActionStatus::Executed);
    assert_eq!(rows[1].status, ActionStatus::Failed);
    assert_eq!(
        rows[1].error_text.as_deref(),
        Some("action execution failed: task provider unavailable")
    );

    let decisions = harness.decision_repository.decisions();
    assert_eq!(decisions[0].status, DecisionStatus::Failed);
}

#[tokio::test]
async fn dispatch_failure_never_drops_recorded_decisions() {
    let harness = create_ingestion_harness(RunMode::Enforce);
    harness.email_executor.fail_with("smtp relay down");
    harness.task_executor.fail_with("task provider unavailable");

    let error = harness
        .service
        .handle_ingest(lead_captured_command(), None)
        .await
        .expect_err("failure must surface");
    assert!(matches!(error, DecisioningDomainError::ActionExecution(_)));

    let decisions = harness.decision_repository.decisions();
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].status, DecisionStatus::Failed);

    let rows = harness.action_log_repository.rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.status == ActionStatus::Failed));
}

#[tokio::test]
async fn action_without_executor_is_skipped_not_failed() {
    let harness = create_ingestion_harness(RunMode::Enforce);
    let command = IngestEventCommand::new(IngestEventCommandParts {
        tenant_id: TENANT_A.to_string(),
        event_type: "subscription_renewal_due".to_string(),
        source_system: "billing".to_string(),
        entity_type: "account".to_string(),
        entity_id: "acct-3".to_string(),
        correlation_id: "corr-renewal".to_string(),
        payload: json!({ "billing_email": "ops@example.com" }),
        occurred_at: Some("2026-03-14T09:00:00Z".to_string()),
    })
    .expect("valid renewal command");

    let summary = harness
        .service
        .handle_ingest(command, None)
        .await
        .expect("skip is not a failure");

    assert_eq!(summary.actions_logged, 1);
    let rows = harness.action_log_repository.rows();
    assert_eq!(rows[0].status, ActionStatus::Skipped);
    assert!(rows[0].error_text.is_none());
    assert_eq!(
        rows[0]
            .result
            .as_ref()
            .and_then(|v| v.get("skip_reason"))
            .and_then(|v| v.as_str()),
        Some(reason_codes::ACTION_NOT_IMPLEMENTED)
    );

    let decisions = harness.decision_repository.decisions();
    assert_eq!(decisions[0].status, DecisionStatus::Executed);
}

#[tokio::test]
async fn policy_error_aborts_the_pipeline_but_keeps_the_event() {
    let harness = create_ingestion_harness(RunMode::Enforce);

    let error = harness
        .service
        .handle_ingest(discount_command_without_values(), None)
        .await
        .expect_err("unpriceable discount must error");
    assert!(matches!(error, DecisioningDomainError::PolicyEvaluation(_)));

    assert_eq!(harness.event_repository.stored_events().len(), 1);
    assert!(harness.decision_repository.decisions().is_empty());

    let retry = harness
        .service
        .handle_ingest(discount_command_without_values(), None)
        .await
        .expect("retry short-circuits");
    assert!(retry.skipped_idempotent);
}
