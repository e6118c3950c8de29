use std::{str::FromStr, sync::Arc};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::decisioning::{
    domain::{
        model::{
            commands::ingest_event_command::{IngestEventCommand, IngestEventCommandParts},
            enums::{
                decisioning_domain_error::DecisioningDomainError, run_mode::RunMode,
            },
        },
        services::{
            event_ingestion_service::EventIngestionService,
            guard_evaluation_service::GuardEvaluationService,
        },
    },
    interfaces::rest::resources::{
        decisioning_error_response_resource::DecisioningErrorResponseResource,
        guard_check_request_resource::{
            GuardCheckRequestResource, GuardCheckResponseResource, GuardVerdictResource,
        },
        ingest_event_request_resource::{
            IngestEventRequestResource, IngestEventResponseResource,
        },
    },
};

#[derive(Clone)]
pub struct DecisioningRestControllerState {
    pub ingestion_service: Arc<dyn EventIngestionService>,
    pub guard_service: Arc<dyn GuardEvaluationService>,
}

pub fn router(state: DecisioningRestControllerState) -> Router {
    Router::new()
        .route("/v1/decisioning/events/ingest", post(ingest_event))
        .route("/v1/decisioning/guards/evaluate", post(evaluate_guard))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/v1/decisioning/events/ingest",
    tag = "decisioning",
    request_body = IngestEventRequestResource,
    responses(
        (status = 200, description = "Event ingested (or recognized as a duplicate)", body = IngestEventResponseResource),
        (status = 400, description = "Invalid request", body = DecisioningErrorResponseResource),
        (status = 500, description = "Policy, action or infrastructure failure", body = DecisioningErrorResponseResource)
    )
)]
pub async fn ingest_event(
    State(state): State<DecisioningRestControllerState>,
    Json(request): Json<IngestEventRequestResource>,
) -> Result<
    Json<IngestEventResponseResource>,
    (StatusCode, Json<DecisioningErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(DecisioningErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let mode_override = match request.mode.as_deref() {
        None => None,
        Some(raw) => Some(RunMode::from_str(raw).map_err(map_domain_error)?),
    };

    let command = IngestEventCommand::new(IngestEventCommandParts {
        tenant_id: request.tenant_id,
        event_type: request.event_type,
        source_system: request.source_system,
        entity_type: request.entity_type,
        entity_id: request.entity_id,
        correlation_id: request.correlation_id,
        payload: request.payload,
        occurred_at: request.occurred_at,
    })
    .map_err(map_domain_error)?;

    let summary = state
        .ingestion_service
        .handle_ingest(command, mode_override)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(IngestEventResponseResource {
        event_id: summary.event_id,
        correlation_id: summary.correlation_id,
        mode: summary.mode.as_str().to_string(),
        decisions_created: summary.decisions_created,
        actions_logged: summary.actions_logged,
        skipped_idempotent: summary.skipped_idempotent,
    }))
}

#[utoipa::path(
    post,
    path = "/v1/decisioning/guards/evaluate",
    tag = "decisioning",
    request_body = GuardCheckRequestResource,
    responses(
        (status = 200, description = "Guard verdict (strictest across matching policies)", body = GuardCheckResponseResource),
        (status = 400, description = "Invalid request", body = DecisioningErrorResponseResource),
        (status = 500, description = "Policy or infrastructure failure", body = DecisioningErrorResponseResource)
    )
)]
pub async fn evaluate_guard(
    State(state): State<DecisioningRestControllerState>,
    Json(request): Json<GuardCheckRequestResource>,
) -> Result<
    Json<GuardCheckResponseResource>,
    (StatusCode, Json<DecisioningErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(DecisioningErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = IngestEventCommand::new(IngestEventCommandParts {
        tenant_id: request.tenant_id,
        event_type: request.event_type,
        source_system: request.source_system,
        entity_type: request.entity_type,
        entity_id: request.entity_id,
        correlation_id: request.correlation_id,
        payload: request.payload,
        occurred_at: request.occurred_at,
    })
    .map_err(map_domain_error)?;

    let result = state
        .guard_service
        .handle_guard_check(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(GuardCheckResponseResource {
        event_id: result.event_id,
        correlation_id: result.correlation_id,
        decision_ids: result.decision_ids,
        guard: GuardVerdictResource {
            result: result.verdict.result.as_str().to_string(),
            reason_code: result.verdict.reason_code,
            reason_text: result.verdict.reason_text,
            override_required: result.verdict.override_required,
        },
    }))
}

fn map_domain_error(
    error: DecisioningDomainError,
) -> (StatusCode, Json<DecisioningErrorResponseResource>) {
    let status = match error {
        DecisioningDomainError::InvalidTenantId
        | DecisioningDomainError::InvalidEventType
        | DecisioningDomainError::InvalidSourceSystem
        | DecisioningDomainError::InvalidEntityRef
        | DecisioningDomainError::InvalidCorrelationId
        | DecisioningDomainError::InvalidPayload
        | DecisioningDomainError::InvalidOccurredAt
        | DecisioningDomainError::InvalidModeOverride => StatusCode::BAD_REQUEST,
        DecisioningDomainError::InvalidStatusTransition
        | DecisioningDomainError::PolicyEvaluation(_)
        | DecisioningDomainError::ActionExecution(_)
        | DecisioningDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(DecisioningErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
