use axum::Router;
use dotenvy::dotenv;
use revops_decision_api::{
    config::app_config::AppConfig,
    decisioning::{
        build_decisioning_router,
        interfaces::rest::resources::{
            decisioning_error_response_resource::DecisioningErrorResponseResource,
            guard_check_request_resource::{
                GuardCheckRequestResource, GuardCheckResponseResource, GuardVerdictResource,
            },
            ingest_event_request_resource::{
                IngestEventRequestResource, IngestEventResponseResource,
            },
        },
    },
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        revops_decision_api::decisioning::interfaces::rest::controllers::decisioning_rest_controller::ingest_event,
        revops_decision_api::decisioning::interfaces::rest::controllers::decisioning_rest_controller::evaluate_guard
    ),
    components(
        schemas(
            IngestEventRequestResource,
            IngestEventResponseResource,
            GuardCheckRequestResource,
            GuardCheckResponseResource,
            GuardVerdictResource,
            DecisioningErrorResponseResource
        )
    ),
    tags(
        (name = "decisioning", description = "Policy/decision kernel: event ingestion, guard checks, action dispatch")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let decisioning_router = build_decisioning_router(&config)
        .await
        .expect("failed to build decisioning router");

    let app = Router::new()
        .merge(decisioning_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(mode = config.decisioning_mode.as_str(), %addr, "decisioning API listening");
    info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
