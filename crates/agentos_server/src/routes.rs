//! HTTP routes.

use crate::{ApiError, AppState};
use agentos_core::{
    HealthResponse, SceneAnalysisRequest, SceneAnalysisResponse, ShotSuggestionsRequest,
    ShotSuggestionsResponse,
};
use agentos_error::{AgentosError, ServerError, ServerErrorKind};
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::instrument;

/// Creates the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/agents/scene-analysis", post(scene_analysis))
        .route("/agents/shot-suggestions", post(shot_suggestions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the router on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.service_name()))
}

#[instrument(
    skip_all,
    fields(
        project_id = %request.project_id,
        scene_id = %request.scene_id,
        language = %request.language,
    )
)]
async fn scene_analysis(
    State(state): State<AppState>,
    Json(request): Json<SceneAnalysisRequest>,
) -> Result<Json<SceneAnalysisResponse>, ApiError> {
    require_identifier("projectId", &request.project_id)?;
    require_identifier("sceneId", &request.scene_id)?;

    let outputs = state
        .analyzer()
        .analyze(&request.project_id, &request.scene_id, &request.agent_types)
        .await?;

    Ok(Json(SceneAnalysisResponse { outputs }))
}

#[track_caller]
fn require_identifier(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        let err = ServerError::new(ServerErrorKind::InvalidRequest(format!(
            "{} must not be empty",
            field
        )));
        return Err(AgentosError::from(err).into());
    }
    Ok(())
}

#[instrument(skip_all, fields(project_id = %request.project_id, scene_id = %request.scene_id))]
async fn shot_suggestions(
    Json(request): Json<ShotSuggestionsRequest>,
) -> Json<ShotSuggestionsResponse> {
    tracing::info!("Shot suggestions are not available yet");
    Json(ShotSuggestionsResponse::default())
}
