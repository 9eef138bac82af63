use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::api::{
    ApiActivitiesResponse, ApiActivityRequest, ApiPromotionRequest, ApiSessionResponse,
    ApiShareResponse,
};
use mixplan::config::EngineConfig;
use mixplan::recommend::{ActivityError, ActivitySelection, ShareContext, ShareLinkBuilder};
use mixplan::reference::ReferenceData;
use mixplan::{
    plan_promotion_mix, recommend_strategy, PromotionMixOutput, Recommendations, Selection,
    WizardError, WizardState,
};

type ApiError = (StatusCode, String);

/// One planning session: the strategy flow plus the promotion mix the user is assembling.
#[derive(Debug, Clone, Default)]
struct Session {
    wizard: WizardState,
    activities: ActivitySelection,
}

impl Session {
    fn response(&self, session_id: &str) -> ApiSessionResponse {
        ApiSessionResponse::from_state(session_id.to_string(), &self.wizard, &self.activities)
    }
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl AppState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

static SESSION_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs, config: EngineConfig) -> Result<(), String> {
    let app = router(AppState::new(config));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "serving marketing planner API");
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/reference", get(reference_handler))
        .route("/api/strategy", post(strategy_handler))
        .route("/api/promotion", post(promotion_handler))
        .route("/api/share", post(share_handler))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/select", post(select_handler))
        .route("/api/sessions/:id/next", post(next_handler))
        .route("/api/sessions/:id/previous", post(previous_handler))
        .route("/api/sessions/:id/restart", post(restart_handler))
        .route("/api/sessions/:id/recommendations", get(session_recommendations))
        .route("/api/sessions/:id/share", get(session_share))
        .route("/api/sessions/:id/promotion", post(session_promotion))
        .route("/api/sessions/:id/activities", get(list_activities).post(toggle_activity))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn reference_handler() -> Json<ReferenceData> {
    Json(ReferenceData::builtin())
}

async fn strategy_handler(Json(wizard): Json<WizardState>) -> Json<Recommendations> {
    Json(recommend_strategy(&wizard))
}

async fn promotion_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiPromotionRequest>,
) -> Result<Json<PromotionMixOutput>, ApiError> {
    let input = request
        .into_input()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    Ok(Json(plan_promotion_mix(&input, &state.config)))
}

async fn share_handler(
    State(state): State<AppState>,
    Json(wizard): Json<WizardState>,
) -> Json<ApiShareResponse> {
    Json(share_response(&state.config, &wizard))
}

async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<ApiSessionResponse>) {
    let session_id = generate_session_id();
    let session = Session::default();
    let response = session.response(&session_id);
    state.sessions.lock().await.insert(session_id.clone(), session);
    tracing::info!(session_id = %session_id, "session created");
    (StatusCode::CREATED, Json(response))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiSessionResponse>, ApiError> {
    with_session(&state, &id, |session| Ok(session.response(&id)))
        .await
        .map(Json)
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = state.sessions.lock().await.remove(&id);
    match removed {
        Some(_) => {
            tracing::info!(session_id = %id, "session ended");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(session_not_found(&id)),
    }
}

async fn select_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(selection): Json<Selection>,
) -> Result<Json<ApiSessionResponse>, ApiError> {
    with_session(&state, &id, |session| {
        session.wizard.apply(selection).map_err(wizard_error)?;
        Ok(session.response(&id))
    })
    .await
    .map(Json)
}

async fn next_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiSessionResponse>, ApiError> {
    with_session(&state, &id, |session| {
        session.wizard.next().map_err(wizard_error)?;
        Ok(session.response(&id))
    })
    .await
    .map(Json)
}

async fn previous_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiSessionResponse>, ApiError> {
    with_session(&state, &id, |session| {
        session.wizard.previous().map_err(wizard_error)?;
        Ok(session.response(&id))
    })
    .await
    .map(Json)
}

async fn restart_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiSessionResponse>, ApiError> {
    with_session(&state, &id, |session| {
        session.wizard.restart();
        session.activities.clear();
        Ok(session.response(&id))
    })
    .await
    .map(Json)
}

async fn session_recommendations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recommendations>, ApiError> {
    with_session(&state, &id, |session| Ok(recommend_strategy(&session.wizard)))
        .await
        .map(Json)
}

async fn session_share(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiShareResponse>, ApiError> {
    let config = state.config.clone();
    with_session(&state, &id, |session| Ok(share_response(&config, &session.wizard)))
        .await
        .map(Json)
}

/// Generating a new promotion mix starts the user's activity picks over.
async fn session_promotion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ApiPromotionRequest>,
) -> Result<Json<PromotionMixOutput>, ApiError> {
    let input = request
        .into_input()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let config = state.config.clone();
    with_session(&state, &id, |session| {
        session.activities.clear();
        Ok(plan_promotion_mix(&input, &config))
    })
    .await
    .map(Json)
}

async fn list_activities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiActivitiesResponse>, ApiError> {
    with_session(&state, &id, |session| Ok(ApiActivitiesResponse::new(None, &session.activities)))
        .await
        .map(Json)
}

async fn toggle_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ApiActivityRequest>,
) -> Result<Json<ApiActivitiesResponse>, ApiError> {
    with_session(&state, &id, |session| {
        let selected = session
            .activities
            .toggle(&request.name)
            .map_err(activity_error)?;
        tracing::debug!(session_id = %id, activity = %request.name, selected, "activity toggled");
        Ok(ApiActivitiesResponse::new(Some(selected), &session.activities))
    })
    .await
    .map(Json)
}

async fn with_session<T>(
    state: &AppState,
    id: &str,
    action: impl FnOnce(&mut Session) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    let mut guard = state.sessions.lock().await;
    let session = guard.get_mut(id).ok_or_else(|| session_not_found(id))?;
    action(session)
}

fn share_response(config: &EngineConfig, wizard: &WizardState) -> ApiShareResponse {
    let builder = ShareLinkBuilder::new(&config.share);
    let context = ShareContext::from_state(wizard);
    ApiShareResponse {
        url: builder.build(&context),
        message: builder.message(&context),
    }
}

fn wizard_error(err: WizardError) -> ApiError {
    let status = match err {
        WizardError::ChannelUnavailable
        | WizardError::UnknownChannel { .. }
        | WizardError::InvalidStep(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::CONFLICT,
    };
    (status, err.to_string())
}

fn activity_error(err: ActivityError) -> ApiError {
    (StatusCode::BAD_REQUEST, err.to_string())
}

fn session_not_found(id: &str) -> ApiError {
    (StatusCode::NOT_FOUND, format!("session not found: {}", id))
}

fn generate_session_id() -> String {
    let counter = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("session-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn new_session(app: &Router) -> String {
        let (status, body) = call(app, "POST", "/api/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = router(AppState::new(EngineConfig::default()));
        let (status, _) = call(&app, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn next_is_rejected_until_product_step_is_filled() {
        let app = router(AppState::new(EngineConfig::default()));
        let id = new_session(&app).await;

        let (status, _) = call(&app, "POST", &format!("/api/sessions/{}/next", id), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        for selection in [
            json!({"field": "product_type", "value": "luxury"}),
            json!({"field": "product_stage", "value": "Growth"}),
        ] {
            let (status, _) =
                call(&app, "POST", &format!("/api/sessions/{}/select", id), Some(selection)).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = call(&app, "POST", &format!("/api/sessions/{}/next", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["step"], 2);
    }

    #[tokio::test]
    async fn sessions_do_not_share_state() {
        let app = router(AppState::new(EngineConfig::default()));
        let first = new_session(&app).await;
        let second = new_session(&app).await;
        assert_ne!(first, second);

        let selection = json!({"field": "market_type", "value": "new-existing"});
        call(&app, "POST", &format!("/api/sessions/{}/select", first), Some(selection)).await;

        let (_, first_body) = call(&app, "GET", &format!("/api/sessions/{}", first), None).await;
        let (_, second_body) = call(&app, "GET", &format!("/api/sessions/{}", second), None).await;
        assert_eq!(first_body["state"]["market_type"], "new-existing");
        assert_eq!(second_body["state"]["market_type"], Value::Null);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let app = router(AppState::new(EngineConfig::default()));
        let (status, _) = call(&app, "GET", "/api/sessions/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn promotion_endpoint_ranks_customer_tools() {
        let app = router(AppState::new(EngineConfig::default()));
        let request = json!({"audience": "Customer Centric (B2C)", "product_stage": "growth"});
        let (status, body) = call(&app, "POST", "/api/promotion", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "customer");
        let recommendations = body["recommendations"].as_array().unwrap();
        assert_eq!(recommendations.len(), 12);
        assert_eq!(recommendations[0]["score"], 3);
        assert_eq!(
            recommendations[0]["name"],
            "Advertisements on TV/Newspaper/Magazines/Radio"
        );
    }

    #[tokio::test]
    async fn promotion_endpoint_rejects_unknown_stage() {
        let app = router(AppState::new(EngineConfig::default()));
        let request = json!({"audience": "Mixed Audience", "product_stage": "retired"});
        let (status, _) = call(&app, "POST", "/api/promotion", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generating_a_promotion_mix_clears_picked_activities() {
        let app = router(AppState::new(EngineConfig::default()));
        let id = new_session(&app).await;
        let activities = format!("/api/sessions/{}/activities", id);

        let (status, body) = call(
            &app,
            "POST",
            &activities,
            Some(json!({"name": "Trade Shows"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selected"], true);
        assert_eq!(body["activities"], json!(["Trade Shows"]));

        let (status, _) = call(
            &app,
            "POST",
            &activities,
            Some(json!({"name": "Skywriting"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, session) = call(&app, "GET", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(session["activities"], json!(["Trade Shows"]));

        let request = json!({"audience": "Partner Centric (B2B)"});
        let (status, body) = call(
            &app,
            "POST",
            &format!("/api/sessions/{}/promotion", id),
            Some(request),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "partner");

        let (_, body) = call(&app, "GET", &activities, None).await;
        assert_eq!(body["count"], 0);
        assert_eq!(body["selected"], Value::Null);
    }

    #[tokio::test]
    async fn whitespace_audience_is_scored_as_mixed() {
        let app = router(AppState::new(EngineConfig::default()));
        let request = json!({"audience": "   "});
        let (status, body) = call(&app, "POST", "/api/promotion", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "mixed");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 12);
    }
}
