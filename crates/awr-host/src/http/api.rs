use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use awr_actions::{Action, ActionDecodeError, ActionRequest, Observation, generate_spec};
use utoipa::OpenApi;

use crate::config::API_KEY_HEADER;
use crate::http::HttpState;

#[derive(OpenApi)]
#[openapi(paths(execute_action, spec, health))]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

pub fn router(state: HttpState) -> Router<HttpState> {
    Router::new()
        .route(
            "/execute_action",
            post(execute_action)
                .fallback(method_not_allowed)
                .layer(middleware::from_fn_with_state(state, require_api_key)),
        )
        .route("/spec", get(spec).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/openapi.json", get(openapi_json).fallback(method_not_allowed))
}

/// Transport-level rejections. Bodies use the observation envelope so
/// clients parse one shape.
#[derive(Debug)]
enum ApiError {
    Unauthorized,
    MethodNotAllowed,
    NotFound,
    InvalidBody,
    UnknownActionType,
    InvalidPayload,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            ApiError::InvalidBody => (StatusCode::BAD_REQUEST, "Invalid request body"),
            ApiError::UnknownActionType => (StatusCode::BAD_REQUEST, "Unknown action type"),
            ApiError::InvalidPayload => (StatusCode::BAD_REQUEST, "Invalid payload format"),
        }
    }
}

impl From<ActionDecodeError> for ApiError {
    fn from(err: ActionDecodeError) -> Self {
        match err {
            ActionDecodeError::UnknownKind(_) => ApiError::UnknownActionType,
            ActionDecodeError::InvalidPayload { .. } => ApiError::InvalidPayload,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(Observation::failure(message))).into_response()
    }
}

async fn require_api_key(State(state): State<HttpState>, request: Request, next: Next) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    if !state.auth.accepts(presented) {
        tracing::debug!(uri = %request.uri(), "rejecting request without valid API key");
        return ApiError::Unauthorized.into_response();
    }
    next.run(request).await
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub(crate) async fn not_found() -> impl IntoResponse {
    ApiError::NotFound
}

#[utoipa::path(
    post,
    path = "/api/execute_action",
    tag = "actions",
    request_body(
        content = String,
        content_type = "application/json",
        description = "Action request: {\"type\": <kind>, \"payload\": {...}}"
    ),
    responses(
        (status = 200, description = "Action succeeded; body is {success: true, data}"),
        (status = 400, description = "Malformed body, unknown action type or invalid payload"),
        (status = 401, description = "Missing or rejected X-API-Key header"),
        (status = 500, description = "Action failed; body is {success: false, error}"),
    )
)]
async fn execute_action(
    State(state): State<HttpState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Observation>), ApiError> {
    let request: ActionRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;
    let action = Action::decode(request).map_err(|err| {
        tracing::debug!(error = %err, "action request rejected");
        ApiError::from(err)
    })?;

    let observation = state.executor.execute(&action).await;
    let status = if observation.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    tracing::info!(kind = %action.kind, status = status.as_u16(), "action handled");
    Ok((status, Json(observation)))
}

#[utoipa::path(
    get,
    path = "/api/spec",
    tag = "discovery",
    responses((status = 200, description = "Spec of every action kind, keyed by kind tag"))
)]
async fn spec() -> impl IntoResponse {
    Json(generate_spec())
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "discovery",
    responses((status = 200, description = "Server is up"))
)]
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "ok": true,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn openapi_json() -> impl IntoResponse {
    Json(openapi())
}
