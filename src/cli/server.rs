//! HTTP server mode for the trivia API

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{
        header::{ALLOW, AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, Method, StatusCode,
    },
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::{Permission, TokenVerifier};
use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::pagination::PageNumber;
use crate::quiz::QuizRequest;
use crate::search;
use crate::service::{QuizView, TriviaService};
use crate::types::NewQuestion;

/// App state shared across handlers
#[derive(Clone)]
pub struct AppState {
    service: TriviaService,
    verifier: Option<TokenVerifier>,
}

impl AppState {
    /// Build state; `verifier` is `None` when auth is disabled
    pub fn new(service: TriviaService, verifier: Option<TokenVerifier>) -> Self {
        Self { service, verifier }
    }

    /// Require `permission` when auth is enabled
    fn authorize(&self, headers: &HeaderMap, permission: Permission) -> Result<()> {
        if let Some(verifier) = &self.verifier {
            let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
            verifier.authorize(header, permission)?;
        }
        Ok(())
    }
}

/// Success wrapper: `{"success": true, ...fields}`
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(flatten)]
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error body: `{"success": false, "error": <status>, "message": ...}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Request was not formatted correctly.",
        StatusCode::UNAUTHORIZED => "Authentication is required.",
        StatusCode::FORBIDDEN => "Permission not granted.",
        StatusCode::NOT_FOUND => "Resource not found.",
        StatusCode::METHOD_NOT_ALLOWED => "Given HTTP method is not allowed for this endpoint.",
        StatusCode::UNPROCESSABLE_ENTITY => "Request body was unable to be processed.",
        _ => "Internal server error.",
    }
}

fn error_body(status: StatusCode, detail: Option<String>) -> Response {
    let body = ErrorBody {
        success: false,
        error: status.as_u16(),
        message: status_message(status),
        detail,
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            error_body(status, None)
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
            error_body(status, Some(self.to_string()))
        }
    }
}

fn success<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(category_questions))
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/:id", delete(delete_question))
        .route("/quizzes", post(quiz_question))
        .fallback(not_found)
        .layer(map_response(json_method_not_allowed))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {host}:{port}: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| Error::config(format!("Failed to read bound address: {e}")))?;
    tracing::info!("Starting HTTP server on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

// ============================================================================
// Request helpers
// ============================================================================

/// Parse a JSON request body; syntax errors are 400s
fn parse_body(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::bad_request("request body is empty"));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Page number from the `page` query parameter
fn page_param(params: &HashMap<String, String>) -> PageNumber {
    PageNumber::from_query(params.get("page").map(String::as_str))
}

/// Integer path segment; anything else is an unknown route
fn id_param(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::not_found(format!("no route for id '{raw}'")))
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// `GET /categories`
async fn list_categories(State(state): State<Arc<AppState>>) -> Result<Response> {
    Ok(success(state.service.categories()?))
}

/// `GET /questions?page=n`
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    Ok(success(state.service.questions(page_param(&params))?))
}

/// `GET /categories/:id/questions?page=n`
async fn category_questions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response> {
    let category = id_param(&id)?;
    Ok(success(
        state
            .service
            .questions_for_category(category, page_param(&params))?,
    ))
}

/// `POST /questions`: search when `searchTerm` is set, create otherwise
async fn create_or_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Response> {
    let value = parse_body(&body)?;
    let Value::Object(fields) = &value else {
        return Err(Error::validation("request body must be a JSON object"));
    };

    let term = fields
        .get("searchTerm")
        .and_then(Value::as_str)
        .and_then(search::normalize_term);
    if let Some(term) = term {
        return Ok(success(state.service.search(term, page_param(&params))?));
    }

    state.authorize(&headers, Permission::PostQuestions)?;
    let question: NewQuestion = serde_json::from_value(value)
        .map_err(|e| Error::validation(format!("invalid question: {e}")))?;
    Ok(success(state.service.create(question)?))
}

/// `DELETE /questions/:id`
async fn delete_question(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = id_param(&id)?;
    state.authorize(&headers, Permission::DeleteQuestions)?;
    Ok(success(state.service.delete(id)?))
}

/// `POST /quizzes`
async fn quiz_question(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response> {
    let request: QuizRequest = serde_json::from_value(parse_body(&body)?)
        .map_err(|e| Error::validation(format!("invalid quiz request: {e}")))?;

    match state.service.quiz(&request) {
        Outcome::Found(question) => Ok(success(QuizView {
            question: Some(question),
        })),
        Outcome::Empty => Ok(success(QuizView { question: None })),
        Outcome::Fault(e) => Err(e),
    }
}

/// Unknown routes
async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, None)
}

/// Give the router's bare 405 responses a JSON body
async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(CONTENT_TYPE)
    {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let mut replaced = error_body(StatusCode::METHOD_NOT_ALLOWED, None);
    if let Some(allow) = allow {
        replaced.headers_mut().insert(ALLOW, allow);
    }
    replaced
}
