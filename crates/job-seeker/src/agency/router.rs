use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::application::ApplicationView;
use super::folder::CandidateFolder;
use super::service::{AgencyError, HumanResourcesAgency};
use super::user::UserView;
use super::ErrorKind;

/// Header carrying the username that the upstream identity proxy extracted from the verified
/// bearer token.
pub const SUBJECT_HEADER: &str = "x-authenticated-subject";

/// One agency per process, serialized behind a single lock.
pub type SharedAgency<F> = Arc<Mutex<HumanResourcesAgency<F>>>;

/// Router builder exposing the agency operations for the authenticated caller.
pub fn agency_router<F>(agency: SharedAgency<F>) -> Router
where
    F: CandidateFolder + 'static,
{
    Router::new()
        .route("/api/v1/candidates", post(register_handler::<F>))
        .route("/api/v1/candidates/me", get(profile_handler::<F>))
        .route(
            "/api/v1/candidates/me/applications",
            get(list_applications_handler::<F>).post(apply_handler::<F>),
        )
        .route(
            "/api/v1/candidates/me/applications/summary",
            get(summary_handler::<F>),
        )
        .route(
            "/api/v1/candidates/me/applications/comments",
            post(comment_handler::<F>),
        )
        .with_state(agency)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RegistrationRequest {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyRequest {
    pub(crate) position: String,
    pub(crate) company: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationQuery {
    pub(crate) position: String,
    pub(crate) company: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentRequest {
    pub(crate) position: String,
    pub(crate) company: String,
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApplicationSummary {
    pub(crate) applied: bool,
    pub(crate) total: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct CommentReceipt {
    pub(crate) position: String,
    pub(crate) company: String,
    pub(crate) date: NaiveDate,
    pub(crate) number_of_comments: usize,
}

/// Failure raised while serving an agency request.
#[derive(Debug)]
pub(crate) enum RouteError {
    MissingSubject,
    Unavailable,
    Agency(AgencyError),
}

impl From<AgencyError> for RouteError {
    fn from(value: AgencyError) -> Self {
        Self::Agency(value)
    }
}

pub(crate) fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Ordering => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        match self {
            RouteError::MissingSubject => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "missing authenticated subject" })),
            )
                .into_response(),
            RouteError::Unavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "agency state unavailable" })),
            )
                .into_response(),
            RouteError::Agency(error) => {
                let kind = error.kind();
                let payload = json!({
                    "error": error.to_string(),
                    "kind": kind,
                });
                (status_for(kind), Json(payload)).into_response()
            }
        }
    }
}

fn subject(headers: &HeaderMap) -> Result<String, RouteError> {
    headers
        .get(SUBJECT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(RouteError::MissingSubject)
}

fn lock<F>(
    agency: &SharedAgency<F>,
) -> Result<MutexGuard<'_, HumanResourcesAgency<F>>, RouteError> {
    agency.lock().map_err(|_| RouteError::Unavailable)
}

pub(crate) async fn register_handler<F>(
    State(agency): State<SharedAgency<F>>,
    headers: HeaderMap,
    body: Option<Json<RegistrationRequest>>,
) -> Result<Response, RouteError>
where
    F: CandidateFolder + 'static,
{
    let username = subject(&headers)?;
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let mut agency = lock(&agency)?;
    match (request.name.as_deref(), request.email.as_deref()) {
        (None, None) => agency.register(&username)?,
        (name, email) => agency.register_with_profile(
            &username,
            name.unwrap_or_default(),
            email.unwrap_or_default(),
        )?,
    }
    let view = agency.user_from(&username)?.view();
    Ok((StatusCode::CREATED, Json(view)).into_response())
}

pub(crate) async fn profile_handler<F>(
    State(agency): State<SharedAgency<F>>,
    headers: HeaderMap,
) -> Result<Json<UserView>, RouteError>
where
    F: CandidateFolder + 'static,
{
    let username = subject(&headers)?;
    let agency = lock(&agency)?;
    Ok(Json(agency.user_from(&username)?.view()))
}

pub(crate) async fn list_applications_handler<F>(
    State(agency): State<SharedAgency<F>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ApplicationView>>, RouteError>
where
    F: CandidateFolder + 'static,
{
    let username = subject(&headers)?;
    let agency = lock(&agency)?;
    let views = agency
        .applications_of(&username)?
        .into_iter()
        .map(|application| application.view())
        .collect();
    Ok(Json(views))
}

pub(crate) async fn apply_handler<F>(
    State(agency): State<SharedAgency<F>>,
    headers: HeaderMap,
    Json(request): Json<ApplyRequest>,
) -> Result<Response, RouteError>
where
    F: CandidateFolder + 'static,
{
    let username = subject(&headers)?;
    let mut agency = lock(&agency)?;
    agency.apply_to_job(
        &username,
        &request.position,
        &request.company,
        &request.description,
    )?;

    let summary = ApplicationSummary {
        applied: agency.candidate_has_applied_to(&username, &request.position, &request.company),
        total: agency.number_of_user_applications(&username),
    };
    Ok((StatusCode::CREATED, Json(summary)).into_response())
}

pub(crate) async fn summary_handler<F>(
    State(agency): State<SharedAgency<F>>,
    headers: HeaderMap,
    Query(query): Query<ApplicationQuery>,
) -> Result<Json<ApplicationSummary>, RouteError>
where
    F: CandidateFolder + 'static,
{
    let username = subject(&headers)?;
    let agency = lock(&agency)?;
    Ok(Json(ApplicationSummary {
        applied: agency.candidate_has_applied_to(&username, &query.position, &query.company),
        total: agency.number_of_user_applications(&username),
    }))
}

pub(crate) async fn comment_handler<F>(
    State(agency): State<SharedAgency<F>>,
    headers: HeaderMap,
    Json(request): Json<CommentRequest>,
) -> Result<Response, RouteError>
where
    F: CandidateFolder + 'static,
{
    let username = subject(&headers)?;
    let mut agency = lock(&agency)?;
    agency.comment_application(&username, &request.position, &request.company, &request.text)?;

    let number_of_comments = agency
        .applications_of(&username)?
        .into_iter()
        .find(|application| {
            application.company() == request.company && application.has_position(&request.position)
        })
        .map_or(0, |application| application.number_of_comments());

    let receipt = CommentReceipt {
        position: request.position,
        company: request.company,
        date: agency.today(),
        number_of_comments,
    };
    Ok((StatusCode::CREATED, Json(receipt)).into_response())
}
