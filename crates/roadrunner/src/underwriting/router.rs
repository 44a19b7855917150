use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ApplicantProfile, ApplicationId};
use super::repository::{ApplicationRepository, NotificationPublisher, RepositoryError};
use super::scoring::{debt_to_income_ratio, loan_to_income_ratio, ScoreComponent};
use super::service::{ApplicationServiceError, LoanApplicationService};

/// Router builder exposing HTTP endpoints for intake, assessment previews,
/// and dashboard reads.
pub fn application_router<R, N>(service: Arc<LoanApplicationService<R, N>>) -> Router
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/loan/applications",
            post(submit_handler::<R, N>).get(list_handler::<R, N>),
        )
        .route(
            "/api/v1/loan/applications/:application_id",
            get(status_handler::<R, N>),
        )
        .route("/api/v1/loan/assessments", post(assessment_handler::<R, N>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    50
}

/// Review-step figures the wizard displays alongside the score.
#[derive(Debug, Serialize)]
pub(crate) struct AssessmentView {
    pub(crate) score: u8,
    pub(crate) band: &'static str,
    pub(crate) debt_to_income_pct: f32,
    pub(crate) loan_to_income_pct: f32,
    pub(crate) net_monthly_income: i64,
    pub(crate) components: Vec<ScoreComponent>,
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.submit(profile) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(ApplicationServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ApplicationServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "application already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.recent(params.limit) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.status_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ApplicationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "application not found",
                "application_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn assessment_handler<R, N>(
    State(service): State<Arc<LoanApplicationService<R, N>>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let assessment = service.assess(&profile);
    let net_monthly_income =
        i64::from(profile.income.monthly_income) - i64::from(profile.obligations.monthly_expenses);

    let view = AssessmentView {
        score: assessment.score,
        band: assessment.band.label(),
        debt_to_income_pct: debt_to_income_ratio(&profile) * 100.0,
        loan_to_income_pct: loan_to_income_ratio(&profile) * 100.0,
        net_monthly_income,
        components: assessment.components,
    };

    (StatusCode::OK, axum::Json(view)).into_response()
}
