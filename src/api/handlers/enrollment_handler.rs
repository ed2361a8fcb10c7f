//! Enrollment handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::INVALID_PAYLOAD_MESSAGE;
use crate::domain::{Enrollment, EnrollmentDetails, NewEnrollment};
use crate::errors::{AppError, AppResult, ErrorResponse};

/// Create enrollment routes
pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route(
            "/:id",
            get(get_enrollment)
                .put(update_enrollment)
                .delete(delete_enrollment),
        )
        .route("/cpf/:cpf", get(list_enrollments_by_national_id))
        .route("/oferta/:oferta", get(list_enrollments_by_offer))
}

/// List all enrollments
#[utoipa::path(
    get,
    path = "/api/inscricoes",
    tag = "Enrollments",
    responses(
        (status = 200, description = "All enrollments", body = Vec<EnrollmentDetails>)
    )
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EnrollmentDetails>>> {
    let enrollments = state.enrollment_service.list_enrollments().await?;
    Ok(Json(enrollments))
}

/// Get enrollment by ID
#[utoipa::path(
    get,
    path = "/api/inscricoes/{id}",
    tag = "Enrollments",
    params(
        ("id" = i32, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 200, description = "Enrollment found", body = EnrollmentDetails),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    )
)]
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EnrollmentDetails>> {
    let enrollment = state.enrollment_service.get_enrollment(id).await?;
    Ok(Json(enrollment))
}

/// Create a new enrollment
///
/// Responds `200 OK` with the stored record, relations included.
#[utoipa::path(
    post,
    path = "/api/inscricoes",
    tag = "Enrollments",
    request_body = NewEnrollment,
    responses(
        (status = 200, description = "Enrollment created", body = EnrollmentDetails),
        (status = 400, description = "Missing or invalid body", body = ErrorResponse)
    )
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewEnrollment>,
) -> AppResult<Json<EnrollmentDetails>> {
    let enrollment = state.enrollment_service.create_enrollment(payload).await?;
    Ok(Json(enrollment))
}

/// Replace an enrollment
///
/// The body must carry the same `id` as the path. When the id is unknown and
/// the missing-record policy is `ignore`, the payload is echoed back unchanged.
#[utoipa::path(
    put,
    path = "/api/inscricoes/{id}",
    tag = "Enrollments",
    params(
        ("id" = i32, Path, description = "Enrollment ID")
    ),
    request_body = Enrollment,
    responses(
        (status = 200, description = "Enrollment replaced", body = EnrollmentDetails),
        (status = 400, description = "Missing body or id mismatch", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    )
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<Enrollment>,
) -> AppResult<Response> {
    if payload.id != id {
        return Err(AppError::bad_request(INVALID_PAYLOAD_MESSAGE));
    }

    let response = match state
        .enrollment_service
        .update_enrollment(payload.clone())
        .await?
    {
        Some(details) => Json(details).into_response(),
        None => Json(payload).into_response(),
    };

    Ok(response)
}

/// Delete an enrollment
#[utoipa::path(
    delete,
    path = "/api/inscricoes/{id}",
    tag = "Enrollments",
    params(
        ("id" = i32, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 200, description = "Enrollment deleted"),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    )
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.enrollment_service.delete_enrollment(id).await?;
    Ok(StatusCode::OK)
}

/// List enrollments by the lead's national ID (CPF)
#[utoipa::path(
    get,
    path = "/api/inscricoes/cpf/{cpf}",
    tag = "Enrollments",
    params(
        ("cpf" = String, Path, description = "Lead national ID")
    ),
    responses(
        (status = 200, description = "Matching enrollments, possibly none", body = Vec<EnrollmentDetails>)
    )
)]
pub async fn list_enrollments_by_national_id(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> AppResult<Json<Vec<EnrollmentDetails>>> {
    let enrollments = state
        .enrollment_service
        .enrollments_by_national_id(&cpf)
        .await?;
    Ok(Json(enrollments))
}

/// List enrollments by offer name
#[utoipa::path(
    get,
    path = "/api/inscricoes/oferta/{oferta}",
    tag = "Enrollments",
    params(
        ("oferta" = String, Path, description = "Offer name")
    ),
    responses(
        (status = 200, description = "Matching enrollments, possibly none", body = Vec<EnrollmentDetails>)
    )
)]
pub async fn list_enrollments_by_offer(
    State(state): State<AppState>,
    Path(oferta): Path<String>,
) -> AppResult<Json<Vec<EnrollmentDetails>>> {
    let enrollments = state.enrollment_service.enrollments_by_offer(&oferta).await?;
    Ok(Json(enrollments))
}
