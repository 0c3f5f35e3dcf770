//! Prescription Routes
//!
//! HTTP handlers that delegate to PrescriptionService. Each handler performs
//! exactly one store call.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

use rxdesk::DomainError;

use crate::error::ApiError;
use crate::models::{
    CreatePrescriptionRequest, DeleteResponse, ErrorResponse, ListPrescriptionsQuery,
    PrescriptionResponse,
};
use crate::AppState;

fn prescription_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| DomainError::Validation(rejection.body_text()).into())
}

/// Create new Prescription
#[utoipa::path(
    post,
    path = "/prescriptions/",
    request_body = CreatePrescriptionRequest,
    responses(
        (status = 200, description = "Prescription stored", body = PrescriptionResponse),
        (status = 422, description = "Payload is not a prescription", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Prescription"
)]
pub async fn create_prescription(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PrescriptionResponse>, ApiError> {
    let prescription = CreatePrescriptionRequest::parse(&body)?;
    let created = state.prescription_service.create(prescription).await?;

    Ok(Json(created.into()))
}

/// List Prescriptions, optionally filtered by doctor
#[utoipa::path(
    get,
    path = "/prescriptions/",
    params(ListPrescriptionsQuery),
    responses(
        (status = 200, description = "Matching prescriptions", body = Vec<PrescriptionResponse>),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Prescription"
)]
pub async fn list_prescriptions(
    State(state): State<AppState>,
    query: Result<Query<ListPrescriptionsQuery>, QueryRejection>,
) -> Result<Json<Vec<PrescriptionResponse>>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| DomainError::Validation(rejection.body_text()))?;

    let prescriptions = state.prescription_service.list(query.drid).await?;

    Ok(Json(prescriptions.into_iter().map(Into::into).collect()))
}

/// Get Prescription by ID
#[utoipa::path(
    get,
    path = "/prescriptions/{id}",
    params(
        ("id" = i64, Path, description = "Prescription ID")
    ),
    responses(
        (status = 200, description = "Prescription found", body = PrescriptionResponse),
        (status = 404, description = "Prescription not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Prescription"
)]
pub async fn get_prescription(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PrescriptionResponse>, ApiError> {
    let id = prescription_id(path)?;
    let prescription = state.prescription_service.get_by_id(id).await?;

    Ok(Json(prescription.into()))
}

/// Delete Prescription
#[utoipa::path(
    delete,
    path = "/prescriptions/{id}",
    params(
        ("id" = i64, Path, description = "Prescription ID")
    ),
    responses(
        (status = 200, description = "Prescription deleted", body = DeleteResponse),
        (status = 404, description = "Prescription not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Prescription"
)]
pub async fn delete_prescription(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = prescription_id(path)?;
    state.prescription_service.delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "Prescription deleted successfully".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prescriptions", get(list_prescriptions).post(create_prescription))
        .route("/prescriptions/", get(list_prescriptions).post(create_prescription))
        .route("/prescriptions/:id", get(get_prescription).delete(delete_prescription))
}
