//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreatePrescriptionRequest, DeleteResponse, ErrorResponse, MedicinePayload,
    PrescriptionResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::prescription::create_prescription,
        super::prescription::list_prescriptions,
        super::prescription::get_prescription,
        super::prescription::delete_prescription,
    ),
    info(
        title = "Rxdesk API",
        version = "0.1.0",
        description = "Prescription records over a Supabase table.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Prescription", description = "Prescription create, list, get and delete"),
    ),
    components(
        schemas(
            MedicinePayload,
            CreatePrescriptionRequest,
            PrescriptionResponse,
            DeleteResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
