//! Prescription wire shapes
//!
//! Request/response DTOs for the HTTP surface. Inbound bodies are type-checked
//! here before anything reaches the store.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use rxdesk::{DomainError, Medicine, NewPrescription, Prescription};

/// Single drug entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicinePayload {
    #[schema(example = "Paracetamol")]
    pub name: String,
    #[schema(example = "500mg")]
    pub dosage: String,
    #[schema(example = "2x/day")]
    pub frequency: String,
    #[schema(example = "after meals")]
    pub note: String,
}

/// Create prescription request (FormData)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    pub drid: i64,
    pub send_to_value: String,
    pub patient_name: String,
    pub patient_age: String,
    pub patient_description: String,
    pub current_date: String,
    pub medicines: Vec<MedicinePayload>,
}

/// Prescription response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionResponse {
    pub id: i64,
    pub drid: i64,
    pub send_to_value: String,
    pub patient_name: String,
    pub patient_age: String,
    pub patient_description: String,
    pub current_date: String,
    pub medicines: Vec<MedicinePayload>,
}

/// Query parameters for listing prescriptions
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPrescriptionsQuery {
    /// Only return prescriptions issued by this doctor
    pub drid: Option<i64>,
}

/// Delete confirmation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Prescription deleted successfully")]
    pub message: String,
}

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl CreatePrescriptionRequest {
    /// Type-check an untyped request body.
    ///
    /// Every field is required; extra fields are ignored.
    pub fn parse(body: &[u8]) -> Result<NewPrescription, DomainError> {
        let request: Self =
            serde_json::from_slice(body).map_err(|e| DomainError::Validation(e.to_string()))?;
        Ok(request.into())
    }
}

impl From<MedicinePayload> for Medicine {
    fn from(payload: MedicinePayload) -> Self {
        Self {
            name: payload.name,
            dosage: payload.dosage,
            frequency: payload.frequency,
            note: payload.note,
        }
    }
}

impl From<Medicine> for MedicinePayload {
    fn from(medicine: Medicine) -> Self {
        Self {
            name: medicine.name,
            dosage: medicine.dosage,
            frequency: medicine.frequency,
            note: medicine.note,
        }
    }
}

impl From<CreatePrescriptionRequest> for NewPrescription {
    fn from(request: CreatePrescriptionRequest) -> Self {
        Self {
            drid: request.drid,
            send_to_value: request.send_to_value,
            patient_name: request.patient_name,
            patient_age: request.patient_age,
            patient_description: request.patient_description,
            current_date: request.current_date,
            medicines: request.medicines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Prescription> for PrescriptionResponse {
    fn from(prescription: Prescription) -> Self {
        Self {
            id: prescription.id,
            drid: prescription.drid,
            send_to_value: prescription.send_to_value,
            patient_name: prescription.patient_name,
            patient_age: prescription.patient_age,
            patient_description: prescription.patient_description,
            current_date: prescription.current_date,
            medicines: prescription.medicines.into_iter().map(Into::into).collect(),
        }
    }
}
