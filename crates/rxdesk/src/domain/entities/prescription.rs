//! Prescription - a doctor's medication order for a patient
//!
//! Pure domain entity without infrastructure dependencies. Field names on the
//! wire and in the store are camelCase (`sendToValue`, `patientName`, ...).

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Medicine - single drug entry embedded in a Prescription (no identity of its own)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub note: String,
}

/// Prescription before persistence (no `id` yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrescription {
    /// Issuing doctor
    pub drid: i64,
    pub send_to_value: String,
    pub patient_name: String,
    /// Free-form, not numeric-validated
    pub patient_age: String,
    pub patient_description: String,
    /// Free-form, not date-validated
    pub current_date: String,
    pub medicines: Vec<Medicine>,
}

/// Persisted Prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    /// Assigned by the store on creation
    pub id: i64,
    pub drid: i64,
    pub send_to_value: String,
    pub patient_name: String,
    pub patient_age: String,
    pub patient_description: String,
    pub current_date: String,
    pub medicines: Vec<Medicine>,
}

/// Row as returned by the store: typed scalar columns, raw `medicines` JSON
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionRow {
    pub id: i64,
    pub drid: i64,
    pub send_to_value: String,
    pub patient_name: String,
    pub patient_age: String,
    pub patient_description: String,
    pub current_date: String,
    #[serde(default)]
    pub medicines: serde_json::Value,
}

impl Prescription {
    /// Attach a store-assigned id to a new record
    pub fn from_new(id: i64, new: NewPrescription) -> Self {
        Self {
            id,
            drid: new.drid,
            send_to_value: new.send_to_value,
            patient_name: new.patient_name,
            patient_age: new.patient_age,
            patient_description: new.patient_description,
            current_date: new.current_date,
            medicines: new.medicines,
        }
    }
}

impl PrescriptionRow {
    /// Decode one raw store row
    pub fn from_value(value: serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(value)
            .map_err(|e| DomainError::Shape(format!("prescription row: {e}")))
    }
}

impl TryFrom<PrescriptionRow> for Prescription {
    type Error = DomainError;

    fn try_from(row: PrescriptionRow) -> Result<Self, Self::Error> {
        let medicines: Vec<Medicine> = serde_json::from_value(row.medicines).map_err(|e| {
            DomainError::Shape(format!("medicines of prescription {}: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            drid: row.drid,
            send_to_value: row.send_to_value,
            patient_name: row.patient_name,
            patient_age: row.patient_age,
            patient_description: row.patient_description,
            current_date: row.current_date,
            medicines,
        })
    }
}
