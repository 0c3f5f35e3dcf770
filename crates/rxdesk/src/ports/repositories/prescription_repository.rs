//! Prescription Repository Port
//!
//! Abstract interface over the remote table-oriented store. Every method is a
//! single one-shot store call; implementations report transport and store
//! failures as `DomainError::Persistence`.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewPrescription, PrescriptionRow};

/// Repository interface for Prescription records
#[async_trait]
pub trait PrescriptionRepository: Send + Sync {
    /// Insert a full record, returning the rows the store echoed back
    async fn insert(
        &self,
        prescription: &NewPrescription,
    ) -> Result<Vec<PrescriptionRow>, DomainError>;

    /// Select all rows, or only those whose `drid` equals the filter
    async fn find_all(&self, drid: Option<i64>) -> Result<Vec<PrescriptionRow>, DomainError>;

    /// Select the row with the given id
    async fn find_by_id(&self, id: i64) -> Result<Option<PrescriptionRow>, DomainError>;

    /// Delete the row with the given id; `false` when nothing was deleted
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
