//! Prescription Application Service (Use Case)
//!
//! Applies the gateway semantics on top of the repository port: one store call
//! per operation, empty results mapped to failures or `NotFound`, stored rows
//! reshaped into typed records.

use std::sync::Arc;

use rxdesk::{DomainError, NewPrescription, Prescription, PrescriptionRepository};

const ENTITY: &str = "Prescription";

/// Application service for Prescription operations
pub struct PrescriptionService<R: PrescriptionRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PrescriptionRepository + ?Sized> PrescriptionService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Store a new prescription and return it with its assigned id
    ///
    /// An insert that echoes no rows is a failure, even though the store may
    /// have accepted it.
    pub async fn create(&self, prescription: NewPrescription) -> Result<Prescription, DomainError> {
        let row = self
            .repo
            .insert(&prescription)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Persistence("Failed to store prescription".to_string()))?;

        let created = Prescription::try_from(row)?;
        tracing::info!("Created Prescription: {} (drid {})", created.id, created.drid);

        Ok(created)
    }

    /// List all prescriptions, or those issued by one doctor
    pub async fn list(&self, drid: Option<i64>) -> Result<Vec<Prescription>, DomainError> {
        self.repo
            .find_all(drid)
            .await?
            .into_iter()
            .map(Prescription::try_from)
            .collect()
    }

    /// Get a prescription by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Prescription, DomainError> {
        let row = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        Prescription::try_from(row)
    }

    /// Delete a prescription
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found(ENTITY, id));
        }

        tracing::info!("Deleted Prescription: {}", id);
        Ok(())
    }
}
