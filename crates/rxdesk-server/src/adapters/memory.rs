//! In-memory PrescriptionRepository used by service and route tests

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use rxdesk::{DomainError, NewPrescription, PrescriptionRepository, PrescriptionRow};

#[derive(Default)]
pub struct InMemoryPrescriptionRepository {
    rows: Mutex<Vec<serde_json::Value>>,
    next_id: Mutex<i64>,
    /// When set, inserts succeed but echo no rows
    silent_insert: bool,
    /// When set, every call fails with this message
    failure: Option<String>,
}

impl InMemoryPrescriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn silent() -> Self {
        Self {
            silent_insert: true,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Store a raw row as-is, bypassing validation
    pub fn push_raw(&self, row: serde_json::Value) {
        self.rows.lock().unwrap().push(row);
    }

    fn check(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::Persistence(message.clone())),
            None => Ok(()),
        }
    }

    fn decode(rows: Vec<serde_json::Value>) -> Result<Vec<PrescriptionRow>, DomainError> {
        rows.into_iter().map(PrescriptionRow::from_value).collect()
    }
}

#[async_trait]
impl PrescriptionRepository for InMemoryPrescriptionRepository {
    async fn insert(
        &self,
        prescription: &NewPrescription,
    ) -> Result<Vec<PrescriptionRow>, DomainError> {
        self.check()?;

        let mut row = serde_json::to_value(prescription)
            .map_err(|e| DomainError::Persistence(e.to_string()))?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        row["id"] = json!(id);
        self.rows.lock().unwrap().push(row.clone());

        if self.silent_insert {
            return Ok(Vec::new());
        }
        Self::decode(vec![row])
    }

    async fn find_all(&self, drid: Option<i64>) -> Result<Vec<PrescriptionRow>, DomainError> {
        self.check()?;

        let rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| drid.map_or(true, |d| row["drid"].as_i64() == Some(d)))
            .cloned()
            .collect();
        Self::decode(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PrescriptionRow>, DomainError> {
        self.check()?;

        let row = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row["id"].as_i64() == Some(id))
            .cloned();
        row.map(PrescriptionRow::from_value).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.check()?;

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row["id"].as_i64() != Some(id));
        Ok(rows.len() != before)
    }
}
