//! Supabase (PostgREST) implementation of PrescriptionRepository
//!
//! Talks to `{SUPABASE_URL}/rest/v1/{table}` with reqwest. Inserts and deletes
//! ask for `return=representation` so the affected rows come back in the body.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use rxdesk::{DomainError, NewPrescription, PrescriptionRepository, PrescriptionRow};

use crate::config::SupabaseConfig;

const PREFER_REPRESENTATION: &str = "return=representation";

/// PostgREST-backed implementation of PrescriptionRepository
pub struct SupabasePrescriptionRepository {
    client: Client,
    endpoint: String,
}

/// Error body returned by PostgREST on non-2xx responses
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    code: Option<String>,
    details: Option<String>,
}

impl SupabasePrescriptionRepository {
    pub fn new(config: &SupabaseConfig) -> Result<Self, DomainError> {
        let invalid_key =
            |e: reqwest::header::InvalidHeaderValue| DomainError::Persistence(e.to_string());

        let mut api_key = HeaderValue::from_str(&config.key).map_err(invalid_key)?;
        api_key.set_sensitive(true);
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.key)).map_err(invalid_key)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("rxdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Persistence(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/rest/v1/{}", config.url, config.table),
        })
    }

    /// Send one request and decode the JSON array of rows it returns
    async fn execute(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<Vec<PrescriptionRow>, DomainError> {
        tracing::debug!(operation, endpoint = %self.endpoint, "Calling Supabase");

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Persistence(format!("{operation} request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Persistence(error_message(status, &body)));
        }

        let values: Vec<serde_json::Value> = response.json().await.map_err(|e| {
            DomainError::Persistence(format!("{operation} returned an unreadable body: {e}"))
        })?;

        values.into_iter().map(PrescriptionRow::from_value).collect()
    }
}

/// Prefer the PostgREST `message`, fall back to the raw body
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            let mut message = err.message;
            if let Some(details) = err.details.filter(|d| !d.is_empty()) {
                message = format!("{message}: {details}");
            }
            match err.code {
                Some(code) => format!("{message} (code {code}, status {status})"),
                None => format!("{message} (status {status})"),
            }
        }
        Err(_) if body.is_empty() => format!("store responded with status {status}"),
        Err(_) => format!("{body} (status {status})"),
    }
}

fn eq_filter(value: i64) -> String {
    format!("eq.{value}")
}

#[async_trait]
impl PrescriptionRepository for SupabasePrescriptionRepository {
    async fn insert(
        &self,
        prescription: &NewPrescription,
    ) -> Result<Vec<PrescriptionRow>, DomainError> {
        let request = self
            .client
            .post(&self.endpoint)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&[prescription]);

        self.execute("insert", request).await
    }

    async fn find_all(&self, drid: Option<i64>) -> Result<Vec<PrescriptionRow>, DomainError> {
        let mut query = vec![("select", "*".to_string()), ("order", "id.asc".to_string())];
        if let Some(drid) = drid {
            query.push(("drid", eq_filter(drid)));
        }

        let request = self.client.get(&self.endpoint).query(&query);
        self.execute("select", request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PrescriptionRow>, DomainError> {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*".to_string()), ("id", eq_filter(id))]);

        let rows = self.execute("select", request).await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let request = self
            .client
            .delete(&self.endpoint)
            .header("Prefer", PREFER_REPRESENTATION)
            .query(&[("id", eq_filter(id))]);

        let rows = self.execute("delete", request).await?;
        Ok(!rows.is_empty())
    }
}
