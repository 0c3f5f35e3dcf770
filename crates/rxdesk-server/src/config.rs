//! Supabase connection configuration
//!
//! Resolved once at startup. Both `SUPABASE_URL` and `SUPABASE_KEY` are
//! required; a missing or blank value aborts startup.

use std::fmt;

use thiserror::Error;

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_KEY: &str = "SUPABASE_KEY";
pub const PRESCRIPTIONS_TABLE: &str = "PRESCRIPTIONS_TABLE";

pub const DEFAULT_TABLE: &str = "prescriptions";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing Supabase credentials: set {0} (Secrets.toml, environment or .env)")]
    Missing(&'static str),
}

/// Connection parameters for the remote store
#[derive(Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// API key sent as both `apikey` and bearer token
    pub key: String,
    /// Table holding prescription rows
    pub table: String,
}

impl SupabaseConfig {
    /// Build from any key lookup (secret store, environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let url = required(SUPABASE_URL)?;
        let key = required(SUPABASE_KEY)?;
        let table = lookup(PRESCRIPTIONS_TABLE)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            key,
            table,
        })
    }
}

// Keep the key out of logs.
impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}
