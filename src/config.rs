//! Gateway configuration
//!
//! All settings come from the environment, read once at startup. Only the
//! API credential is mandatory; everything else has a workable default.

use std::env;
use std::path::PathBuf;

use crate::error::{GatewayError, GatewayResult};

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP listen port
    pub port: u16,

    /// JDBC-style driver identifier the dialect is derived from
    pub driver_class_name: String,

    /// Path to the OWL Turtle ontology description
    pub ontology_file: PathBuf,

    /// Path to the flat metadata-only description
    pub metadata_only_file: PathBuf,

    /// Credential for the chat completions API. Required.
    pub openai_api_key: String,

    /// Override for the chat completions endpoint base URL
    pub openai_base_url: Option<String>,

    /// Override for the model identifier
    pub openai_model: Option<String>,

    /// PostgreSQL connection string for the query executor
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> GatewayResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> GatewayResult<Self> {
        let openai_api_key = get("OPENAI_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GatewayError::initialization("OPENAI_API_KEY is not set"))?;

        Ok(Self {
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            driver_class_name: get("DB_DRIVER_CLASS")
                .unwrap_or_else(|| "org.postgresql.Driver".to_string()),
            ontology_file: get("ONTOLOGY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("resources/ontology.ttl")),
            metadata_only_file: get("METADATA_ONLY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("resources/metadata_only.json")),
            openai_api_key,
            openai_base_url: get("OPENAI_BASE_URL"),
            openai_model: get("OPENAI_MODEL"),
            database_url: get("DATABASE_URL")
                .unwrap_or_else(|| "host=localhost user=postgres".to_string()),
        })
    }
}
