/// Unified error type for the gateway
/// Provides structured error handling with categories for different failure modes
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// Initialization errors: unreadable schema resources, missing credentials
    #[error("Initialization error: {message}")]
    Initialization {
        message: String,
        path: Option<String>,
    },

    /// Generation errors: the LLM call failed (network, auth, quota)
    #[error("Generation error: {message}")]
    Generation {
        message: String,
    },

    /// Execution errors: the database rejected or failed on the generated SQL
    #[error("Execution error: {message}")]
    Execution {
        message: String,
        sql: Option<String>,
    },
}

impl GatewayError {
    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
            path: None,
        }
    }

    pub fn initialization_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
            sql: None,
        }
    }

    pub fn execution_with_sql(message: impl Into<String>, sql: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
            sql: Some(sql.into()),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Generation {
            message: err.to_string(),
        }
    }
}

impl From<tokio_postgres::Error> for GatewayError {
    fn from(err: tokio_postgres::Error) -> Self {
        Self::Execution {
            message: err.to_string(),
            sql: None,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
