//! Infrastructure error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("configuration error: {message}")]
    Configuration { message: String },
    #[error("telemetry error: {0}")]
    Telemetry(String),
    #[error("database error: {message}")]
    Database { message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InfraError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
