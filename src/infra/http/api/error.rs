//! JSON error body shared by the admin API and public read surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::content::ContentError;
use crate::application::offerings::OfferingError;
use crate::application::repos::RepoError;
use crate::application::site::SiteError;
use crate::schema::ValidationError;

pub mod codes {
    pub const BAD_REQUEST: &str = "bad_request";
    pub const NOT_FOUND: &str = "not_found";
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const DUPLICATE: &str = "duplicate";
    pub const INVALID_INPUT: &str = "invalid_input";
    pub const INTEGRITY: &str = "integrity_error";
    pub const DB_TIMEOUT: &str = "db_timeout";
    pub const PERSISTENCE: &str = "persistence_error";
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorMessage {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ApiFieldError>,
}

/// One rejected field, surfaced verbatim to the caller so the admin UI
/// can attach the message to the right input.
#[derive(Debug, Serialize)]
pub struct ApiFieldError {
    pub field: String,
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    fields: Vec<ApiFieldError>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, codes::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, codes::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::PERSISTENCE,
            message,
        )
    }

    pub fn validation(error: ValidationError) -> Self {
        let fields = error
            .errors
            .iter()
            .map(|field| ApiFieldError {
                field: field.field.clone(),
                code: field.reason.code(),
                message: field.message.clone(),
            })
            .collect();
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: codes::VALIDATION_FAILED,
            message: "content failed validation".to_string(),
            fields,
        }
    }

    fn repo(error: RepoError) -> Self {
        match error {
            RepoError::NotFound => Self::not_found("resource not found"),
            RepoError::Duplicate { constraint } => Self::new(
                StatusCode::CONFLICT,
                codes::DUPLICATE,
                format!("duplicate record: {constraint}"),
            ),
            RepoError::InvalidInput { message } => {
                Self::new(StatusCode::BAD_REQUEST, codes::INVALID_INPUT, message)
            }
            RepoError::Integrity { .. } => Self::new(
                StatusCode::CONFLICT,
                codes::INTEGRITY,
                "integrity constraint violated",
            ),
            RepoError::Timeout => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                codes::DB_TIMEOUT,
                "database timeout",
            ),
            // Details stay in the logs; callers get a generic failure.
            RepoError::Persistence(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::PERSISTENCE,
                "persistence failure",
            ),
        }
    }
}

impl From<ContentError> for ApiError {
    fn from(error: ContentError) -> Self {
        match error {
            ContentError::Validation(validation) => Self::validation(validation),
            ContentError::Corrupt { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::INTEGRITY,
                "stored content is corrupt",
            ),
            ContentError::Repo(repo) => Self::repo(repo),
        }
    }
}

impl From<OfferingError> for ApiError {
    fn from(error: OfferingError) -> Self {
        match error {
            OfferingError::Validation(validation) => Self::validation(validation),
            OfferingError::Repo(repo) => Self::repo(repo),
        }
    }
}

impl From<SiteError> for ApiError {
    fn from(error: SiteError) -> Self {
        match error {
            SiteError::Content(content) => content.into(),
            SiteError::Offerings(offerings) => offerings.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: ApiErrorMessage {
                code: self.code.to_string(),
                message: self.message,
                fields: self.fields,
            },
        };
        (self.status, Json(body)).into_response()
    }
}
