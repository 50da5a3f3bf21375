//! Error types
//!
//! Request validation failures and catalog load failures share one enum.
//! Handlers return it directly; `IntoResponse` maps each variant to a status
//! code and a `{"detail": ...}` body.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Service not found: {0}")]
    NotFound(String),

    #[error("At least 2 services are required for comparison")]
    InsufficientServices(usize),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("Duplicate service id in catalog: {0}")]
    DuplicateServiceId(String),

    #[error("Catalog file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::InvalidCategory(_)
            | CatalogError::InsufficientServices(_)
            | CatalogError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::DuplicateServiceId(_)
            | CatalogError::Io(_)
            | CatalogError::Json(_)
            | CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Query strings that fail to deserialize keep axum's message but get the
/// JSON error body.
impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = if status.is_server_error() {
            tracing::error!("request failed: {}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!("request rejected: {}", self);
            self.to_string()
        };

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_map_to_client_statuses() {
        assert_eq!(
            CatalogError::InvalidCategory("Nope".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::NotFound("nope".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::InsufficientServices(1).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::InvalidQuery("missing field".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            CatalogError::InvalidCategory("Quantum".into()).to_string(),
            "Invalid category: Quantum"
        );
        assert_eq!(
            CatalogError::NotFound("doesnotexist".into()).to_string(),
            "Service not found: doesnotexist"
        );
    }
}
